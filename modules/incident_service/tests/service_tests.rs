//! Integration tests for the incident domain service

mod common;

use common::*;
use incident_service::contract::*;
use incident_service::domain::{IncidentEvent, Service};
use std::sync::Arc;

// ===== Reporting =====

#[tokio::test]
async fn test_report_incident_assigns_id() {
    let ctx = create_test_context();

    let incident = ctx
        .service
        .report_incident(new_incident("INC-001"))
        .await
        .expect("Failed to report incident");

    assert_eq!(incident.id, 1);
    assert_eq!(incident.ref_number, "INC-001");
    assert_eq!(incident.report_date, yesterday());
    assert_eq!(ctx.incidents.count(), 1);
}

#[tokio::test]
async fn test_report_incident_with_type() {
    let ctx = create_test_context();
    let security = ctx
        .service
        .register_incident_type("Security")
        .await
        .expect("Failed to register type");

    let mut form = new_incident("INC-002");
    form.incident_type_id = Some(security.id);

    let incident = ctx
        .service
        .report_incident(form)
        .await
        .expect("Failed to report incident");

    assert_eq!(incident.incident_type, Some(security));
}

#[tokio::test]
async fn test_report_incident_rejects_invalid_fields() {
    let ctx = create_test_context();

    let mut form = new_incident("");
    form.description = String::new();
    form.report_date = Some(tomorrow());

    let err = ctx
        .service
        .report_incident(form)
        .await
        .expect_err("Invalid incident must be rejected");

    let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["refNumber", "description", "reportDate"]);
    assert_eq!(ctx.incidents.count(), 0, "Nothing may be saved on validation failure");
}

#[tokio::test]
async fn test_report_incident_rejects_unknown_type() {
    let ctx = create_test_context();

    let mut form = new_incident("INC-003");
    form.incident_type_id = Some(99);

    let err = ctx.service.report_incident(form).await.unwrap_err();

    match err {
        IncidentError::Validation { errors } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "incidentTypeId");
            assert_eq!(errors[0].code, "unknownType");
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_report_incident_publishes_event() {
    let publisher = RecordingPublisher::default();
    let ctx = create_test_context_with_publisher(Arc::new(publisher.clone()));

    let incident = ctx
        .service
        .report_incident(new_incident("INC-004"))
        .await
        .unwrap();

    let events = publisher.events.read();
    assert_eq!(events.len(), 1);
    match &events[0] {
        IncidentEvent::IncidentReported(e) => assert_eq!(e.incident_id, incident.id),
        other => panic!("Expected IncidentReported, got {:?}", other),
    }
}

#[tokio::test]
async fn test_publish_failure_does_not_fail_report() {
    let ctx = create_test_context_with_publisher(Arc::new(FailingPublisher));

    let result = ctx.service.report_incident(new_incident("INC-005")).await;

    assert!(result.is_ok());
    assert_eq!(ctx.incidents.count(), 1);
}

// ===== Lookup and update =====

#[tokio::test]
async fn test_get_incident_not_found() {
    let ctx = create_test_context();

    let err = ctx.service.get_incident(42).await.unwrap_err();

    assert_eq!(
        err,
        IncidentError::NotFound {
            resource: "incident".to_string(),
            id: "42".to_string(),
        }
    );
}

#[tokio::test]
async fn test_update_incident_replaces_fields() {
    let publisher = RecordingPublisher::default();
    let ctx = create_test_context_with_publisher(Arc::new(publisher.clone()));
    let saved = seed_incidents(&ctx.service, &["INC-010"]).await.remove(0);

    let mut form = NewIncident::from(&saved);
    form.status = "CLOSED".to_string();
    form.description = "Resolved by facilities".to_string();

    let updated = ctx
        .service
        .update_incident(saved.id, form)
        .await
        .expect("Failed to update incident");

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.status, "CLOSED");
    assert_eq!(
        ctx.service.get_incident(saved.id).await.unwrap().description,
        "Resolved by facilities"
    );
    assert!(matches!(
        publisher.events.read().last(),
        Some(IncidentEvent::IncidentUpdated(_))
    ));
}

#[tokio::test]
async fn test_update_unknown_incident_is_not_found_before_validation() {
    let ctx = create_test_context();

    let err = ctx
        .service
        .update_incident(7, NewIncident::default())
        .await
        .unwrap_err();

    assert!(matches!(err, IncidentError::NotFound { .. }));
}

#[tokio::test]
async fn test_update_incident_validates() {
    let ctx = create_test_context();
    let saved = seed_incidents(&ctx.service, &["INC-011"]).await.remove(0);

    let mut form = NewIncident::from(&saved);
    form.ref_number = " ".to_string();

    let err = ctx.service.update_incident(saved.id, form).await.unwrap_err();

    assert!(matches!(err, IncidentError::Validation { .. }));
    assert_eq!(ctx.service.get_incident(saved.id).await.unwrap().ref_number, "INC-011");
}

// ===== Search =====

#[tokio::test]
async fn test_search_without_matches_is_not_found() {
    let ctx = create_test_context();
    seed_incidents(&ctx.service, &["INC-001"]).await;

    let outcome = ctx.service.search_incidents(Some("XYZ"), 1).await.unwrap();

    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[tokio::test]
async fn test_search_single_match() {
    let ctx = create_test_context();
    let saved = seed_incidents(&ctx.service, &["INC-001", "SEC-001"]).await;

    let outcome = ctx.service.search_incidents(Some("SEC"), 1).await.unwrap();

    assert_eq!(outcome, SearchOutcome::Single(saved[1].clone()));
}

#[tokio::test]
async fn test_search_missing_prefix_returns_everything() {
    let ctx = create_test_context();
    seed_incidents(&ctx.service, &["A-1", "B-1", "C-1"]).await;

    let outcome = ctx.service.search_incidents(None, 1).await.unwrap();

    match outcome {
        SearchOutcome::Many(page) => {
            assert_eq!(page.total_items, 3);
            assert_eq!(page.items.len(), 3);
            assert_eq!(page.number, 1);
            assert_eq!(page.total_pages, 1);
        }
        other => panic!("Expected Many, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_paginates_by_five() {
    let ctx = create_test_context();
    let refs: Vec<String> = (1..=12).map(|n| format!("INC-{:03}", n)).collect();
    let refs: Vec<&str> = refs.iter().map(String::as_str).collect();
    seed_incidents(&ctx.service, &refs).await;

    let outcome = ctx.service.search_incidents(Some("INC"), 3).await.unwrap();

    match outcome {
        SearchOutcome::Many(page) => {
            assert_eq!(page.number, 3);
            assert_eq!(page.size, 5);
            assert_eq!(page.total_items, 12);
            assert_eq!(page.total_pages, 3);
            let on_page: Vec<&str> = page.items.iter().map(|i| i.ref_number.as_str()).collect();
            assert_eq!(on_page, vec!["INC-011", "INC-012"]);
        }
        other => panic!("Expected Many, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_past_last_page_is_not_found() {
    let ctx = create_test_context();
    seed_incidents(&ctx.service, &["INC-001", "INC-002"]).await;

    let outcome = ctx.service.search_incidents(Some("INC"), 2).await.unwrap();

    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[tokio::test]
async fn test_search_single_match_on_later_page_is_not_found() {
    let ctx = create_test_context();
    seed_incidents(&ctx.service, &["INC-001"]).await;

    let outcome = ctx.service.search_incidents(Some("INC"), 2).await.unwrap();

    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[tokio::test]
async fn test_search_rejects_page_below_one() {
    let ctx = create_test_context();

    for page in [0, -3] {
        let err = ctx.service.search_incidents(None, page).await.unwrap_err();
        assert_eq!(err, IncidentError::InvalidPage { page });
    }
}

#[tokio::test]
async fn test_search_huge_page_is_not_found() {
    let ctx = create_test_context();
    seed_incidents(&ctx.service, &["INC-001", "INC-002"]).await;

    for page in [i64::MAX, i64::MAX / 2] {
        let outcome = ctx.service.search_incidents(None, page).await.unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound, "page {}", page);
    }
}

#[tokio::test]
async fn test_custom_page_size() {
    let types = MockIncidentTypeRepo::new();
    let incidents = MockIncidentRepo::new(types.clone());
    let service = Service::new(
        Arc::new(incidents),
        Arc::new(types),
        Arc::new(incident_service::domain::NoOpEventPublisher),
    )
    .with_page_size(2);
    seed_incidents(&service, &["A", "B", "C"]).await;

    match service.search_incidents(Some(""), 1).await.unwrap() {
        SearchOutcome::Many(page) => {
            assert_eq!(page.items.len(), 2);
            assert_eq!(page.total_pages, 2);
        }
        other => panic!("Expected Many, got {:?}", other),
    }
}

// ===== Incident types =====

#[tokio::test]
async fn test_register_incident_type_trims_and_rejects_duplicates() {
    let ctx = create_test_context();

    let created = ctx
        .service
        .register_incident_type("  Hardware ")
        .await
        .unwrap();
    assert_eq!(created.name, "Hardware");

    let err = ctx
        .service
        .register_incident_type("Hardware")
        .await
        .unwrap_err();
    assert!(matches!(err, IncidentError::Conflict { .. }));

    let err = ctx.service.register_incident_type("").await.unwrap_err();
    assert!(matches!(err, IncidentError::Validation { .. }));
}

#[tokio::test]
async fn test_ensure_incident_types_is_idempotent() {
    let ctx = create_test_context();
    let names = vec!["Security".to_string(), "Facilities".to_string()];

    assert_eq!(ctx.service.ensure_incident_types(&names).await.unwrap(), 2);
    assert_eq!(ctx.service.ensure_incident_types(&names).await.unwrap(), 0);
    assert_eq!(ctx.types.count(), 2);

    let listed: Vec<String> = ctx
        .service
        .list_incident_types()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(listed, vec!["Facilities", "Security"]);
}
