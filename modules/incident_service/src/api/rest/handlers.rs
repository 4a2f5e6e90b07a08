//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    mapper::bind_incident_form,
    views::{self, Redirect, View},
};
use crate::contract::{FieldError, IncidentError, NewIncident, SearchOutcome};
use crate::domain::Service;
use axum::{
    extract::{Form, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

pub const INCIDENT_CREATED_MESSAGE: &str = "New Incident reported";
pub const INCIDENT_UPDATED_MESSAGE: &str = "Incident Values Updated";
pub const CREATE_FAILED_MESSAGE: &str = "There was an error in creating the incident.";
pub const UPDATE_FAILED_MESSAGE: &str = "There was an error in updating the incident.";

// ===== Incident Handlers =====

/// Show an empty creation form
pub async fn init_creation_form(service: Arc<Service>) -> Result<Response, Problem> {
    let model = form_model(&service, None, IncidentForm::default(), Vec::new(), None).await?;
    Ok(View::new(views::CREATE_OR_UPDATE_FORM, model).into_response())
}

/// Process a submitted creation form
pub async fn process_creation_form(
    service: Arc<Service>,
    Form(form): Form<IncidentForm>,
) -> Result<Response, Problem> {
    let (incident, binding_errors) = bind_incident_form(&form);
    let result = if binding_errors.is_empty() {
        service.report_incident(incident).await
    } else {
        Err(binding_failure(&service, &incident, binding_errors).await)
    };

    match result {
        Ok(incident) => Ok(Redirect::incident(incident.id)
            .with_message(INCIDENT_CREATED_MESSAGE)
            .into_response()),
        Err(IncidentError::Validation { errors }) => {
            tracing::debug!(errors = errors.len(), "incident creation form rejected");
            let model = form_model(
                &service,
                None,
                form,
                errors,
                Some(CREATE_FAILED_MESSAGE.to_string()),
            )
            .await?;
            Ok(View::new(views::CREATE_OR_UPDATE_FORM, model)
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .into_response())
        }
        Err(e) => Err(map_domain_error(e)),
    }
}

/// Show the find form
pub async fn init_find_form() -> Response {
    View::new(views::FIND_INCIDENTS, FindIncidentsModel::default()).into_response()
}

/// Search incidents by reference-number prefix
///
/// No match re-shows the find form, a single match redirects to it, and
/// several matches render the paginated list.
pub async fn process_find_form(
    service: Arc<Service>,
    Query(query): Query<FindIncidentsQuery>,
) -> Result<Response, Problem> {
    let outcome = service
        .search_incidents(query.ref_number.as_deref(), query.page)
        .await
        .map_err(map_domain_error)?;

    let response = match outcome {
        SearchOutcome::NotFound => {
            let model = FindIncidentsModel {
                ref_number: query.ref_number.unwrap_or_default(),
                errors: vec![FieldError::new("refNumber", "notFound", "not found").into()],
            };
            View::new(views::FIND_INCIDENTS, model).into_response()
        }
        SearchOutcome::Single(incident) => Redirect::incident(incident.id).into_response(),
        SearchOutcome::Many(page) => {
            View::new(views::INCIDENTS_LIST, IncidentsListModel::from(page)).into_response()
        }
    };

    Ok(response)
}

/// Show the edit form for an existing incident
pub async fn init_update_form(
    service: Arc<Service>,
    Path(incident_id): Path<i32>,
) -> Result<Response, Problem> {
    let incident = service
        .get_incident(incident_id)
        .await
        .map_err(map_domain_error)?;

    let form = IncidentForm::from(&incident);
    let model = form_model(&service, Some(incident_id), form, Vec::new(), None).await?;
    Ok(View::new(views::CREATE_OR_UPDATE_FORM, model).into_response())
}

/// Process a submitted edit form
pub async fn process_update_form(
    service: Arc<Service>,
    Path(incident_id): Path<i32>,
    Form(form): Form<IncidentForm>,
) -> Result<Response, Problem> {
    let (incident, binding_errors) = bind_incident_form(&form);
    let result = if binding_errors.is_empty() {
        service.update_incident(incident_id, incident).await
    } else {
        // Unknown ids are a 404 whatever the form contains
        service
            .get_incident(incident_id)
            .await
            .map_err(map_domain_error)?;
        Err(binding_failure(&service, &incident, binding_errors).await)
    };

    match result {
        Ok(incident) => Ok(Redirect::incident(incident.id)
            .with_message(INCIDENT_UPDATED_MESSAGE)
            .into_response()),
        Err(IncidentError::Validation { errors }) => {
            let model = form_model(
                &service,
                Some(incident_id),
                form,
                errors,
                Some(UPDATE_FAILED_MESSAGE.to_string()),
            )
            .await?;
            Ok(View::new(views::CREATE_OR_UPDATE_FORM, model)
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .into_response())
        }
        Err(e) => Err(map_domain_error(e)),
    }
}

/// Show incident details
pub async fn show_incident(
    service: Arc<Service>,
    Path(incident_id): Path<i32>,
) -> Result<Response, Problem> {
    let incident = service
        .get_incident(incident_id)
        .await
        .map_err(map_domain_error)?;

    let model = IncidentDetailsModel {
        incident: incident.into(),
    };
    Ok(View::new(views::INCIDENT_DETAILS, model).into_response())
}

// ===== Incident Type Handlers =====

/// List all incident types
pub async fn list_incident_types(
    service: Arc<Service>,
) -> Result<Json<IncidentTypesListResponse>, Problem> {
    let incident_types = service
        .list_incident_types()
        .await
        .map_err(map_domain_error)?;

    let items: Vec<IncidentTypeDto> = incident_types.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(IncidentTypesListResponse { items, total }))
}

/// Create a new incident type
pub async fn create_incident_type(
    service: Arc<Service>,
    Json(req): Json<CreateIncidentTypeRequest>,
) -> Result<(StatusCode, Json<IncidentTypeDto>), Problem> {
    let incident_type = service
        .register_incident_type(&req.name)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(incident_type.into())))
}

// ===== Helpers =====

/// Combine binding errors with the validation errors of the remaining
/// fields so the whole form can be reported at once.
async fn binding_failure(
    service: &Service,
    incident: &NewIncident,
    mut errors: Vec<FieldError>,
) -> IncidentError {
    match service.validate_incident(incident).await {
        Ok(()) => {}
        Err(IncidentError::Validation { errors: more }) => {
            // A field rejected during binding keeps its binding error only
            let extra: Vec<FieldError> = more
                .into_iter()
                .filter(|e| !errors.iter().any(|b| b.field == e.field))
                .collect();
            errors.extend(extra);
        }
        Err(e) => return e,
    }

    IncidentError::Validation { errors }
}

async fn form_model(
    service: &Service,
    incident_id: Option<i32>,
    incident: IncidentForm,
    errors: Vec<FieldError>,
    error: Option<String>,
) -> Result<IncidentFormModel, Problem> {
    let incident_types = service
        .list_incident_types()
        .await
        .map_err(map_domain_error)?;

    Ok(IncidentFormModel {
        incident_id,
        incident,
        incident_types: incident_types.into_iter().map(Into::into).collect(),
        errors: errors.into_iter().map(Into::into).collect(),
        error,
    })
}
