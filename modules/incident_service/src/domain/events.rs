//! Domain events for incident service
//!
//! Events are published after an incident is persisted. Publishing is
//! best-effort: a failed publish is logged and never fails the operation.

use crate::contract::model::Incident;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types for incidents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum IncidentEvent {
    /// A new incident was reported
    IncidentReported(IncidentChangedEvent),
    /// An existing incident was edited
    IncidentUpdated(IncidentChangedEvent),
}

/// Event data shared by report and update events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentChangedEvent {
    pub incident_id: i32,
    pub ref_number: String,
    pub report_date: NaiveDate,
    pub status: String,
    pub category: String,
    pub incident_type: Option<String>,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl IncidentChangedEvent {
    fn from_incident(incident: &Incident) -> Self {
        Self {
            incident_id: incident.id,
            ref_number: incident.ref_number.clone(),
            report_date: incident.report_date,
            status: incident.status.clone(),
            category: incident.category.clone(),
            incident_type: incident.incident_type.as_ref().map(|t| t.name.clone()),
            timestamp: Utc::now(),
        }
    }
}

impl IncidentEvent {
    /// Create a new IncidentReported event
    pub fn reported(incident: &Incident) -> Self {
        IncidentEvent::IncidentReported(IncidentChangedEvent::from_incident(incident))
    }

    /// Create a new IncidentUpdated event
    pub fn updated(incident: &Incident) -> Self {
        IncidentEvent::IncidentUpdated(IncidentChangedEvent::from_incident(incident))
    }

    pub fn incident_id(&self) -> i32 {
        match self {
            IncidentEvent::IncidentReported(e) | IncidentEvent::IncidentUpdated(e) => e.incident_id,
        }
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an incident event
    async fn publish(&self, event: IncidentEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: IncidentEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Publisher that writes every event to the structured log
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: IncidentEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(
            target: "incident_service::events",
            incident_id = event.incident_id(),
            %payload,
            "incident event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::IncidentType;

    fn sample_incident() -> Incident {
        Incident {
            id: 7,
            ref_number: "INC-007".to_string(),
            description: "Badge reader offline".to_string(),
            report_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: "OPEN".to_string(),
            category: "SECURITY".to_string(),
            incident_type: Some(IncidentType {
                id: 2,
                name: "Hardware".to_string(),
            }),
        }
    }

    #[test]
    fn test_incident_reported_event_creation() {
        let incident = sample_incident();
        let event = IncidentEvent::reported(&incident);

        match event {
            IncidentEvent::IncidentReported(e) => {
                assert_eq!(e.incident_id, 7);
                assert_eq!(e.ref_number, "INC-007");
                assert_eq!(e.incident_type.as_deref(), Some("Hardware"));
            }
            _ => panic!("Expected IncidentReported event"),
        }
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = IncidentEvent::updated(&sample_incident());
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "incident_updated");
        assert_eq!(json["incident_id"], 7);
        assert_eq!(json["report_date"], "2024-03-01");
    }

    #[tokio::test]
    async fn test_publishers_accept_events() {
        let event = IncidentEvent::reported(&sample_incident());

        assert!(NoOpEventPublisher.publish(event.clone()).await.is_ok());
        assert!(TracingEventPublisher.publish(event).await.is_ok());
    }
}
