//! Domain service - business logic orchestration

use super::events::{EventPublisher, IncidentEvent};
use super::repository::{IncidentRepository, IncidentTypeRepository};
use super::validation;
use crate::contract::{
    FieldError, Incident, IncidentError, IncidentType, NewIncident, SearchOutcome,
};
use chrono::NaiveDate;
use std::sync::Arc;

/// Page size used by reference-number searches unless configured otherwise
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// Domain service for incident management
pub struct Service {
    incident_repo: Arc<dyn IncidentRepository>,
    incident_type_repo: Arc<dyn IncidentTypeRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    page_size: u64,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        incident_repo: Arc<dyn IncidentRepository>,
        incident_type_repo: Arc<dyn IncidentTypeRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            incident_repo,
            incident_type_repo,
            event_publisher,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the search page size (values below 1 are clamped to 1)
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    // ===== Incident Operations =====

    /// Validate and persist a new incident
    pub async fn report_incident(&self, incident: NewIncident) -> Result<Incident, IncidentError> {
        self.validate_incident(&incident).await?;

        let saved = self
            .incident_repo
            .insert(&incident)
            .await
            .map_err(internal)?;

        tracing::info!(
            incident_id = saved.id,
            ref_number = %saved.ref_number,
            "incident reported"
        );
        self.publish(IncidentEvent::reported(&saved)).await;

        Ok(saved)
    }

    /// Replace the bindable fields of an existing incident
    pub async fn update_incident(
        &self,
        id: i32,
        incident: NewIncident,
    ) -> Result<Incident, IncidentError> {
        // Unknown ids are reported before any field is looked at
        self.get_incident(id).await?;
        self.validate_incident(&incident).await?;

        let updated = self
            .incident_repo
            .update(id, &incident)
            .await
            .map_err(internal)?
            .ok_or_else(|| IncidentError::incident_not_found(id))?;

        tracing::info!(incident_id = id, "incident updated");
        self.publish(IncidentEvent::updated(&updated)).await;

        Ok(updated)
    }

    /// Get an incident by id
    pub async fn get_incident(&self, id: i32) -> Result<Incident, IncidentError> {
        self.incident_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| IncidentError::incident_not_found(id))
    }

    /// Search incidents by reference-number prefix.
    ///
    /// A missing prefix searches everything. `page` is 1-based.
    pub async fn search_incidents(
        &self,
        ref_number: Option<&str>,
        page: i64,
    ) -> Result<SearchOutcome, IncidentError> {
        if page < 1 {
            return Err(IncidentError::InvalidPage { page });
        }

        let prefix = ref_number.unwrap_or_default();
        let page_index = (page - 1) as u64;

        // A page whose row offset does not fit an SQL OFFSET cannot hold any rows
        let offset_fits = page_index
            .checked_mul(self.page_size)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !offset_fits {
            tracing::debug!(page, "incident search page out of range");
            return Ok(SearchOutcome::NotFound);
        }

        let mut results = self
            .incident_repo
            .find_by_ref_number_prefix(prefix, page_index, self.page_size)
            .await
            .map_err(internal)?;

        tracing::debug!(
            prefix,
            page,
            total_items = results.total_items,
            "incident search"
        );

        if results.is_empty() {
            return Ok(SearchOutcome::NotFound);
        }

        if results.total_items == 1 && results.items.len() == 1 {
            if let Some(incident) = results.items.pop() {
                return Ok(SearchOutcome::Single(incident));
            }
        }

        Ok(SearchOutcome::Many(results))
    }

    /// Run field validation plus the incident-type reference check
    pub async fn validate_incident(&self, incident: &NewIncident) -> Result<(), IncidentError> {
        let mut errors = validation::validate_new_incident(incident, today());

        if let Some(type_id) = incident.incident_type_id {
            let known = self
                .incident_type_repo
                .find_by_id(type_id)
                .await
                .map_err(internal)?
                .is_some();

            if !known {
                errors.push(FieldError::new(
                    validation::INCIDENT_TYPE_ID,
                    "unknownType",
                    format!("unknown incident type {}", type_id),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(IncidentError::Validation { errors })
        }
    }

    // ===== Incident Type Operations =====

    /// List all incident types ordered by name
    pub async fn list_incident_types(&self) -> Result<Vec<IncidentType>, IncidentError> {
        self.incident_type_repo.list_all().await.map_err(internal)
    }

    /// Register a new incident type
    pub async fn register_incident_type(&self, name: &str) -> Result<IncidentType, IncidentError> {
        let name = name.trim();
        validation::validate_incident_type_name(name)?;

        if self
            .incident_type_repo
            .find_by_name(name)
            .await
            .map_err(internal)?
            .is_some()
        {
            return Err(IncidentError::Conflict {
                reason: format!("Incident type already exists: {}", name),
            });
        }

        let created = self
            .incident_type_repo
            .create(name)
            .await
            .map_err(internal)?;

        tracing::info!(incident_type_id = created.id, name, "incident type registered");
        Ok(created)
    }

    /// Register every name that is not already known; returns how many were created
    pub async fn ensure_incident_types(&self, names: &[String]) -> Result<usize, IncidentError> {
        let mut created = 0;

        for name in names {
            match self.register_incident_type(name).await {
                Ok(_) => created += 1,
                Err(IncidentError::Conflict { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(created)
    }

    // ===== Helper Methods =====

    async fn publish(&self, event: IncidentEvent) {
        if let Err(e) = self.event_publisher.publish(event).await {
            tracing::warn!(error = %e, "failed to publish incident event");
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn internal(error: anyhow::Error) -> IncidentError {
    tracing::error!("Repository error: {:?}", error);
    IncidentError::Internal
}
