//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the incident service.
//! NO HTTP - direct function calls.

use super::{
    error::IncidentError,
    model::{Incident, IncidentType, NewIncident, SearchOutcome},
};
use async_trait::async_trait;

/// Incident service API for inter-module communication
#[async_trait]
pub trait IncidentsApi: Send + Sync {
    // ===== Incident Operations =====

    /// Validate and persist a new incident
    async fn report_incident(&self, incident: NewIncident) -> Result<Incident, IncidentError>;

    /// Replace the bindable fields of an existing incident
    async fn update_incident(
        &self,
        id: i32,
        incident: NewIncident,
    ) -> Result<Incident, IncidentError>;

    /// Get an incident by id
    async fn get_incident(&self, id: i32) -> Result<Incident, IncidentError>;

    /// Search incidents by reference-number prefix (1-based page)
    async fn search_incidents(
        &self,
        ref_number: Option<&str>,
        page: i64,
    ) -> Result<SearchOutcome, IncidentError>;

    // ===== Incident Type Operations =====

    /// List all incident types ordered by name
    async fn list_incident_types(&self) -> Result<Vec<IncidentType>, IncidentError>;

    /// Register a new incident type
    async fn register_incident_type(&self, name: &str) -> Result<IncidentType, IncidentError>;
}
