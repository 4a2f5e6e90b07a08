//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Incident, IncidentError, IncidentType, IncidentsApi, NewIncident, SearchOutcome,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl IncidentsApi for NativeClient {
    async fn report_incident(&self, incident: NewIncident) -> Result<Incident, IncidentError> {
        self.service.report_incident(incident).await
    }

    async fn update_incident(
        &self,
        id: i32,
        incident: NewIncident,
    ) -> Result<Incident, IncidentError> {
        self.service.update_incident(id, incident).await
    }

    async fn get_incident(&self, id: i32) -> Result<Incident, IncidentError> {
        self.service.get_incident(id).await
    }

    async fn search_incidents(
        &self,
        ref_number: Option<&str>,
        page: i64,
    ) -> Result<SearchOutcome, IncidentError> {
        self.service.search_incidents(ref_number, page).await
    }

    async fn list_incident_types(&self) -> Result<Vec<IncidentType>, IncidentError> {
        self.service.list_incident_types().await
    }

    async fn register_incident_type(&self, name: &str) -> Result<IncidentType, IncidentError> {
        self.service.register_incident_type(name).await
    }
}
