//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Incident, IncidentPage, IncidentType, NewIncident};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for incidents
#[async_trait]
pub trait IncidentRepository: Send + Sync {
    /// Insert a new incident, returning it with its generated id
    async fn insert(&self, incident: &NewIncident) -> Result<Incident>;

    /// Overwrite an existing incident; `None` when the id is unknown
    async fn update(&self, id: i32, incident: &NewIncident) -> Result<Option<Incident>>;

    /// Find an incident by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Incident>>;

    /// Find incidents whose reference number starts with `prefix`
    ///
    /// `page_index` is 0-based. An empty prefix matches every incident.
    async fn find_by_ref_number_prefix(
        &self,
        prefix: &str,
        page_index: u64,
        page_size: u64,
    ) -> Result<IncidentPage>;
}

/// Repository for incident types
#[async_trait]
pub trait IncidentTypeRepository: Send + Sync {
    /// Create a new incident type
    async fn create(&self, name: &str) -> Result<IncidentType>;

    /// Find an incident type by id
    async fn find_by_id(&self, id: i32) -> Result<Option<IncidentType>>;

    /// Find an incident type by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<IncidentType>>;

    /// List all incident types ordered by name
    async fn list_all(&self) -> Result<Vec<IncidentType>>;
}
