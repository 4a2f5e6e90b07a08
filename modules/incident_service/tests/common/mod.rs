//! Common test utilities: in-memory repositories and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use incident_service::contract::*;
use incident_service::domain::events::{EventPublisher, IncidentEvent};
use incident_service::domain::repository::{IncidentRepository, IncidentTypeRepository};
use incident_service::domain::{NoOpEventPublisher, Service};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

// ===== Incident types =====

#[derive(Clone, Default)]
pub struct MockIncidentTypeRepo {
    data: Arc<RwLock<BTreeMap<i32, IncidentType>>>,
}

impl MockIncidentTypeRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }
}

#[async_trait]
impl IncidentTypeRepository for MockIncidentTypeRepo {
    async fn create(&self, name: &str) -> anyhow::Result<IncidentType> {
        let mut data = self.data.write();
        let id = data.keys().next_back().copied().unwrap_or(0) + 1;
        let incident_type = IncidentType {
            id,
            name: name.to_string(),
        };
        data.insert(id, incident_type.clone());
        Ok(incident_type)
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<IncidentType>> {
        Ok(self.data.read().get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<IncidentType>> {
        Ok(self.data.read().values().find(|t| t.name == name).cloned())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<IncidentType>> {
        let mut types: Vec<IncidentType> = self.data.read().values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }
}

// ===== Incidents =====

#[derive(Clone)]
pub struct MockIncidentRepo {
    data: Arc<RwLock<BTreeMap<i32, Incident>>>,
    types: MockIncidentTypeRepo,
}

impl MockIncidentRepo {
    pub fn new(types: MockIncidentTypeRepo) -> Self {
        Self {
            data: Arc::new(RwLock::new(BTreeMap::new())),
            types,
        }
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    fn materialize(&self, id: i32, incident: &NewIncident) -> anyhow::Result<Incident> {
        let report_date = incident
            .report_date
            .ok_or_else(|| anyhow::anyhow!("missing report date"))?;
        let incident_type = incident
            .incident_type_id
            .and_then(|type_id| self.types.data.read().get(&type_id).cloned());

        Ok(Incident {
            id,
            ref_number: incident.ref_number.clone(),
            description: incident.description.clone(),
            report_date,
            status: incident.status.clone(),
            category: incident.category.clone(),
            incident_type,
        })
    }
}

#[async_trait]
impl IncidentRepository for MockIncidentRepo {
    async fn insert(&self, incident: &NewIncident) -> anyhow::Result<Incident> {
        let id = self.data.read().keys().next_back().copied().unwrap_or(0) + 1;
        let saved = self.materialize(id, incident)?;
        self.data.write().insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: i32, incident: &NewIncident) -> anyhow::Result<Option<Incident>> {
        if !self.data.read().contains_key(&id) {
            return Ok(None);
        }
        let saved = self.materialize(id, incident)?;
        self.data.write().insert(id, saved.clone());
        Ok(Some(saved))
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Incident>> {
        Ok(self.data.read().get(&id).cloned())
    }

    async fn find_by_ref_number_prefix(
        &self,
        prefix: &str,
        page_index: u64,
        page_size: u64,
    ) -> anyhow::Result<IncidentPage> {
        let mut matches: Vec<Incident> = self
            .data
            .read()
            .values()
            .filter(|i| i.ref_number.starts_with(prefix))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.ref_number.cmp(&b.ref_number).then(a.id.cmp(&b.id)));

        let total = matches.len() as u64;
        let items = matches
            .into_iter()
            .skip((page_index * page_size) as usize)
            .take(page_size as usize)
            .collect();

        Ok(IncidentPage::new(items, page_index, page_size, total))
    }
}

// ===== Events =====

/// Publisher that remembers every event
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    pub events: Arc<RwLock<Vec<IncidentEvent>>>,
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: IncidentEvent) -> anyhow::Result<()> {
        self.events.write().push(event);
        Ok(())
    }
}

/// Publisher that always fails
pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event: IncidentEvent) -> anyhow::Result<()> {
        anyhow::bail!("event bus unavailable")
    }
}

// ===== Fixtures =====

pub struct TestContext {
    pub service: Arc<Service>,
    pub incidents: MockIncidentRepo,
    pub types: MockIncidentTypeRepo,
}

pub fn create_test_context() -> TestContext {
    create_test_context_with_publisher(Arc::new(NoOpEventPublisher))
}

pub fn create_test_context_with_publisher(publisher: Arc<dyn EventPublisher>) -> TestContext {
    let types = MockIncidentTypeRepo::new();
    let incidents = MockIncidentRepo::new(types.clone());
    let service = Arc::new(Service::new(
        Arc::new(incidents.clone()),
        Arc::new(types.clone()),
        publisher,
    ));

    TestContext {
        service,
        incidents,
        types,
    }
}

pub fn yesterday() -> NaiveDate {
    chrono::Local::now().date_naive() - chrono::Duration::days(1)
}

pub fn tomorrow() -> NaiveDate {
    chrono::Local::now().date_naive() + chrono::Duration::days(1)
}

pub fn new_incident(ref_number: &str) -> NewIncident {
    NewIncident {
        ref_number: ref_number.to_string(),
        description: format!("Incident {}", ref_number),
        report_date: Some(yesterday()),
        status: "OPEN".to_string(),
        category: "FACILITIES".to_string(),
        incident_type_id: None,
    }
}

/// Report one incident per reference number, returning them in order
pub async fn seed_incidents(service: &Service, ref_numbers: &[&str]) -> Vec<Incident> {
    let mut saved = Vec::new();
    for ref_number in ref_numbers {
        saved.push(
            service
                .report_incident(new_incident(ref_number))
                .await
                .expect("Failed to report incident"),
        );
    }
    saved
}
