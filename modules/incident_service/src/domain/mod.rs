//! Domain layer - business logic and services

pub mod events;
pub mod repository;
pub mod service;
pub mod validation;

pub use events::{EventPublisher, IncidentEvent, NoOpEventPublisher, TracingEventPublisher};
pub use repository::{IncidentRepository, IncidentTypeRepository};
pub use service::Service;
