//! Incident Service Module
//!
//! Incident reporting: create, edit, look up and search
//! incidents by reference number, backed by a relational store.

// Public exports
pub mod contract;
pub use contract::{
    client::IncidentsApi, error::IncidentError, FieldError, Incident, IncidentPage,
    IncidentType, NewIncident, SearchOutcome,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::IncidentServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
