//! Contract error types for incident service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use super::model::FieldError;

/// Incident service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IncidentError {
    /// Incident or incident type not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (incident, incident_type)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// One or more fields were rejected
    #[error("Validation failed: {}", format_field_errors(.errors))]
    Validation { errors: Vec<FieldError> },

    /// Requested page number is out of range
    #[error("Invalid page number: {page}")]
    InvalidPage { page: i64 },

    /// Conflict (duplicate name, etc.)
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl IncidentError {
    pub fn incident_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "incident".to_string(),
            id: id.to_string(),
        }
    }

    /// Field errors carried by a validation failure, empty otherwise
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors } => errors,
            _ => &[],
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}
