//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::IncidentError;
use axum::{
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Rejected request parts (malformed query, path, form or JSON body)
macro_rules! impl_problem_from_rejection {
    ($($rejection:ty),* $(,)?) => {
        $(
            impl From<$rejection> for Problem {
                fn from(rejection: $rejection) -> Self {
                    Problem::new(rejection.status(), "Invalid Request")
                        .with_detail(rejection.body_text())
                }
            }
        )*
    };
}

impl_problem_from_rejection!(QueryRejection, PathRejection, FormRejection, JsonRejection);

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: IncidentError) -> Problem {
    match error {
        IncidentError::NotFound { resource, id } => {
            let problem = Problem::new(StatusCode::NOT_FOUND, format!("{} Not Found", resource))
                .with_detail(format!(
                    "{} not found with id: {}. Please ensure the ID is correct and the {} exists in the database.",
                    resource, id, resource
                ));
            if resource == "incident" {
                problem.with_instance(format!("/incidents/{}", id))
            } else {
                problem
            }
        }

        IncidentError::Validation { .. } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(error.to_string())
        }

        IncidentError::InvalidPage { page } => Problem::new(StatusCode::BAD_REQUEST, "Invalid Page")
            .with_detail(format!("Page number must be 1 or greater, got {}", page)),

        IncidentError::Conflict { reason } => {
            Problem::new(StatusCode::CONFLICT, "Conflict").with_detail(reason)
        }

        IncidentError::Internal => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}
