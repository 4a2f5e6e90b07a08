//! View and redirect responses.
//!
//! Pages are rendered as `{"view": <name>, "model": {...}}` documents; a
//! front end picks its template by view name.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const CREATE_OR_UPDATE_FORM: &str = "incidents/createOrUpdateIncidentForm";
pub const FIND_INCIDENTS: &str = "incidents/findIncidents";
pub const INCIDENTS_LIST: &str = "incidents/incidentsList";
pub const INCIDENT_DETAILS: &str = "incidents/incidentsDetails";

/// A named view with its model
#[derive(Debug, Serialize)]
pub struct View<M> {
    pub view: &'static str,
    pub model: M,
    #[serde(skip)]
    status: StatusCode,
}

impl<M: Serialize> View<M> {
    pub fn new(view: &'static str, model: M) -> Self {
        Self {
            view,
            model,
            status: StatusCode::OK,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<M: Serialize> IntoResponse for View<M> {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

/// Post/redirect/get response carrying an optional flash message
#[derive(Debug, Serialize)]
pub struct Redirect {
    pub redirect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            redirect: location.into(),
            message: None,
        }
    }

    pub fn incident(id: i32) -> Self {
        Self::to(format!("/incidents/{}", id))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        let location = self.redirect.clone();
        (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, location)],
            Json(self),
        )
            .into_response()
    }
}
