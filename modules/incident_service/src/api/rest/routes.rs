//! Route registration and OpenAPI document

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
        Form, Path, Query,
    },
    http::StatusCode,
    response::Response,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/incidents-api/openapi.json";

/// Schemas exposed by the incident REST API
#[derive(OpenApi)]
#[openapi(
    info(title = "Incident Service"),
    components(schemas(
        IncidentDto,
        IncidentForm,
        FieldErrorDto,
        IncidentTypeDto,
        CreateIncidentTypeRequest,
        IncidentTypesListResponse,
    ))
)]
pub struct ApiDoc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // Incident endpoints
        .route(
            "/incidents/new",
            get(init_creation_form_handler).post(process_creation_form_handler),
        )
        .route("/incidents/find", get(handlers::init_find_form))
        .route("/incidents", get(process_find_form_handler))
        .route(
            "/incidents/{incident_id}/edit",
            get(init_update_form_handler).post(process_update_form_handler),
        )
        .route("/incidents/{incident_id}", get(show_incident_handler))
        // Incident type endpoints
        .route(
            "/incident-types",
            get(list_incident_types_handler).post(create_incident_type_handler),
        )
        .route(OPENAPI_PATH, get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn init_creation_form_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Response, Problem> {
    handlers::init_creation_form(service).await
}

async fn process_creation_form_handler(
    Extension(service): Extension<Arc<Service>>,
    form: Result<Form<IncidentForm>, FormRejection>,
) -> Result<Response, Problem> {
    handlers::process_creation_form(service, form?).await
}

async fn process_find_form_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<FindIncidentsQuery>, QueryRejection>,
) -> Result<Response, Problem> {
    handlers::process_find_form(service, query?).await
}

async fn init_update_form_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, Problem> {
    handlers::init_update_form(service, path?).await
}

async fn process_update_form_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
    form: Result<Form<IncidentForm>, FormRejection>,
) -> Result<Response, Problem> {
    handlers::process_update_form(service, path?, form?).await
}

async fn show_incident_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, Problem> {
    handlers::show_incident(service, path?).await
}

async fn list_incident_types_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<IncidentTypesListResponse>, Problem> {
    handlers::list_incident_types(service).await
}

async fn create_incident_type_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<CreateIncidentTypeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IncidentTypeDto>), Problem> {
    handlers::create_incident_type(service, json?).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
