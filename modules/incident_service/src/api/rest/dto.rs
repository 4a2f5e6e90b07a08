//! REST DTOs with serde derives for HTTP API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Incident DTOs =====

/// Incident response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDto {
    pub id: i32,

    #[schema(example = "INC-2024-0001")]
    pub ref_number: String,

    pub description: String,

    /// Report date (yyyy-MM-dd)
    pub report_date: NaiveDate,

    #[schema(example = "OPEN")]
    pub status: String,

    #[schema(example = "FACILITIES")]
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_type: Option<IncidentTypeDto>,
}

/// Incident form as submitted by a browser (urlencoded).
///
/// Every field is kept as raw text so a rejected value can be shown back
/// in the re-rendered form. There is no `id` field: ids are never bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct IncidentForm {
    pub ref_number: String,
    pub description: String,
    /// Report date (yyyy-MM-dd)
    pub report_date: String,
    pub status: String,
    pub category: String,
    pub incident_type_id: String,
}

/// Rejected form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    #[schema(example = "refNumber")]
    pub field: String,
    #[schema(example = "required")]
    pub code: String,
    pub message: String,
}

// ===== Incident Type DTOs =====

/// Incident type response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IncidentTypeDto {
    pub id: i32,
    #[schema(example = "Security")]
    pub name: String,
}

/// Create incident type request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateIncidentTypeRequest {
    #[schema(example = "Security")]
    pub name: String,
}

/// List of incident types
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IncidentTypesListResponse {
    pub items: Vec<IncidentTypeDto>,
    pub total: usize,
}

// ===== View Models =====

/// Model of the create/update incident form view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentFormModel {
    /// Set when editing an existing incident
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<i32>,
    pub incident: IncidentForm,
    pub incident_types: Vec<IncidentTypeDto>,
    pub errors: Vec<FieldErrorDto>,
    /// Flash error shown above the form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Model of the find incidents view
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindIncidentsModel {
    pub ref_number: String,
    pub errors: Vec<FieldErrorDto>,
}

/// Model of the paginated incidents list view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentsListModel {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub incidents: Vec<IncidentDto>,
}

/// Model of the incident details view
#[derive(Debug, Clone, Serialize)]
pub struct IncidentDetailsModel {
    pub incident: IncidentDto,
}

/// Query parameters of the incidents search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindIncidentsQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Reference-number prefix; absent means "all incidents"
    pub ref_number: Option<String>,
}

fn default_page() -> i64 {
    1
}

// Note: Conversion implementations live in mapper.rs
