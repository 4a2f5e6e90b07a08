//! Contract models for incident service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::NaiveDate;

/// A reported incident
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    /// Generated surrogate identity
    pub id: i32,
    /// Reference number used for lookups (e.g. "INC-2024-0001")
    pub ref_number: String,
    /// Free-form description of what happened
    pub description: String,
    /// Calendar date the incident was reported
    pub report_date: NaiveDate,
    /// Workflow status, not constrained to a fixed set
    pub status: String,
    /// Category, not constrained to a fixed set
    pub category: String,
    /// Related incident type, if one was assigned
    pub incident_type: Option<IncidentType>,
}

/// Categorical type an incident can belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentType {
    pub id: i32,
    pub name: String,
}

/// Bindable incident data, used for both creation and update.
///
/// Carries no identity: ids are always assigned by storage or taken
/// from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIncident {
    pub ref_number: String,
    pub description: String,
    pub report_date: Option<NaiveDate>,
    pub status: String,
    pub category: String,
    pub incident_type_id: Option<i32>,
}

impl From<&Incident> for NewIncident {
    fn from(incident: &Incident) -> Self {
        Self {
            ref_number: incident.ref_number.clone(),
            description: incident.description.clone(),
            report_date: Some(incident.report_date),
            status: incident.status.clone(),
            category: incident.category.clone(),
            incident_type_id: incident.incident_type.as_ref().map(|t| t.id),
        }
    }
}

/// One page of incidents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentPage {
    /// Incidents on this page
    pub items: Vec<Incident>,
    /// 1-based page number
    pub number: u64,
    /// Requested page size
    pub size: u64,
    /// Number of incidents matching the query across all pages
    pub total_items: u64,
    /// Number of pages available for this page size
    pub total_pages: u64,
}

impl IncidentPage {
    /// Build a page from a 0-based page index, deriving `total_pages`
    pub fn new(items: Vec<Incident>, page_index: u64, size: u64, total_items: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_items.div_ceil(size)
        };

        Self {
            items,
            number: page_index + 1,
            size,
            total_items,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result of a reference-number search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The requested page holds no incidents
    NotFound,
    /// Exactly one incident matched across all pages
    Single(Incident),
    /// Several incidents matched; carries the requested page
    Many(IncidentPage),
}

/// A single rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name (camelCase, as bound from the form)
    pub field: String,
    /// Machine-readable error code (e.g. "required", "typeMismatch")
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "required", "is required")
    }
}
