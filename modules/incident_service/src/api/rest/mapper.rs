//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations between REST DTOs and
//! transport-agnostic contract models, plus form binding.

use super::dto::*;
use crate::contract::{self, FieldError, NewIncident};
use crate::domain::validation::{INCIDENT_TYPE_ID, REPORT_DATE};
use chrono::NaiveDate;

/// Date format accepted by the incident form
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

// ===== Incident conversions =====

impl From<contract::Incident> for IncidentDto {
    fn from(incident: contract::Incident) -> Self {
        Self {
            id: incident.id,
            ref_number: incident.ref_number,
            description: incident.description,
            report_date: incident.report_date,
            status: incident.status,
            category: incident.category,
            incident_type: incident.incident_type.map(Into::into),
        }
    }
}

impl From<&contract::Incident> for IncidentForm {
    fn from(incident: &contract::Incident) -> Self {
        Self {
            ref_number: incident.ref_number.clone(),
            description: incident.description.clone(),
            report_date: incident.report_date.format(FORM_DATE_FORMAT).to_string(),
            status: incident.status.clone(),
            category: incident.category.clone(),
            incident_type_id: incident
                .incident_type
                .as_ref()
                .map(|t| t.id.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Bind a submitted form to contract data.
///
/// Values that cannot be converted are reported as `typeMismatch` errors and
/// left unset on the returned incident.
pub fn bind_incident_form(form: &IncidentForm) -> (NewIncident, Vec<FieldError>) {
    let mut errors = Vec::new();

    let report_date = match form.report_date.trim() {
        "" => None,
        raw => match NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new(
                    REPORT_DATE,
                    "typeMismatch",
                    format!("'{}' is not a valid date (yyyy-MM-dd)", raw),
                ));
                None
            }
        },
    };

    let incident_type_id = match form.incident_type_id.trim() {
        "" => None,
        raw => match raw.parse::<i32>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(FieldError::new(
                    INCIDENT_TYPE_ID,
                    "typeMismatch",
                    format!("'{}' is not a valid incident type id", raw),
                ));
                None
            }
        },
    };

    let incident = NewIncident {
        ref_number: form.ref_number.clone(),
        description: form.description.clone(),
        report_date,
        status: form.status.clone(),
        category: form.category.clone(),
        incident_type_id,
    };

    (incident, errors)
}

// ===== Incident type conversions =====

impl From<contract::IncidentType> for IncidentTypeDto {
    fn from(incident_type: contract::IncidentType) -> Self {
        Self {
            id: incident_type.id,
            name: incident_type.name,
        }
    }
}

// ===== Error conversions =====

impl From<FieldError> for FieldErrorDto {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field,
            code: error.code,
            message: error.message,
        }
    }
}

// ===== Page conversions =====

impl From<contract::IncidentPage> for IncidentsListModel {
    fn from(page: contract::IncidentPage) -> Self {
        Self {
            current_page: page.number,
            total_pages: page.total_pages,
            total_items: page.total_items,
            incidents: page.items.into_iter().map(Into::into).collect(),
        }
    }
}
