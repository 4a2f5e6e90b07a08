//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Incident, IncidentType, NewIncident};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Incident Conversions =====

/// Build a contract incident from a row and its optionally joined type
pub fn incident_from_row(
    row: entity::Model,
    incident_type: Option<entity::incident_type::Model>,
) -> Incident {
    Incident {
        id: row.id,
        ref_number: row.reference_number,
        description: row.description,
        report_date: row.report_date,
        status: row.status,
        category: row.category,
        incident_type: incident_type.map(Into::into),
    }
}

/// Active model for an insert; the id is left for the database to generate.
///
/// Returns `None` when no report date is set; the domain rejects such
/// incidents before they reach storage.
pub fn new_active_model(incident: &NewIncident) -> Option<entity::ActiveModel> {
    let report_date = incident.report_date?;

    Some(entity::ActiveModel {
        id: NotSet,
        reference_number: Set(incident.ref_number.clone()),
        description: Set(incident.description.clone()),
        report_date: Set(report_date),
        status: Set(incident.status.clone()),
        category: Set(incident.category.clone()),
        incident_type_id: Set(incident.incident_type_id),
    })
}

// ===== Incident Type Conversions =====

impl From<entity::incident_type::Model> for IncidentType {
    fn from(entity: entity::incident_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
