//! Field validation for incident forms

use crate::contract::{FieldError, IncidentError, NewIncident};
use chrono::NaiveDate;

pub const REF_NUMBER: &str = "refNumber";
pub const DESCRIPTION: &str = "description";
pub const REPORT_DATE: &str = "reportDate";
pub const INCIDENT_TYPE_ID: &str = "incidentTypeId";

/// Validate bindable incident fields.
///
/// Returns every rejected field; an empty vector means the incident is valid.
/// `status` and `category` are free-form and never rejected.
pub fn validate_new_incident(incident: &NewIncident, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if incident.ref_number.trim().is_empty() {
        errors.push(FieldError::required(REF_NUMBER));
    }

    if incident.description.trim().is_empty() {
        errors.push(FieldError::required(DESCRIPTION));
    }

    match incident.report_date {
        None => errors.push(FieldError::required(REPORT_DATE)),
        Some(date) if date > today => errors.push(FieldError::new(
            REPORT_DATE,
            "future",
            "must not be in the future",
        )),
        Some(_) => {}
    }

    errors
}

/// Validate an incident type name
pub fn validate_incident_type_name(name: &str) -> Result<(), IncidentError> {
    if name.trim().is_empty() {
        return Err(IncidentError::Validation {
            errors: vec![FieldError::required("name")],
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_incident() -> NewIncident {
        NewIncident {
            ref_number: "INC-001".to_string(),
            description: "Water leak in server room".to_string(),
            report_date: NaiveDate::from_ymd_opt(2024, 6, 14),
            status: "OPEN".to_string(),
            category: "FACILITIES".to_string(),
            incident_type_id: None,
        }
    }

    #[test]
    fn test_valid_incident_passes() {
        assert!(validate_new_incident(&valid_incident(), today()).is_empty());
    }

    #[test]
    fn test_report_date_today_is_accepted() {
        let mut incident = valid_incident();
        incident.report_date = Some(today());
        assert!(validate_new_incident(&incident, today()).is_empty());
    }

    #[test]
    fn test_blank_status_and_category_are_accepted() {
        let mut incident = valid_incident();
        incident.status = String::new();
        incident.category = "  ".to_string();
        assert!(validate_new_incident(&incident, today()).is_empty());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let errors = validate_new_incident(&NewIncident::default(), today());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec![REF_NUMBER, DESCRIPTION, REPORT_DATE]);
        assert!(errors.iter().all(|e| e.code == "required"));
    }

    #[test]
    fn test_whitespace_ref_number_is_rejected() {
        let mut incident = valid_incident();
        incident.ref_number = "   ".to_string();

        let errors = validate_new_incident(&incident, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, REF_NUMBER);
    }

    #[test]
    fn test_future_report_date_is_rejected() {
        let mut incident = valid_incident();
        incident.report_date = NaiveDate::from_ymd_opt(2024, 6, 16);

        let errors = validate_new_incident(&incident, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, REPORT_DATE);
        assert_eq!(errors[0].code, "future");
    }

    #[test]
    fn test_incident_type_name() {
        assert!(validate_incident_type_name("Security").is_ok());
        assert!(matches!(
            validate_incident_type_name(" "),
            Err(IncidentError::Validation { .. })
        ));
    }
}
