//! Complaint intake
//!
//! Validates the submitted form and assigns a session-scoped reference
//! number ("CMP-{n}"). Records live in memory for the lifetime of the desk.

use shared::error::AppError;
use shared::models::ComplaintForm;
use shared::util::now_millis;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum ComplaintError {
    #[error("complaint validation failed: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl From<ComplaintError> for AppError {
    fn from(err: ComplaintError) -> Self {
        let ComplaintError::Invalid(errors) = &err;
        let mut app = AppError::validation("complaint form has invalid fields");
        for (field, field_errors) in errors.field_errors() {
            let message = field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "invalid value".to_string());
            app = app.with_detail(field.to_string(), message);
        }
        app
    }
}

/// An accepted complaint
#[derive(Debug, Clone)]
pub struct ComplaintRecord {
    pub reference: String,
    pub submitted_at: i64,
    pub form: ComplaintForm,
}

/// Accepts and keeps complaints for the current session
#[derive(Default)]
pub struct ComplaintDesk {
    records: Vec<ComplaintRecord>,
    next_ref: u64,
}

impl ComplaintDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and accept a complaint, returning its reference record
    pub fn submit(&mut self, form: ComplaintForm) -> Result<&ComplaintRecord, ComplaintError> {
        form.validate()?;

        self.next_ref += 1;
        let record = ComplaintRecord {
            reference: format!("CMP-{}", self.next_ref),
            submitted_at: now_millis(),
            form,
        };
        tracing::info!(
            reference = %record.reference,
            complaint_type = ?record.form.complaint_type,
            "complaint accepted"
        );
        let idx = self.records.len();
        self.records.push(record);
        Ok(&self.records[idx])
    }

    pub fn records(&self) -> &[ComplaintRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ComplaintType;

    fn valid_form() -> ComplaintForm {
        ComplaintForm {
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "9000012345".to_string(),
            order_number: None,
            complaint_type: ComplaintType::Product,
            description: "Seal on the 1L bottle was broken".to_string(),
        }
    }

    #[test]
    fn accepts_valid_complaint_with_reference() {
        let mut desk = ComplaintDesk::new();
        let reference = desk.submit(valid_form()).unwrap().reference.clone();
        assert_eq!(reference, "CMP-1");

        let second = desk.submit(valid_form()).unwrap().reference.clone();
        assert_eq!(second, "CMP-2");
        assert_eq!(desk.records().len(), 2);
    }

    #[test]
    fn rejects_invalid_form_without_recording() {
        let mut desk = ComplaintDesk::new();
        let mut form = valid_form();
        form.email = "nope".to_string();

        assert!(desk.submit(form).is_err());
        assert!(desk.records().is_empty());

        // Rejected submissions must not consume a reference number
        let accepted = desk.submit(valid_form()).unwrap();
        assert_eq!(accepted.reference, "CMP-1");
    }

    #[test]
    fn validation_errors_carry_field_details() {
        let mut desk = ComplaintDesk::new();
        let mut form = valid_form();
        form.email = "nope".to_string();
        form.description.clear();

        let err = desk.submit(form).unwrap_err();
        let app = AppError::from(err);
        let details = app.details.unwrap();
        assert!(details.contains_key("email"));
        assert!(details.contains_key("description"));
    }
}
