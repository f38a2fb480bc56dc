//! Complaint Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Complaint category offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintType {
    Product,
    Delivery,
    Billing,
    CustomerService,
    Other,
}

/// Complaint form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComplaintForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    /// Optional reference to an existing order
    pub order_number: Option<String>,
    pub complaint_type: ComplaintType,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ComplaintForm {
        ComplaintForm {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            order_number: Some("ORD-12".to_string()),
            complaint_type: ComplaintType::Delivery,
            description: "Delivery arrived a day late".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut form = valid_form();
        form.description.clear();
        assert!(form.validate().is_err());
    }
}
