//! Unified error system for the Aquavita stack
//!
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Location errors
//! - 2xxx: Order errors
//! - 3xxx: Geolocation errors
//! - 4xxx: Receipt errors
//! - 9xxx: Storage errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("district must not be empty")
//!     .with_detail("field", "district");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// Error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Location ====================
    /// Delivery location form is incomplete
    LocationIncomplete = 1001,
    /// No saved location
    LocationNotSet = 1002,

    // ==================== 2xxx: Order ====================
    /// Order has no items with a positive quantity
    OrderEmpty = 2001,
    /// Item not found in the catalog
    ItemNotFound = 2002,
    /// Step transition not allowed
    StepNotAllowed = 2003,
    /// Subscription plan not found
    PlanNotFound = 2004,

    // ==================== 3xxx: Geolocation ====================
    /// Detection already in progress
    DetectionInFlight = 3001,
    /// Reverse lookup failed
    LookupFailed = 3002,

    // ==================== 4xxx: Receipt ====================
    /// Receipt rendering failed
    ReceiptRenderFailed = 4001,
    /// Receipt could not be written to disk
    ReceiptWriteFailed = 4002,

    // ==================== 9xxx: Storage ====================
    /// Key-value store unavailable or corrupt
    StorageUnavailable = 9001,
}

impl ErrorCode {
    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",
            ErrorCode::LocationIncomplete => "Delivery location details are incomplete",
            ErrorCode::LocationNotSet => "No location has been saved",
            ErrorCode::OrderEmpty => "Order contains no items",
            ErrorCode::ItemNotFound => "Item not found in catalog",
            ErrorCode::StepNotAllowed => "Step transition not allowed",
            ErrorCode::PlanNotFound => "Subscription plan not found",
            ErrorCode::DetectionInFlight => "Location detection already in progress",
            ErrorCode::LookupFailed => "Reverse geocoding lookup failed",
            ErrorCode::ReceiptRenderFailed => "Receipt rendering failed",
            ErrorCode::ReceiptWriteFailed => "Receipt could not be saved",
            ErrorCode::StorageUnavailable => "Persistent store unavailable",
        }
    }

    /// Category this code belongs to
    pub fn category(&self) -> ErrorCategory {
        match *self as u16 {
            0..=999 => ErrorCategory::General,
            1000..=1999 => ErrorCategory::Location,
            2000..=2999 => ErrorCategory::Order,
            3000..=3999 => ErrorCategory::Geolocation,
            4000..=4999 => ErrorCategory::Receipt,
            _ => ErrorCategory::Storage,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), *self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error raised when deserializing an unknown error code
#[derive(Debug, Clone, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            1001 => Ok(ErrorCode::LocationIncomplete),
            1002 => Ok(ErrorCode::LocationNotSet),
            2001 => Ok(ErrorCode::OrderEmpty),
            2002 => Ok(ErrorCode::ItemNotFound),
            2003 => Ok(ErrorCode::StepNotAllowed),
            2004 => Ok(ErrorCode::PlanNotFound),
            3001 => Ok(ErrorCode::DetectionInFlight),
            3002 => Ok(ErrorCode::LookupFailed),
            4001 => Ok(ErrorCode::ReceiptRenderFailed),
            4002 => Ok(ErrorCode::ReceiptWriteFailed),
            9001 => Ok(ErrorCode::StorageUnavailable),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

/// Classification of errors by domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    General,
    Location,
    Order,
    Geolocation,
    Receipt,
    Storage,
}

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageUnavailable, msg)
    }
}

/// Result alias for application-level operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_round_trip() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::LocationIncomplete,
            ErrorCode::OrderEmpty,
            ErrorCode::DetectionInFlight,
            ErrorCode::ReceiptRenderFailed,
            ErrorCode::StorageUnavailable,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw).unwrap(), code);
        }
    }

    #[test]
    fn test_invalid_code_rejected() {
        assert!(ErrorCode::try_from(65000).is_err());
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            ErrorCode::LocationIncomplete.category(),
            ErrorCategory::Location
        );
        assert_eq!(ErrorCode::OrderEmpty.category(), ErrorCategory::Order);
        assert_eq!(
            ErrorCode::StorageUnavailable.category(),
            ErrorCategory::Storage
        );
    }

    #[test]
    fn test_error_details() {
        let err = AppError::validation("state must not be empty").with_detail("field", "state");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(
            err.details.unwrap().get("field").unwrap(),
            &Value::from("state")
        );
    }
}
