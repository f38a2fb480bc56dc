//! Location Models
//!
//! Two distinct lifetimes live here:
//! - [`SavedLocation`]: the long-lived city-level location shown in page
//!   chrome, persisted across sessions by the location store.
//! - [`LocationDetails`]: the per-order delivery address owned by the order
//!   wizard for one session and discarded afterwards.

use serde::{Deserialize, Serialize};

/// Cities offered by the city picker
pub const PICKER_CITIES: [&str; 6] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Visakhapatnam",
];

/// How a saved location was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationSource {
    /// Chosen from the fixed city list
    Picker,
    /// Resolved from device coordinates via reverse geocoding
    Detected,
}

/// Persisted city-level location (singleton per installation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub city: String,
    pub source: LocationSource,
    /// Unix millis of the last write
    pub updated_at: i64,
}

impl SavedLocation {
    pub fn picked(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            source: LocationSource::Picker,
            updated_at: crate::util::now_millis(),
        }
    }

    pub fn detected(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            source: LocationSource::Detected,
            updated_at: crate::util::now_millis(),
        }
    }
}

/// Per-order delivery address captured by step 1 of the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDetails {
    /// Fixed for the current market; the form renders it read-only
    pub country: String,
    pub state: String,
    pub district: String,
    pub mandal: String,
    pub village: String,
    /// Free-text street address line
    pub address: String,
}

impl Default for LocationDetails {
    fn default() -> Self {
        Self {
            country: "India".to_string(),
            state: String::new(),
            district: String::new(),
            mandal: String::new(),
            village: String::new(),
            address: String::new(),
        }
    }
}

impl LocationDetails {
    /// Required fields that must be non-empty before the wizard may advance.
    /// Country is pre-filled and the address line is optional free text.
    pub fn required_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("state", self.state.as_str()),
            ("district", self.district.as_str()),
            ("mandal", self.mandal.as_str()),
            ("village", self.village.as_str()),
        ]
    }
}
