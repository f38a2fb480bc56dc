//! Reverse-geocoding HTTP client

use crate::error::{GeoError, GeoResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Public Nominatim instance; override for self-hosted deployments
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Identifies this client to the lookup service (required by Nominatim)
const USER_AGENT: &str = concat!("aquavita/", env!("CARGO_PKG_VERSION"));

/// Address-components mapping returned by the lookup service
///
/// Every field is optional; callers must tolerate any subset being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressComponents {
    pub village: Option<String>,
    pub town: Option<String>,
    pub city: Option<String>,
    pub suburb: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl AddressComponents {
    /// Pick the most city-like field, in priority order
    /// village → town → city → suburb, falling back to "Unknown City".
    pub fn city_like(&self) -> &str {
        self.village
            .as_deref()
            .or(self.town.as_deref())
            .or(self.city.as_deref())
            .or(self.suburb.as_deref())
            .unwrap_or("Unknown City")
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: AddressComponents,
}

/// Client for a Nominatim-style `/reverse` endpoint
#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    http: reqwest::Client,
    base_url: String,
}

impl ReverseGeocoder {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve coordinates to address components.
    ///
    /// Single attempt, no retry; every failure maps to a [`GeoError`] the
    /// caller surfaces inline.
    pub async fn reverse(&self, lat: f64, lon: f64) -> GeoResult<AddressComponents> {
        let url = format!("{}/reverse", self.base_url);
        debug!(lat, lon, %url, "reverse geocode lookup");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status(status.as_u16()));
        }

        let body: ReverseResponse = response.json().await?;
        Ok(body.address)
    }
}

impl Default for ReverseGeocoder {
    fn default() -> Self {
        Self::new()
    }
}
