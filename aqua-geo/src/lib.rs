//! # aqua-geo
//!
//! Reverse-geocoding client - coordinate-to-address lookup only.
//!
//! ## Scope
//!
//! This crate handles HOW a location is detected:
//! - Reverse lookup against a Nominatim-style endpoint
//! - Tolerant parsing of the address-components mapping
//! - City-name fallback priority (village → town → city → suburb)
//! - Re-entrancy guard so one detection runs at a time
//! - Device position acquisition for hosts without a GPS receiver
//!
//! What to do with the detected city (persist it, show it in chrome) stays
//! in application code.
//!
//! ## Example
//!
//! ```ignore
//! use aqua_geo::{DetectGuard, ReverseGeocoder};
//!
//! let guard = DetectGuard::default();
//! let token = guard.try_begin()?;          // rejects re-entrant detection
//! let geocoder = ReverseGeocoder::new();
//! let address = geocoder.reverse(19.07, 72.87).await?;
//! println!("{}", address.city_like());
//! drop(token);                             // detection indicator clears
//! ```

mod client;
mod error;
mod guard;
mod position;

// Re-exports
pub use client::{AddressComponents, ReverseGeocoder, DEFAULT_BASE_URL};
pub use error::{GeoError, GeoResult};
pub use guard::{DetectGuard, DetectToken};
pub use position::{env_has_position, env_position, LAT_VAR, LON_VAR};
