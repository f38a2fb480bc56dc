//! Error types for the geocoding library

use thiserror::Error;

/// Geolocation error types
#[derive(Debug, Error)]
pub enum GeoError {
    /// A detection is already in flight; the new request is rejected
    #[error("location detection already in progress")]
    AlreadyDetecting,

    /// The platform reported that geolocation is not available
    #[error("geolocation not supported on this device")]
    Unsupported,

    /// The user denied the geolocation permission prompt
    #[error("geolocation permission denied")]
    PermissionDenied,

    /// The reverse lookup request failed (network, timeout, decode)
    #[error("reverse lookup failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The lookup endpoint answered with a non-success status
    #[error("reverse lookup returned HTTP {0}")]
    Status(u16),
}

/// Result type for geocoding operations
pub type GeoResult<T> = Result<T, GeoError>;
