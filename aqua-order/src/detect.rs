//! GPS location detection flow
//!
//! Ties the pieces together: the re-entrancy guard rejects a second
//! detection while one is in flight, the position source supplies device
//! coordinates, the reverse geocoder turns them into a city-like name, and
//! the result replaces the saved location.

use crate::location_store::{LocationStore, StoreError};
use aqua_geo::{DetectGuard, GeoError, GeoResult, ReverseGeocoder};
use shared::error::{AppError, ErrorCode};
use shared::models::SavedLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DetectError> for AppError {
    fn from(err: DetectError) -> Self {
        let code = match &err {
            DetectError::Geo(GeoError::AlreadyDetecting) => ErrorCode::DetectionInFlight,
            DetectError::Geo(_) => ErrorCode::LookupFailed,
            DetectError::Store(_) => ErrorCode::StorageUnavailable,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Acquire a device position, resolve it to a city, and persist it as the
/// saved location. Fails fast with [`GeoError::AlreadyDetecting`] if another
/// detection holds the guard; an unsupported or denied position source is
/// surfaced the same way as a failed lookup, and neither touches the saved
/// location.
pub async fn detect_and_save(
    guard: &DetectGuard,
    geocoder: &ReverseGeocoder,
    store: &LocationStore,
    position: impl FnOnce() -> GeoResult<(f64, f64)>,
) -> Result<SavedLocation, DetectError> {
    let _token = guard.try_begin()?;
    let (lat, lon) = position()?;

    tracing::debug!(lat, lon, "reverse-geocoding detected coordinates");
    let address = geocoder.reverse(lat, lon).await?;
    let location = SavedLocation::detected(address.city_like());
    store.set(&location)?;

    tracing::info!(city = %location.city, "detected location saved");
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_position() -> GeoResult<(f64, f64)> {
        Ok((17.38, 78.48))
    }

    #[tokio::test]
    async fn rejects_concurrent_detection() {
        let guard = DetectGuard::default();
        let geocoder = ReverseGeocoder::new();
        let store = LocationStore::open_in_memory().unwrap();

        let _held = guard.try_begin().unwrap();
        let result = detect_and_save(&guard, &geocoder, &store, fixed_position).await;
        assert!(matches!(
            result,
            Err(DetectError::Geo(GeoError::AlreadyDetecting))
        ));

        // The failed attempt must not have touched the saved location
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn denied_position_source_is_surfaced() {
        let guard = DetectGuard::default();
        let geocoder = ReverseGeocoder::new();
        let store = LocationStore::open_in_memory().unwrap();

        let result =
            detect_and_save(&guard, &geocoder, &store, || Err(GeoError::PermissionDenied)).await;
        assert!(matches!(
            result,
            Err(DetectError::Geo(GeoError::PermissionDenied))
        ));

        // No lookup ran, nothing was saved, and the guard is released
        assert!(store.get().unwrap().is_none());
        assert!(!guard.is_detecting());
    }

    #[tokio::test]
    async fn failed_lookup_leaves_previous_location() {
        let guard = DetectGuard::default();
        // Unroutable local endpoint: the request itself fails
        let geocoder = ReverseGeocoder::with_base_url("http://127.0.0.1:1");
        let store = LocationStore::open_in_memory().unwrap();
        store.set(&SavedLocation::picked("Hyderabad")).unwrap();

        let result = detect_and_save(&guard, &geocoder, &store, fixed_position).await;
        assert!(result.is_err());
        assert_eq!(store.get().unwrap().unwrap().city, "Hyderabad");

        // And the guard is released for the next attempt
        assert!(!guard.is_detecting());
    }
}
