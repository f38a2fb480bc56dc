//! Re-entrancy guard for location detection
//!
//! The UI shows a "detecting" indicator while a lookup is in flight and must
//! reject a second detection started before the first resolves, otherwise two
//! lookups could race to write the persisted location. The token is RAII: the
//! indicator clears when it drops, on success and on failure alike.

use crate::error::{GeoError, GeoResult};
use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether a detection is currently in flight
#[derive(Debug, Default)]
pub struct DetectGuard {
    in_flight: AtomicBool,
}

impl DetectGuard {
    /// Begin a detection, rejecting re-entry while one is in flight
    pub fn try_begin(&self) -> GeoResult<DetectToken<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(GeoError::AlreadyDetecting);
        }
        Ok(DetectToken { guard: self })
    }

    /// True while a detection holds a token
    pub fn is_detecting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one detection
#[derive(Debug)]
pub struct DetectToken<'a> {
    guard: &'a DetectGuard,
}

impl Drop for DetectToken<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_reentrant_detection() {
        let guard = DetectGuard::default();
        let token = guard.try_begin().unwrap();
        assert!(guard.is_detecting());

        // Second detection while one is in flight is rejected
        assert!(matches!(
            guard.try_begin(),
            Err(GeoError::AlreadyDetecting)
        ));
        drop(token);
    }

    #[test]
    fn test_indicator_clears_on_drop() {
        let guard = DetectGuard::default();
        {
            let _token = guard.try_begin().unwrap();
            assert!(guard.is_detecting());
        }
        assert!(!guard.is_detecting());

        // A fresh detection is allowed after the previous one finished
        assert!(guard.try_begin().is_ok());
    }
}
