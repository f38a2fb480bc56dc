//! Device position acquisition
//!
//! The demo host has no GPS receiver; a device position is injected through
//! the environment instead. A host that cannot provide a usable coordinate
//! pair reports [`GeoError::Unsupported`], the same contract a richer
//! position source would honor.

use crate::error::{GeoError, GeoResult};

/// Environment variables carrying the injected device position
pub const LAT_VAR: &str = "AQUA_DETECT_LAT";
pub const LON_VAR: &str = "AQUA_DETECT_LON";

/// True when the environment carries any position input at all
pub fn env_has_position() -> bool {
    std::env::var_os(LAT_VAR).is_some() || std::env::var_os(LON_VAR).is_some()
}

/// Read the injected device position.
///
/// A missing or malformed coordinate means the host cannot provide a
/// position and maps to [`GeoError::Unsupported`].
pub fn env_position() -> GeoResult<(f64, f64)> {
    let lat = parse_coord(std::env::var(LAT_VAR).ok())?;
    let lon = parse_coord(std::env::var(LON_VAR).ok())?;
    Ok((lat, lon))
}

fn parse_coord(raw: Option<String>) -> GeoResult<f64> {
    raw.ok_or(GeoError::Unsupported)?
        .trim()
        .parse()
        .map_err(|_| GeoError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_coordinate() {
        assert_eq!(parse_coord(Some("17.38".to_string())).unwrap(), 17.38);
        assert_eq!(parse_coord(Some(" -78.48 ".to_string())).unwrap(), -78.48);
    }

    #[test]
    fn test_missing_coordinate_is_unsupported() {
        assert!(matches!(parse_coord(None), Err(GeoError::Unsupported)));
    }

    #[test]
    fn test_malformed_coordinate_is_unsupported() {
        assert!(matches!(
            parse_coord(Some("north".to_string())),
            Err(GeoError::Unsupported)
        ));
    }
}
