//! Coordinate helpers.
//!
//! The deployment is Singapore-only, so submissions are checked against a
//! fixed bounding box rather than a general geofence.

use crate::error::CoreError;

/// Singapore bounding region, with a little margin for offshore hotspots.
pub const SG_LAT_MIN: f64 = 1.13;
pub const SG_LAT_MAX: f64 = 1.55;
pub const SG_LNG_MIN: f64 = 103.55;
pub const SG_LNG_MAX: f64 = 104.15;

/// True if the pair is a plausible Singapore coordinate.
pub fn within_singapore(lat: f64, lng: f64) -> bool {
    (SG_LAT_MIN..=SG_LAT_MAX).contains(&lat) && (SG_LNG_MIN..=SG_LNG_MAX).contains(&lng)
}

/// Validate a user-submitted coordinate, producing a [`CoreError::Validation`]
/// with a human-readable message on failure.
pub fn validate_coordinate(lat: f64, lng: f64) -> Result<(), CoreError> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(CoreError::Validation(
            "Coordinate must be finite numbers".to_string(),
        ));
    }
    if !within_singapore(lat, lng) {
        return Err(CoreError::Validation(format!(
            "Coordinate ({lat}, {lng}) is outside the Singapore region"
        )));
    }
    Ok(())
}
