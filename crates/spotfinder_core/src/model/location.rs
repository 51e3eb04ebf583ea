//! Location domain model.
//!
//! # Responsibility
//! - Define the single persisted record: one named point of interest.
//! - Provide pure helpers for coordinate display and range checks.
//!
//! # Invariants
//! - `id == UNSAVED_LOCATION_ID` means the record was never persisted.
//! - Once assigned by the store, `id` never changes for that record.
//! - Coordinate validity is advisory; the store does not enforce it on write.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier.
pub type LocationId = i64;

/// Identifier carried by records that have not been persisted yet.
pub const UNSAVED_LOCATION_ID: LocationId = 0;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Named point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Assigned by the store on create; `0` until then.
    pub id: LocationId,
    /// Human-readable label, also the list sort key.
    pub address: String,
    /// Degrees, valid in `[-90, 90]`.
    pub latitude: f64,
    /// Degrees, valid in `[-180, 180]`.
    pub longitude: f64,
}

/// Reasons a location is not fit for persistence.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationValidationError {
    EmptyAddress,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl Display for LocationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAddress => write!(f, "address must not be empty"),
            Self::LatitudeOutOfRange(value) => write!(
                f,
                "latitude {value} is outside [{MIN_LATITUDE}, {MAX_LATITUDE}]"
            ),
            Self::LongitudeOutOfRange(value) => write!(
                f,
                "longitude {value} is outside [{MIN_LONGITUDE}, {MAX_LONGITUDE}]"
            ),
        }
    }
}

impl Error for LocationValidationError {}

impl Location {
    /// Creates an unsaved location; the store assigns the real id.
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::with_id(UNSAVED_LOCATION_ID, address, latitude, longitude)
    }

    /// Creates a location with a known id, e.g. when decoding a stored row.
    pub fn with_id(
        id: LocationId,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// Returns whether the store has assigned an id to this record.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_LOCATION_ID
    }

    /// Formats coordinates as `Lat: 43.6452, Lng: -79.3806`.
    pub fn coordinates_string(&self) -> String {
        format!("Lat: {:.4}, Lng: {:.4}", self.latitude, self.longitude)
    }

    /// Returns whether both coordinates fall inside their inclusive ranges.
    pub fn has_valid_coordinates(&self) -> bool {
        is_valid_latitude(self.latitude) && is_valid_longitude(self.longitude)
    }

    /// Checks the caller-side write preconditions.
    ///
    /// # Errors
    /// - `EmptyAddress` when the address is blank after trimming.
    /// - `LatitudeOutOfRange` / `LongitudeOutOfRange` for bad coordinates.
    pub fn validate(&self) -> Result<(), LocationValidationError> {
        if self.address.trim().is_empty() {
            return Err(LocationValidationError::EmptyAddress);
        }
        if !is_valid_latitude(self.latitude) {
            return Err(LocationValidationError::LatitudeOutOfRange(self.latitude));
        }
        if !is_valid_longitude(self.longitude) {
            return Err(LocationValidationError::LongitudeOutOfRange(
                self.longitude,
            ));
        }
        Ok(())
    }
}

/// Inclusive latitude range check. NaN is never valid.
pub fn is_valid_latitude(value: f64) -> bool {
    (MIN_LATITUDE..=MAX_LATITUDE).contains(&value)
}

/// Inclusive longitude range check. NaN is never valid.
pub fn is_valid_longitude(value: f64) -> bool {
    (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::{Location, LocationValidationError};

    #[test]
    fn coordinates_string_uses_four_decimals() {
        let location = Location::new("Union Station, Toronto", 43.6452, -79.3806);
        assert_eq!(location.coordinates_string(), "Lat: 43.6452, Lng: -79.3806");

        let rounded = Location::new("Somewhere", 1.0, -2.123456);
        assert_eq!(rounded.coordinates_string(), "Lat: 1.0000, Lng: -2.1235");
    }

    #[test]
    fn validity_includes_exact_boundaries() {
        for (lat, lng) in [(90.0, 180.0), (-90.0, -180.0), (90.0, -180.0), (0.0, 0.0)] {
            assert!(Location::new("edge", lat, lng).has_valid_coordinates());
        }
    }

    #[test]
    fn validity_rejects_values_strictly_outside() {
        for (lat, lng) in [
            (90.000_001, 0.0),
            (-90.000_001, 0.0),
            (0.0, 180.000_001),
            (0.0, -180.000_001),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ] {
            assert!(!Location::new("outside", lat, lng).has_valid_coordinates());
        }
    }

    #[test]
    fn validate_reports_first_failing_field() {
        let blank = Location::new("   ", 100.0, 0.0);
        assert_eq!(blank.validate(), Err(LocationValidationError::EmptyAddress));

        let bad_lng = Location::new("x", 10.0, 200.0);
        assert_eq!(
            bad_lng.validate(),
            Err(LocationValidationError::LongitudeOutOfRange(200.0))
        );
    }
}
