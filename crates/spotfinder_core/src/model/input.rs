//! Raw form input for add/edit flows.
//!
//! # Responsibility
//! - Turn user-entered text into an unsaved `Location`.
//! - Report the first failing field so the caller can focus it.
//!
//! # Invariants
//! - Fields are checked in order: address, latitude, longitude.
//! - All fields are trimmed before any check.

use super::location::{is_valid_latitude, is_valid_longitude, Location};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Address,
    Latitude,
    Longitude,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    Required,
    NotANumber,
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputError {
    pub field: Field,
    pub problem: InputProblem,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let field = self.field.as_str();
        match self.problem {
            InputProblem::Required => write!(f, "{field} is required"),
            InputProblem::NotANumber => write!(f, "{field} must be a number"),
            InputProblem::OutOfRange => match self.field {
                Field::Latitude => write!(f, "latitude must be between -90 and 90"),
                Field::Longitude => write!(f, "longitude must be between -180 and 180"),
                Field::Address => write!(f, "address is out of range"),
            },
        }
    }
}

impl Error for InputError {}

/// Text as typed into the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationInput {
    pub address: String,
    pub latitude: String,
    pub longitude: String,
}

impl LocationInput {
    pub fn new(
        address: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Pre-fills the form from a stored record (edit mode).
    pub fn from_location(location: &Location) -> Self {
        Self {
            address: location.address.clone(),
            latitude: location.latitude.to_string(),
            longitude: location.longitude.to_string(),
        }
    }

    /// Parses the form into an unsaved location.
    ///
    /// # Errors
    /// Returns the first failing field together with the reason.
    pub fn parse(&self) -> Result<Location, InputError> {
        let address = self.address.trim();
        if address.is_empty() {
            return Err(InputError {
                field: Field::Address,
                problem: InputProblem::Required,
            });
        }

        let latitude = parse_coordinate(&self.latitude, Field::Latitude, is_valid_latitude)?;
        let longitude = parse_coordinate(&self.longitude, Field::Longitude, is_valid_longitude)?;

        Ok(Location::new(address, latitude, longitude))
    }
}

fn parse_coordinate(
    raw: &str,
    field: Field,
    in_range: fn(f64) -> bool,
) -> Result<f64, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputError {
            field,
            problem: InputProblem::Required,
        });
    }

    let value = text.parse::<f64>().map_err(|_| InputError {
        field,
        problem: InputProblem::NotANumber,
    })?;

    // `f64::from_str` accepts "NaN"/"inf"; neither is a coordinate.
    if !value.is_finite() {
        return Err(InputError {
            field,
            problem: InputProblem::NotANumber,
        });
    }

    if !in_range(value) {
        return Err(InputError {
            field,
            problem: InputProblem::OutOfRange,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{Field, InputError, InputProblem, LocationInput};
    use crate::model::location::{Location, UNSAVED_LOCATION_ID};

    fn error(field: Field, problem: InputProblem) -> InputError {
        InputError { field, problem }
    }

    #[test]
    fn parse_trims_and_builds_unsaved_location() {
        let input = LocationInput::new("  CN Tower, Toronto ", " 43.6426", "-79.3871 ");
        let location = input.parse().unwrap();

        assert_eq!(location.id, UNSAVED_LOCATION_ID);
        assert_eq!(location.address, "CN Tower, Toronto");
        assert_eq!(location.latitude, 43.6426);
        assert_eq!(location.longitude, -79.3871);
    }

    #[test]
    fn parse_checks_fields_in_order() {
        let all_bad = LocationInput::new("", "abc", "");
        assert_eq!(
            all_bad.parse(),
            Err(error(Field::Address, InputProblem::Required))
        );

        let bad_lat = LocationInput::new("x", "abc", "");
        assert_eq!(
            bad_lat.parse(),
            Err(error(Field::Latitude, InputProblem::NotANumber))
        );

        let missing_lng = LocationInput::new("x", "1", "  ");
        assert_eq!(
            missing_lng.parse(),
            Err(error(Field::Longitude, InputProblem::Required))
        );
    }

    #[test]
    fn parse_rejects_out_of_range_and_non_finite() {
        assert_eq!(
            LocationInput::new("x", "90.5", "0").parse(),
            Err(error(Field::Latitude, InputProblem::OutOfRange))
        );
        assert_eq!(
            LocationInput::new("x", "0", "-181").parse(),
            Err(error(Field::Longitude, InputProblem::OutOfRange))
        );
        assert_eq!(
            LocationInput::new("x", "NaN", "0").parse(),
            Err(error(Field::Latitude, InputProblem::NotANumber))
        );
    }

    #[test]
    fn from_location_round_trips_through_parse() {
        let stored = Location::with_id(7, "Casa Loma, Toronto", 43.678, -79.4094);
        let parsed = LocationInput::from_location(&stored).parse().unwrap();

        assert_eq!(parsed.address, stored.address);
        assert_eq!(parsed.latitude, stored.latitude);
        assert_eq!(parsed.longitude, stored.longitude);
    }

    #[test]
    fn error_messages_name_the_field() {
        let message = error(Field::Latitude, InputProblem::OutOfRange).to_string();
        assert!(message.contains("latitude"));
    }
}
