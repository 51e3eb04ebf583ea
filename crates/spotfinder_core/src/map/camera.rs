//! Camera placement and marker content for the map view.
//!
//! # Responsibility
//! - Decide where the map camera goes for zero, one or many locations.
//! - Build marker title/snippet text from stored records.
//!
//! # Invariants
//! - Bounds always contain every included point.
//! - Bounds do not wrap across the antimeridian.

use crate::model::location::Location;
use serde::Serialize;

/// Fallback center when there is nothing to show (downtown Toronto).
pub const DEFAULT_CENTER: LatLng = LatLng {
    latitude: 43.6532,
    longitude: -79.3832,
};
pub const DEFAULT_ZOOM: f32 = 10.0;
pub const SELECTED_LOCATION_ZOOM: f32 = 15.0;
pub const SINGLE_POINT_ZOOM: f32 = 12.0;
pub const BOUNDS_PADDING_PX: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<&Location> for LatLng {
    fn from(location: &Location) -> Self {
        Self::new(location.latitude, location.longitude)
    }
}

/// Axis-aligned lat/lng rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLngBounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl LatLngBounds {
    pub fn builder() -> LatLngBoundsBuilder {
        LatLngBoundsBuilder::default()
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.southwest.latitude + self.northeast.latitude) / 2.0,
            (self.southwest.longitude + self.northeast.longitude) / 2.0,
        )
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.southwest.latitude..=self.northeast.latitude).contains(&point.latitude)
            && (self.southwest.longitude..=self.northeast.longitude).contains(&point.longitude)
    }

    /// True when all included points coincide, so there is no area to fit.
    pub fn is_single_point(&self) -> bool {
        self.southwest == self.northeast
    }
}

/// Accumulates points into the smallest enclosing [`LatLngBounds`].
#[derive(Debug, Clone, Default)]
pub struct LatLngBoundsBuilder {
    bounds: Option<LatLngBounds>,
}

impl LatLngBoundsBuilder {
    pub fn include(&mut self, point: LatLng) -> &mut Self {
        self.bounds = Some(match self.bounds {
            None => LatLngBounds {
                southwest: point,
                northeast: point,
            },
            Some(bounds) => LatLngBounds {
                southwest: LatLng::new(
                    bounds.southwest.latitude.min(point.latitude),
                    bounds.southwest.longitude.min(point.longitude),
                ),
                northeast: LatLng::new(
                    bounds.northeast.latitude.max(point.latitude),
                    bounds.northeast.longitude.max(point.longitude),
                ),
            },
        });
        self
    }

    /// Returns `None` when no point was included.
    pub fn build(&self) -> Option<LatLngBounds> {
        self.bounds
    }
}

/// Where to move the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraPlan {
    Center { target: LatLng, zoom: f32 },
    FitBounds { bounds: LatLngBounds, padding_px: u32 },
}

impl CameraPlan {
    /// Close-up on one location picked from the list.
    pub fn for_selected(location: &Location) -> Self {
        Self::Center {
            target: LatLng::from(location),
            zoom: SELECTED_LOCATION_ZOOM,
        }
    }

    /// Overview that keeps every location on screen.
    pub fn for_locations(locations: &[Location]) -> Self {
        let mut builder = LatLngBounds::builder();
        for location in locations {
            builder.include(LatLng::from(location));
        }

        match builder.build() {
            None => Self::Center {
                target: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
            Some(bounds) if bounds.is_single_point() => Self::Center {
                target: bounds.southwest,
                zoom: SINGLE_POINT_ZOOM,
            },
            Some(bounds) => Self::FitBounds {
                bounds,
                padding_px: BOUNDS_PADDING_PX,
            },
        }
    }
}

/// Map pin for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    pub title: String,
    pub snippet: String,
}

impl From<&Location> for Marker {
    fn from(location: &Location) -> Self {
        Self {
            position: LatLng::from(location),
            title: location.address.clone(),
            snippet: location.coordinates_string(),
        }
    }
}

pub fn markers(locations: &[Location]) -> Vec<Marker> {
    locations.iter().map(Marker::from).collect()
}
