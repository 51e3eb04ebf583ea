//! Turn-by-turn navigation hand-off links.
//!
//! The maps app is tried first; the browser URL is the fallback when it is
//! not installed. Driving mode is always requested.

use crate::model::location::Location;
use serde::Serialize;

pub const MAPS_APP_PACKAGE: &str = "com.google.android.apps.maps";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationLinks {
    /// Package the app URI is addressed to.
    pub app_package: &'static str,
    /// `google.navigation:` URI handled by the maps app.
    pub app_uri: String,
    /// Directions page for any browser.
    pub browser_url: String,
}

impl NavigationLinks {
    pub fn to(location: &Location) -> Self {
        let destination = format!("{},{}", location.latitude, location.longitude);
        Self {
            app_package: MAPS_APP_PACKAGE,
            app_uri: format!("google.navigation:q={destination}&mode=d"),
            browser_url: format!(
                "https://www.google.com/maps/dir/?api=1&destination={destination}"
            ),
        }
    }
}
