//! Core persistence and query logic for SpotFinder.
//! This crate owns the location store and every invariant around it.

pub mod config;
pub mod db;
pub mod logging;
pub mod map;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use config::{ConfigError, StoreConfig, DEFAULT_DB_FILE_NAME};
pub use db::{DbError, DbResult, SchemaState};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use map::camera::{CameraPlan, LatLng, LatLngBounds, Marker};
pub use map::navigation::NavigationLinks;
pub use model::input::{Field, InputError, InputProblem, LocationInput};
pub use model::location::{Location, LocationId, LocationValidationError, UNSAVED_LOCATION_ID};
pub use repo::location_repo::{LocationRepository, RepoError, RepoResult, SqliteLocationRepository};
pub use search::address::{search_by_address, AddressQuery, MatchMode, SearchError, SearchResult};
pub use service::location_service::{LocationService, ServiceError, ServiceResult};
pub use store::{LocationStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
