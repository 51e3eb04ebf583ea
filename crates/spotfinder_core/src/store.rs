//! Per-operation store facade.
//!
//! # Responsibility
//! - Own the database location for one hosting context.
//! - Open a fresh connection for each operation and release it on every path.
//! - Keep the one-time seed bootstrap separate from ordinary opens.
//!
//! # Invariants
//! - No connection outlives the call that opened it.
//! - Per-operation connections never create or migrate the schema; only
//!   `open` and `initialize` do.
//! - Only `LocationStore::initialize` can insert seed rows.

use crate::config::{ConfigError, StoreConfig};
use crate::db::{connect_db, initialize_db, open_db, DbError, SchemaState};
use crate::model::input::LocationInput;
use crate::model::location::{Location, LocationId};
use crate::repo::location_repo::{RepoError, RepoResult, SqliteLocationRepository};
use crate::service::location_service::{LocationService, ServiceResult};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

#[derive(Debug)]
pub enum StoreError {
    Config(ConfigError),
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid store config: {err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<ConfigError> for StoreError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// File-backed location store.
#[derive(Debug, Clone)]
pub struct LocationStore {
    config: StoreConfig,
}

impl LocationStore {
    /// Validates config and applies the schema without seeding.
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        drop(open_db(&config.db_path)?);
        Ok(Self { config })
    }

    /// Validates config, applies the schema and seeds a freshly created table.
    ///
    /// Call once per hosting context at startup. Returns whether this call
    /// created (and therefore seeded) the table.
    pub fn initialize(config: StoreConfig) -> Result<(Self, SchemaState), StoreError> {
        config.validate()?;
        let (conn, state) = initialize_db(&config.db_path)?;
        drop(conn);
        Ok((Self { config }, state))
    }

    pub fn db_path(&self) -> &Path {
        &self.config.db_path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Inserts `location` (its id is ignored) and returns the assigned id.
    pub fn create(&self, location: &Location) -> RepoResult<LocationId> {
        self.with_service("create", |service| service.create_location(location))
    }

    /// Every record, ordered by address.
    pub fn get_all(&self) -> RepoResult<Vec<Location>> {
        self.with_service("get_all", |service| service.list_locations())
    }

    /// Records whose address contains `text`, ignoring case; `""` matches all.
    pub fn search_by_address(&self, text: &str) -> RepoResult<Vec<Location>> {
        self.with_service("search", |service| service.search_locations(text))
    }

    pub fn get_by_id(&self, id: LocationId) -> RepoResult<Option<Location>> {
        self.with_service("get_by_id", |service| service.get_location(id))
    }

    /// Returns rows affected; `0` means no such id.
    pub fn update(&self, location: &Location) -> RepoResult<usize> {
        self.with_service("update", |service| service.update_location(location))
    }

    /// Returns rows affected; `0` means no such id.
    pub fn delete(&self, id: LocationId) -> RepoResult<usize> {
        self.with_service("delete", |service| service.delete_location(id))
    }

    /// Search box behavior: blank text lists all.
    pub fn list_or_search(&self, text: &str) -> RepoResult<Vec<Location>> {
        self.with_service("list_or_search", |service| service.list_or_search(text))
    }

    /// Validates add-form input and stores it.
    pub fn add_from_input(&self, input: &LocationInput) -> ServiceResult<Location> {
        self.with_service("add_from_input", |service| service.add_location(input))
    }

    /// Validates edit-form input and overwrites record `id`.
    pub fn edit_from_input(
        &self,
        id: LocationId,
        input: &LocationInput,
    ) -> ServiceResult<Option<Location>> {
        self.with_service("edit_from_input", |service| {
            service.edit_location(id, input)
        })
    }

    fn with_service<T, E>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&LocationService<SqliteLocationRepository<'_>>) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<RepoError> + Display,
    {
        let started_at = Instant::now();
        let conn =
            connect_db(&self.config.db_path).map_err(|err| E::from(RepoError::from(err)))?;
        let repo = SqliteLocationRepository::try_new(&conn).map_err(E::from)?;
        let service = LocationService::new(repo);

        let result = f(&service);
        match &result {
            Ok(_) => debug!(
                "event=store_op module=store status=ok op={} duration_ms={}",
                operation,
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=store_op module=store status=error op={} duration_ms={} error={}",
                operation,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}
