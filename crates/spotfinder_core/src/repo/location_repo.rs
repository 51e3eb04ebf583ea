//! Location repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the create/list/search/get/update/delete contract over `locations`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Writes do not validate address or coordinate ranges; callers do.
//! - Writes reject non-finite coordinates, so every stored row stays readable.
//! - Missing ids are reported as `None` or a zero row count, never an error.
//! - Read paths reject non-finite stored coordinates instead of masking them.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::location::{Location, LocationId};
use crate::search::address::{search_by_address, AddressQuery, SearchError};
use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub(crate) const LOCATION_SELECT_SQL: &str = "SELECT
    id,
    address,
    latitude,
    longitude
FROM locations";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for location persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Connection was handed over before the schema was applied.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Insert rejected by a table constraint (e.g. a NULL required column).
    ConstraintViolation(String),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::ConstraintViolation(message) => write!(f, "constraint violation: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted location data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. }
            | Self::ConstraintViolation(_)
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        if let Some(message) = invalid_row_message(&value) {
            return Self::InvalidData(message);
        }
        if value.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
            return Self::ConstraintViolation(value.to_string());
        }
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<SearchError> for RepoError {
    fn from(value: SearchError) -> Self {
        match value {
            SearchError::Db(err) => Self::Db(err),
            SearchError::InvalidData(message) => Self::InvalidData(message),
        }
    }
}

/// Repository interface for location CRUD and lookup.
pub trait LocationRepository {
    /// Inserts a new row; `location.id` is ignored. Returns the assigned id.
    fn create_location(&self, location: &Location) -> RepoResult<LocationId>;
    /// Every record ordered by address.
    fn list_locations(&self) -> RepoResult<Vec<Location>>;
    /// Case-insensitive substring match on address, ordered by address.
    fn search_locations(&self, text: &str) -> RepoResult<Vec<Location>>;
    fn get_location(&self, id: LocationId) -> RepoResult<Option<Location>>;
    /// Overwrites address and coordinates. Returns rows affected (0 or 1).
    fn update_location(&self, location: &Location) -> RepoResult<usize>;
    /// Removes one row permanently. Returns rows affected (0 or 1).
    fn delete_location(&self, id: LocationId) -> RepoResult<usize>;
}

/// SQLite-backed location repository.
pub struct SqliteLocationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLocationRepository<'conn> {
    /// Wraps a connection after checking its schema is at the latest version.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema has not been applied.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl LocationRepository for SqliteLocationRepository<'_> {
    fn create_location(&self, location: &Location) -> RepoResult<LocationId> {
        ensure_finite_coordinates(location)?;
        self.conn.execute(
            "INSERT INTO locations (address, latitude, longitude) VALUES (?1, ?2, ?3);",
            params![
                location.address.as_str(),
                location.latitude,
                location.longitude
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_locations(&self) -> RepoResult<Vec<Location>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LOCATION_SELECT_SQL} ORDER BY address ASC, id ASC;"))?;
        let rows = stmt.query_map([], location_from_row)?;
        let mut locations = Vec::new();
        for row in rows {
            locations.push(row?);
        }

        Ok(locations)
    }

    fn search_locations(&self, text: &str) -> RepoResult<Vec<Location>> {
        Ok(search_by_address(self.conn, &AddressQuery::new(text))?)
    }

    fn get_location(&self, id: LocationId) -> RepoResult<Option<Location>> {
        let location = self
            .conn
            .query_row(
                &format!("{LOCATION_SELECT_SQL} WHERE id = ?1;"),
                [id],
                location_from_row,
            )
            .optional()?;

        Ok(location)
    }

    fn update_location(&self, location: &Location) -> RepoResult<usize> {
        ensure_finite_coordinates(location)?;
        let changed = self.conn.execute(
            "UPDATE locations
             SET
                address = ?1,
                latitude = ?2,
                longitude = ?3
             WHERE id = ?4;",
            params![
                location.address.as_str(),
                location.latitude,
                location.longitude,
                location.id,
            ],
        )?;

        Ok(changed)
    }

    fn delete_location(&self, id: LocationId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM locations WHERE id = ?1;", [id])?;

        Ok(changed)
    }
}

/// Stored coordinate that cannot be a real position (`inf`, `-inf`).
#[derive(Debug)]
struct NonFiniteCoordinate {
    column: &'static str,
    value: f64,
}

impl Display for NonFiniteCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "non-finite value `{}` in locations.{}",
            self.value, self.column
        )
    }
}

impl Error for NonFiniteCoordinate {}

/// Rejects `inf`/`-inf` before they reach a row the read path cannot decode.
///
/// NaN binds as NULL and already fails the `NOT NULL` constraint.
fn ensure_finite_coordinates(location: &Location) -> RepoResult<()> {
    for (column, value) in [
        ("latitude", location.latitude),
        ("longitude", location.longitude),
    ] {
        if value.is_infinite() {
            return Err(RepoError::ConstraintViolation(
                NonFiniteCoordinate { column, value }.to_string(),
            ));
        }
    }
    Ok(())
}

/// Decodes one `LOCATION_SELECT_SQL` row.
pub(crate) fn location_from_row(row: &Row<'_>) -> rusqlite::Result<Location> {
    Ok(Location {
        id: row.get("id")?,
        address: row.get("address")?,
        latitude: finite_column(row, 2, "latitude")?,
        longitude: finite_column(row, 3, "longitude")?,
    })
}

fn finite_column(row: &Row<'_>, index: usize, column: &'static str) -> rusqlite::Result<f64> {
    let value: f64 = row.get(index)?;
    if value.is_finite() {
        return Ok(value);
    }
    Err(rusqlite::Error::FromSqlConversionFailure(
        index,
        Type::Real,
        Box::new(NonFiniteCoordinate { column, value }),
    ))
}

/// Returns a message when `err` came from rejecting a stored row.
pub(crate) fn invalid_row_message(err: &rusqlite::Error) -> Option<String> {
    match err {
        rusqlite::Error::FromSqlConversionFailure(_, _, inner) => inner
            .downcast_ref::<NonFiniteCoordinate>()
            .map(ToString::to_string),
        _ => None,
    }
}
