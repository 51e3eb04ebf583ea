//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply the schema before returning a usable connection.
//! - Keep seeding behind the explicit `initialize_*` entry points.
//! - Provide a lightweight per-operation `connect_db` that never touches schema.
//!
//! # Invariants
//! - `open_*` / `initialize_*` return connections with the latest schema applied.
//! - `open_*` never inserts seed rows.
//! - `connect_db` never creates files or tables; callers check the version.

use super::migrations::{apply_migrations, SchemaState, SeedMode};
use super::DbResult;
use log::{debug, error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a SQLite database file and applies the schema without seeding.
///
/// # Side effects
/// - Creates the file and the `locations` table when missing.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    bootstrap("file", || Connection::open(path), SeedMode::Skip).map(|(conn, _)| conn)
}

/// Opens an in-memory SQLite database and applies the schema without seeding.
pub fn open_db_in_memory() -> DbResult<Connection> {
    bootstrap("memory", Connection::open_in_memory, SeedMode::Skip).map(|(conn, _)| conn)
}

/// Opens a SQLite database file and seeds it if this call created the table.
///
/// Returns the schema state so callers can tell whether seeding happened.
pub fn initialize_db(path: impl AsRef<Path>) -> DbResult<(Connection, SchemaState)> {
    let path = path.as_ref();
    bootstrap("file", || Connection::open(path), SeedMode::OnCreate)
}

/// Opens an in-memory SQLite database populated with the seed set.
pub fn initialize_db_in_memory() -> DbResult<(Connection, SchemaState)> {
    bootstrap("memory", Connection::open_in_memory, SeedMode::OnCreate)
}

/// Opens an existing database file for one store operation.
///
/// Unlike [`open_db`], no schema is applied: a missing file is an error
/// rather than a silently recreated empty store. Callers verify the schema
/// version (e.g. via `SqliteLocationRepository::try_new`).
pub fn connect_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let conn = Connection::open_with_flags(
        path.as_ref(),
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|err| {
        debug!("event=db_connect module=db status=error error={err}");
        err
    })?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

fn bootstrap(
    mode: &str,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
    seed: SeedMode,
) -> DbResult<(Connection, SchemaState)> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode} seed={seed:?}");

    let mut conn = match open() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match configure_connection(&mut conn, seed) {
        Ok(state) => {
            info!(
                "event=db_open module=db status=ok mode={} schema={:?} duration_ms={}",
                mode,
                state,
                started_at.elapsed().as_millis()
            );
            Ok((conn, state))
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn configure_connection(conn: &mut Connection, seed: SeedMode) -> DbResult<SchemaState> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn, seed)
}
