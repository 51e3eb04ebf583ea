//! Schema versioning for the `locations` table.
//!
//! # Responsibility
//! - Create the table on first use and stamp `PRAGMA user_version`.
//! - Drop and recreate the table when the stored version is older.
//! - Optionally insert seed rows in the same transaction as creation.
//!
//! # Invariants
//! - Upgrades are destructive; stored rows are not carried across versions.
//! - Seeding only ever follows a create/recreate, never a plain open.

use crate::db::seed::insert_seed_locations;
use crate::db::{DbError, DbResult};
use rusqlite::Connection;

pub const LOCATIONS_TABLE: &str = "locations";

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = include_str!("0001_locations.sql");
const DROP_SQL: &str = "DROP TABLE IF EXISTS locations;";

/// Outcome of bringing a connection up to the latest schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaState {
    /// Table did not exist and was created.
    Created,
    /// Table existed at an older version and was dropped and recreated.
    Recreated { from: u32 },
    /// Table was already at the latest version.
    Current,
}

impl SchemaState {
    /// Returns whether this bootstrap produced an empty, fresh table.
    pub fn is_fresh(self) -> bool {
        !matches!(self, Self::Current)
    }
}

/// Whether a fresh table gets the seed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    Skip,
    OnCreate,
}

/// Returns the latest schema version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Applies the latest schema on the provided connection.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer binary.
/// - `Sqlite` when DDL or seed inserts fail; the transaction is rolled back.
pub fn apply_migrations(conn: &mut Connection, seed: SeedMode) -> DbResult<SchemaState> {
    migrate_to(conn, SCHEMA_VERSION, SCHEMA_SQL, seed)
}

/// Returns the version stamped on the connection's database.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn migrate_to(
    conn: &mut Connection,
    target_version: u32,
    schema_sql: &str,
    seed: SeedMode,
) -> DbResult<SchemaState> {
    let current_version = current_user_version(conn)?;

    if current_version > target_version {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: target_version,
        });
    }

    if current_version == target_version && table_exists(conn, LOCATIONS_TABLE)? {
        return Ok(SchemaState::Current);
    }

    let state = if table_exists(conn, LOCATIONS_TABLE)? {
        SchemaState::Recreated {
            from: current_version,
        }
    } else {
        SchemaState::Created
    };

    let tx = conn.transaction()?;
    tx.execute_batch(DROP_SQL)?;
    tx.execute_batch(schema_sql)?;
    if seed == SeedMode::OnCreate {
        insert_seed_locations(&tx)?;
    }
    tx.execute_batch(&format!("PRAGMA user_version = {target_version};"))?;
    tx.commit()?;

    Ok(state)
}

fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{
        apply_migrations, current_user_version, migrate_to, SchemaState, SeedMode, SCHEMA_SQL,
    };
    use crate::db::seed::seed_locations;
    use rusqlite::Connection;

    fn row_count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM locations;", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn fresh_database_is_created_and_seeded_on_request() {
        let mut conn = Connection::open_in_memory().unwrap();

        let state = apply_migrations(&mut conn, SeedMode::OnCreate).unwrap();
        assert_eq!(state, SchemaState::Created);
        assert_eq!(row_count(&conn), seed_locations().len() as i64);
    }

    #[test]
    fn second_apply_is_current_and_does_not_reseed() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn, SeedMode::OnCreate).unwrap();
        conn.execute("DELETE FROM locations;", []).unwrap();

        let state = apply_migrations(&mut conn, SeedMode::OnCreate).unwrap();
        assert_eq!(state, SchemaState::Current);
        assert_eq!(row_count(&conn), 0);
    }

    #[test]
    fn version_bump_drops_rows_and_reseeds() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn, SeedMode::Skip).unwrap();
        conn.execute(
            "INSERT INTO locations (address, latitude, longitude) VALUES ('only', 1.0, 2.0);",
            [],
        )
        .unwrap();

        let state = migrate_to(&mut conn, 2, SCHEMA_SQL, SeedMode::OnCreate).unwrap();
        assert_eq!(state, SchemaState::Recreated { from: 1 });
        assert_eq!(current_user_version(&conn).unwrap(), 2);
        assert_eq!(row_count(&conn), seed_locations().len() as i64);

        let leftover: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM locations WHERE address = 'only';",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(leftover, 0);
    }

    #[test]
    fn unversioned_table_is_recreated() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE locations (id INTEGER PRIMARY KEY, address TEXT);")
            .unwrap();

        let state = apply_migrations(&mut conn, SeedMode::Skip).unwrap();
        assert_eq!(state, SchemaState::Recreated { from: 0 });
        assert!(state.is_fresh());
        assert_eq!(row_count(&conn), 0);
    }
}
