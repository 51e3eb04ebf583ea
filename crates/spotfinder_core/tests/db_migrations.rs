use rusqlite::Connection;
use spotfinder_core::db::migrations::latest_version;
use spotfinder_core::db::seed::seed_locations;
use spotfinder_core::db::{
    initialize_db, initialize_db_in_memory, open_db, open_db_in_memory, DbError, SchemaState,
};

#[test]
fn open_db_in_memory_creates_empty_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "locations");
    assert_eq!(location_count(&conn), 0);
}

#[test]
fn initialize_db_in_memory_seeds_fresh_table() {
    let (conn, state) = initialize_db_in_memory().unwrap();

    assert_eq!(state, SchemaState::Created);
    assert_eq!(location_count(&conn), seed_locations().len() as i64);
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SpotFinder.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "locations");
}

#[test]
fn initialize_after_plain_open_does_not_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SpotFinder.db");

    drop(open_db(&path).unwrap());
    let (conn, state) = initialize_db(&path).unwrap();

    assert_eq!(state, SchemaState::Current);
    assert_eq!(location_count(&conn), 0);
}

#[test]
fn seeding_happens_only_once_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SpotFinder.db");

    let (conn, state) = initialize_db(&path).unwrap();
    assert_eq!(state, SchemaState::Created);
    conn.execute("DELETE FROM locations WHERE id <= 10;", [])
        .unwrap();
    drop(conn);

    let (conn, state) = initialize_db(&path).unwrap();
    assert_eq!(state, SchemaState::Current);
    assert_eq!(location_count(&conn), seed_locations().len() as i64 - 10);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn location_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM locations;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
