use spotfinder_core::db::initialize_db;
use spotfinder_core::{logging_status, LogLevel, LoggingError, StoreConfig};

#[test]
fn store_config_starts_file_logging_and_rejects_reconfiguration() {
    let db_dir = tempfile::tempdir().unwrap();
    let log_dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        log_level: LogLevel::Debug,
        log_dir: Some(log_dir.path().to_path_buf()),
        ..StoreConfig::in_dir(db_dir.path())
    };

    assert!(config.init_logging().unwrap());
    assert!(config.init_logging().unwrap());
    assert_eq!(
        logging_status(),
        Some((LogLevel::Debug, log_dir.path().to_path_buf()))
    );

    initialize_db(&config.db_path).unwrap();

    let quieter = StoreConfig {
        log_level: LogLevel::Error,
        ..config.clone()
    };
    assert!(matches!(
        quieter.init_logging(),
        Err(LoggingError::LevelConflict { .. })
    ));
}
