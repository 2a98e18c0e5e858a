use tempfile::TempDir;
use waypoint_core::{Agency, AgencyBuilder, SqliteStore};

/// Helper function to create an agency over a fresh SQLite file
pub async fn create_test_agency() -> (TempDir, Agency) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let agency = AgencyBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create agency");
    (temp_dir, agency)
}

/// Helper function to open a bare document store
pub async fn create_test_store() -> (TempDir, SqliteStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SqliteStore::open(temp_dir.path().join("store.db"))
        .await
        .expect("Failed to open store");
    (temp_dir, store)
}
