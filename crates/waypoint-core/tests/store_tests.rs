mod common;

use common::create_test_store;
use serde_json::json;
use tempfile::NamedTempFile;
use waypoint_core::{
    db::Database,
    store::{Fields, ListQuery, NewDocumentId},
    Collection, DocumentStore, WaypointError,
};

fn fields(value: serde_json::Value) -> Fields {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("Expected a JSON object"),
    }
}

#[test]
fn test_database_initialization_records_schema_version() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    assert_eq!(db.schema_version().expect("Failed to read version"), 1);

    // Reopening an initialized file is a no-op
    drop(db);
    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.schema_version().unwrap(), 1);
}

#[tokio::test]
async fn test_create_and_get_document() {
    let (_temp_dir, store) = create_test_store().await;
    assert!(store.path().exists());

    let created = store
        .create(
            Collection::Activities,
            NewDocumentId::Unique,
            fields(json!({"name": "Snorkelling", "description": ""})),
        )
        .await
        .expect("Failed to create document");
    assert!(!created.id.is_empty());

    let fetched = store
        .get(Collection::Activities, &created.id)
        .await
        .expect("Failed to get document");
    assert_eq!(fetched.field("name"), Some(&json!("Snorkelling")));
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_collections_are_isolated() {
    let (_temp_dir, store) = create_test_store().await;
    store
        .create(
            Collection::Hotels,
            NewDocumentId::Given("shared".to_string()),
            Fields::new(),
        )
        .await
        .unwrap();

    let err = store.get(Collection::Activities, "shared").await.unwrap_err();
    assert!(matches!(err, WaypointError::DocumentNotFound { .. }));
}

#[tokio::test]
async fn test_given_id_conflict() {
    let (_temp_dir, store) = create_test_store().await;
    let id = NewDocumentId::Given("day-item-1".to_string());

    store
        .create(Collection::DayItems, id.clone(), Fields::new())
        .await
        .expect("First create should succeed");
    let err = store
        .create(Collection::DayItems, id, Fields::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WaypointError::DocumentExists { collection: Collection::DayItems, ref id } if id == "day-item-1"
    ));
}

#[tokio::test]
async fn test_update_merges_fields() {
    let (_temp_dir, store) = create_test_store().await;
    let doc = store
        .create(
            Collection::DayPlans,
            NewDocumentId::Unique,
            fields(json!({"title": "Arrival", "day": 1, "items": ["a"]})),
        )
        .await
        .unwrap();

    let updated = store
        .update(
            Collection::DayPlans,
            &doc.id,
            fields(json!({"items": ["a", "b"]})),
        )
        .await
        .expect("Failed to update");

    assert_eq!(updated.field("title"), Some(&json!("Arrival")));
    assert_eq!(updated.field("items"), Some(&json!(["a", "b"])));
    assert!(updated.updated_at >= doc.updated_at);

    let reloaded = store.get(Collection::DayPlans, &doc.id).await.unwrap();
    assert_eq!(reloaded.fields, updated.fields);
}

#[tokio::test]
async fn test_update_missing_document() {
    let (_temp_dir, store) = create_test_store().await;
    let err = store
        .update(Collection::Itineraries, "missing", Fields::new())
        .await
        .unwrap_err();
    assert!(matches!(err, WaypointError::DocumentNotFound { .. }));
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let (_temp_dir, store) = create_test_store().await;
    let doc = store
        .create(Collection::PriceSegments, NewDocumentId::Unique, Fields::new())
        .await
        .unwrap();

    store
        .delete(Collection::PriceSegments, &doc.id)
        .await
        .expect("Failed to delete");
    let err = store
        .delete(Collection::PriceSegments, &doc.id)
        .await
        .unwrap_err();
    assert!(matches!(err, WaypointError::DocumentNotFound { .. }));
}

#[tokio::test]
async fn test_list_orders_and_filters() {
    let (_temp_dir, store) = create_test_store().await;
    for id in ["a", "b", "c"] {
        store
            .create(
                Collection::Destinations,
                NewDocumentId::Given(id.to_string()),
                Fields::new(),
            )
            .await
            .unwrap();
    }
    let ids = |docs: Vec<waypoint_core::store::Document>| {
        docs.into_iter().map(|d| d.id).collect::<Vec<_>>()
    };

    let all = store
        .list(Collection::Destinations, &ListQuery::all())
        .await
        .unwrap();
    assert_eq!(ids(all), vec!["a", "b", "c"]);

    let newest = store
        .list(
            Collection::Destinations,
            &ListQuery::all().newest_first().limit(2),
        )
        .await
        .unwrap();
    assert_eq!(ids(newest), vec!["c", "b"]);

    // Unknown ids are skipped rather than reported
    let picked = store
        .list(
            Collection::Destinations,
            &ListQuery::by_ids(["c", "a", "missing"]),
        )
        .await
        .unwrap();
    assert_eq!(ids(picked), vec!["a", "c"]);
}
