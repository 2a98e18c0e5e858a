//! Tests for the editor session.

use serde_json::{json, Value};

use super::*;
use crate::{
    models::{ItemKind, TemplateSection},
    store::{Fault, Fields, MemoryStore, Operation},
};

fn fields(value: Value) -> Fields {
    value.as_object().cloned().unwrap_or_default()
}

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.seed(
        Collection::DayItems,
        "item-1",
        fields(json!({ "type": "Activity", "refActivity": ["act-1"] })),
    );
    store.seed(
        Collection::DayPlans,
        "plan-1",
        fields(json!({ "dayNumber": 1, "title": "Arrival", "items": ["item-1"] })),
    );
    store.seed(
        Collection::Itineraries,
        "itin-1",
        fields(json!({
            "title": "Java Explorer",
            "description": "",
            "destinationIds": [],
            "priceSegmentIds": [],
            "bannerUrl": "",
            "inclusionHtml": "<p>Breakfast</p>",
            "exclusionHtml": "",
            "termsHtml": "",
            "days": ["plan-1"],
        })),
    );
    store
}

async fn open(store: &MemoryStore) -> ItineraryEditor {
    let editor = ItineraryEditor::load(store, "itin-1", &EditorConfig::default())
        .await
        .expect("Failed to load editor");
    store.clear_calls();
    editor
}

#[tokio::test]
async fn test_load_builds_graph_and_header() {
    let store = seeded_store();
    let editor = open(&store).await;

    assert_eq!(editor.id(), "itin-1");
    assert_eq!(editor.header().title, "Java Explorer");
    assert_eq!(editor.graph().len(), 1);
    assert_eq!(editor.graph().days()[0].items[0].activity_ids, vec!["act-1"]);
    assert!(!editor.is_dirty());
}

#[tokio::test]
async fn test_load_missing_itinerary_fails() {
    let store = MemoryStore::new();
    let err = ItineraryEditor::load(&store, "missing", &EditorConfig::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_templates_fill_blank_sections_only() {
    let store = seeded_store();
    let config = EditorConfig {
        inclusion_template_html: "<p>Template inclusions</p>".to_string(),
        exclusion_template_html: "<p>Flights</p>".to_string(),
        terms_template_html: String::new(),
        ..EditorConfig::default()
    };

    let mut editor = ItineraryEditor::load(&store, "itin-1", &config)
        .await
        .expect("Failed to load editor");

    assert_eq!(editor.header().inclusion_html.as_deref(), Some("<p>Breakfast</p>"));
    assert_eq!(editor.header().exclusion_html.as_deref(), Some("<p>Flights</p>"));
    assert_eq!(editor.header().terms_html.as_deref(), Some(""));
    assert!(editor.is_dirty());

    store.clear_calls();
    let report = editor.save(&store).await.expect("Failed to save");
    assert!(report.header_updated);
    let stored = store.document(Collection::Itineraries, "itin-1").unwrap();
    assert_eq!(stored.fields["exclusionHtml"], json!("<p>Flights</p>"));
}

#[tokio::test]
async fn test_save_without_changes_writes_nothing() {
    let store = seeded_store();
    let mut editor = open(&store).await;

    let report = editor.save(&store).await.expect("Failed to save");

    assert!(report.is_noop());
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn test_blank_title_is_rejected_before_any_write() {
    let store = seeded_store();
    let mut editor = open(&store).await;

    editor.set_title("   ");
    editor.graph_mut().add_day();

    let err = editor.save(&store).await.unwrap_err();
    assert!(matches!(err, WaypointError::InvalidInput { ref field, .. } if field == "title"));
    assert!(store.calls().is_empty());
    assert!(editor.graph().has_local_markers());
}

#[tokio::test]
async fn test_header_change_updates_itinerary_only() {
    let store = seeded_store();
    let mut editor = open(&store).await;

    editor.set_title("Java & Bali Explorer");
    editor.set_destinations(vec!["dest-java".to_string(), "dest-bali".to_string()]);
    let report = editor.save(&store).await.expect("Failed to save");

    let writes = store.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].collection(), Collection::Itineraries);
    let sent = writes[0].fields().unwrap();
    assert_eq!(sent["title"], json!("Java & Bali Explorer"));
    assert_eq!(sent["destinationIds"], json!(["dest-java", "dest-bali"]));
    assert!(!sent.contains_key("days"));
    assert!(report.header_updated);
    assert!(!editor.is_dirty());
}

#[tokio::test]
async fn test_failed_save_keeps_baseline_and_retry_completes() {
    let store = seeded_store();
    let mut editor = open(&store).await;

    let day = editor.graph_mut().add_day();
    let item = editor.graph_mut().add_item(day).unwrap();
    editor
        .graph_mut()
        .update_item_kind(day, &item, ItemKind::Note)
        .unwrap();
    editor
        .graph_mut()
        .set_item_title(day, &item, "Free evening")
        .unwrap();

    store.inject(Fault::on(Operation::Update, Collection::Itineraries).once());
    editor.save(&store).await.unwrap_err();

    assert!(editor.is_dirty());
    assert_eq!(editor.baseline().len(), 1);

    let report = editor.save(&store).await.expect("Retry should succeed");
    assert!(report.day_list_rewritten);
    assert!(!editor.is_dirty());
    assert_eq!(store.count(Collection::DayPlans), 2);
    assert_eq!(store.count(Collection::DayItems), 2);

    let reloaded = ItineraryEditor::load(&store, "itin-1", &EditorConfig::default())
        .await
        .expect("Failed to reload");
    assert_eq!(reloaded.graph(), editor.graph());
}

#[tokio::test]
async fn test_second_save_after_success_is_noop() {
    let store = seeded_store();
    let mut editor = open(&store).await;

    editor.graph_mut().remove_day(0).unwrap();
    editor.save(&store).await.expect("Failed to save");
    store.clear_calls();

    let report = editor.save(&store).await.expect("Failed to save again");
    assert!(report.is_noop());
    assert!(store.writes().is_empty());
    assert!(editor.graph().is_empty());
}

#[tokio::test]
async fn test_save_after_failure_deletes_abandoned_documents() {
    let store = seeded_store();
    let mut editor = open(&store).await;

    let day = editor.graph_mut().add_day();
    editor.graph_mut().add_item(day).unwrap();
    store.inject(Fault::on(Operation::Create, Collection::DayItems).once());
    editor.save(&store).await.unwrap_err();
    assert_eq!(store.count(Collection::DayPlans), 2);

    // The half-saved day is dropped before the next save
    editor.graph_mut().remove_day(day).unwrap();
    assert!(editor.is_dirty());

    let report = editor.save(&store).await.expect("Failed to save");
    assert_eq!(report.days_deleted, 1);
    assert!(report.delete_failures.is_empty());
    assert!(!editor.is_dirty());
    assert_eq!(store.count(Collection::DayPlans), 1);
    assert_eq!(store.count(Collection::DayItems), 1);

    let itinerary = store
        .document(Collection::Itineraries, "itin-1")
        .expect("Itinerary should exist");
    assert_eq!(itinerary.field("days"), Some(&json!(["plan-1"])));
}

#[tokio::test]
async fn test_save_after_failure_keeps_documents_still_in_use() {
    let store = seeded_store();
    let mut editor = open(&store).await;

    let day = editor.graph_mut().add_day();
    editor.graph_mut().add_item(day).unwrap();
    store.inject(Fault::on(Operation::Create, Collection::DayItems).once());
    editor.save(&store).await.unwrap_err();

    let report = editor.save(&store).await.expect("Retry should succeed");
    assert_eq!(report.days_deleted, 0);
    assert_eq!(report.items_created, 1);
    assert_eq!(store.count(Collection::DayPlans), 2);
    assert_eq!(store.count(Collection::DayItems), 2);
}

#[tokio::test]
async fn test_use_template_replaces_own_section() {
    let store = seeded_store();
    let config = EditorConfig {
        inclusion_template_html: "<p>Hotel and guide</p>".to_string(),
        ..EditorConfig::default()
    };
    let mut editor = ItineraryEditor::load(&store, "itin-1", &config)
        .await
        .expect("Failed to load editor");
    assert_eq!(editor.header().inclusion_html.as_deref(), Some("<p>Breakfast</p>"));
    assert!(!editor.is_dirty());

    editor.use_template(TemplateSection::Inclusion, &config);
    assert_eq!(
        editor.header().inclusion_html.as_deref(),
        Some("<p>Hotel and guide</p>")
    );

    // An empty template clears the section
    editor.use_template(TemplateSection::Terms, &config);
    assert_eq!(editor.header().terms_html.as_deref(), Some(""));

    editor.save(&store).await.expect("Failed to save");
    let stored = store.document(Collection::Itineraries, "itin-1").unwrap();
    assert_eq!(stored.fields["inclusionHtml"], json!("<p>Hotel and guide</p>"));
}
