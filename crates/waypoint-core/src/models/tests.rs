use super::*;

#[test]
fn test_local_marker_display_has_prefix() {
    let id = NodeId::local();
    assert!(id.is_local());
    assert!(id.to_string().starts_with(LOCAL_MARKER_PREFIX));
    assert_eq!(id.persisted_id(), None);
}

#[test]
fn test_local_markers_are_unique() {
    assert_ne!(NodeId::local(), NodeId::local());
}

#[test]
fn test_document_key_for_local_is_stable() {
    let id = NodeId::local();
    assert_eq!(id.document_key(), id.document_key());
    assert_eq!(id.document_key().len(), 32);
}

#[test]
fn test_persisted_id_round_trip() {
    let id = NodeId::persisted("abc123");
    assert!(!id.is_local());
    assert_eq!(id.persisted_id(), Some("abc123"));
    assert_eq!(id.document_key(), "abc123");
    assert_eq!(id.to_string(), "abc123");
}

#[test]
fn test_item_kind_from_str() {
    assert_eq!("activity".parse::<ItemKind>().unwrap(), ItemKind::Activity);
    assert_eq!("Stay".parse::<ItemKind>().unwrap(), ItemKind::Stay);
    assert_eq!("NOTE".parse::<ItemKind>().unwrap(), ItemKind::Note);
    assert!("transfer".parse::<ItemKind>().is_err());
}

#[test]
fn test_set_kind_to_stay_clears_activity_state() {
    let mut item = DayItem::new_local();
    item.activity_ids = vec!["act-1".to_string()];
    item.title = "Leftover".to_string();
    item.description = "Leftover".to_string();

    item.set_kind(ItemKind::Stay);

    assert_eq!(item.kind, ItemKind::Stay);
    assert!(item.activity_ids.is_empty());
    assert!(item.title.is_empty());
    assert!(item.description.is_empty());
}

#[test]
fn test_set_kind_to_note_keeps_text_and_clears_references() {
    let mut item = DayItem::new_local();
    item.activity_ids = vec!["act-1".to_string()];
    item.hotel_ids = vec!["hotel-1".to_string()];
    item.title = "Free evening".to_string();

    item.set_kind(ItemKind::Note);

    assert_eq!(item.title, "Free evening");
    assert!(item.activity_ids.is_empty());
    assert!(item.hotel_ids.is_empty());
    assert!(item.references().is_empty());
}

#[test]
fn test_persisted_item_ids_skip_local_markers() {
    let mut day = DayPlan::new_local(1);
    let mut saved = DayItem::new_local();
    saved.id = NodeId::persisted("item-1");
    day.items.push(saved);
    day.items.push(DayItem::new_local());

    assert_eq!(day.persisted_item_ids(), vec!["item-1".to_string()]);
}

#[test]
fn test_editor_config_fill() {
    assert_eq!(
        EditorConfig::fill(None, "<p>Meals</p>"),
        Some("<p>Meals</p>".to_string())
    );
    assert_eq!(
        EditorConfig::fill(Some("  ".to_string()), "<p>Meals</p>"),
        Some("<p>Meals</p>".to_string())
    );
    assert_eq!(
        EditorConfig::fill(Some("<p>Own</p>".to_string()), "<p>Meals</p>"),
        Some("<p>Own</p>".to_string())
    );
    assert_eq!(EditorConfig::fill(None, ""), None);
}

#[test]
fn test_catalog_lookup() {
    let catalog = Catalog {
        activities: vec![Activity {
            id: "act-1".to_string(),
            name: "Boat ride".to_string(),
            description: String::new(),
        }],
        ..Catalog::default()
    };
    assert_eq!(catalog.activity("act-1").map(|a| a.name.as_str()), Some("Boat ride"));
    assert!(catalog.hotel("act-1").is_none());
}
