mod common;

use common::create_test_agency;
use waypoint_core::{
    params::{AddActivity, AddHotel, CreateItinerary},
    store::ListQuery,
    Collection, HotelKind, ItemKind,
};

async fn count(agency: &waypoint_core::Agency, collection: Collection) -> usize {
    agency
        .store()
        .list(collection, &ListQuery::all())
        .await
        .expect("Failed to list documents")
        .len()
}

#[tokio::test]
async fn test_full_editing_workflow() {
    let (_temp_dir, agency) = create_test_agency().await;

    let header = agency
        .create_itinerary(&CreateItinerary {
            title: "Five Days in Bali".to_string(),
            description: None,
        })
        .await
        .expect("Failed to create itinerary");
    let temple = agency
        .add_activity(&AddActivity {
            name: "Tanah Lot temple".to_string(),
            description: None,
        })
        .await
        .unwrap();
    let villa = agency
        .add_hotel(&AddHotel {
            name: "Seminyak Villa".to_string(),
            kind: HotelKind::Homestay,
            star_rating: None,
            description: None,
        })
        .await
        .unwrap();

    // Build three days in one session
    let mut editor = agency.open_editor(&header.id).await.unwrap();
    for title in ["Arrival", "Temples", "Departure"] {
        let day = editor.graph_mut().add_day();
        editor.graph_mut().set_day_title(day, title).unwrap();
    }
    let sight = editor.graph_mut().add_item(1).unwrap();
    editor
        .graph_mut()
        .set_item_activities(1, &sight, vec![temple.id.clone()])
        .unwrap();
    let stay = editor.graph_mut().add_item(0).unwrap();
    editor
        .graph_mut()
        .update_item_kind(0, &stay, ItemKind::Stay)
        .unwrap();
    editor
        .graph_mut()
        .set_item_hotels(0, &stay, vec![villa.id.clone()])
        .unwrap();

    let report = agency.save_editor(&mut editor).await.expect("Save failed");
    assert_eq!(report.days_created, 3);
    assert_eq!(report.items_created, 2);
    assert!(report.day_list_rewritten);
    assert!(!editor.graph().has_local_markers());
    assert_eq!(count(&agency, Collection::DayPlans).await, 3);

    // Saving again without edits writes nothing
    assert!(agency.save_editor(&mut editor).await.unwrap().is_noop());

    // Reorder and delete in a fresh session
    let mut editor = agency.open_editor(&header.id).await.unwrap();
    editor.graph_mut().move_day(2, 0).unwrap();
    editor.graph_mut().remove_day(2).unwrap();

    let report = agency.save_editor(&mut editor).await.unwrap();
    assert_eq!(report.days_deleted, 1);
    assert_eq!(report.items_deleted, 1);
    assert!(report.day_list_rewritten);
    assert!(report.delete_failures.is_empty());

    let reopened = agency.open_editor(&header.id).await.unwrap();
    let titles: Vec<_> = reopened
        .graph()
        .days()
        .iter()
        .map(|d| (d.day_number, d.title.as_str()))
        .collect();
    assert_eq!(titles, vec![(1, "Departure"), (2, "Arrival")]);
    assert_eq!(reopened.graph().days()[1].items[0].hotel_ids, vec![villa.id]);

    assert_eq!(count(&agency, Collection::DayPlans).await, 2);
    assert_eq!(count(&agency, Collection::DayItems).await, 1);
}

#[tokio::test]
async fn test_kind_switch_persists_cleared_fields() {
    let (_temp_dir, agency) = create_test_agency().await;
    let header = agency
        .create_itinerary(&CreateItinerary {
            title: "Kind switch".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let mut editor = agency.open_editor(&header.id).await.unwrap();
    let day = editor.graph_mut().add_day();
    let item = editor.graph_mut().add_item(day).unwrap();
    editor
        .graph_mut()
        .set_item_activities(day, &item, vec!["act-1".to_string()])
        .unwrap();
    agency.save_editor(&mut editor).await.unwrap();

    let item = editor.graph().days()[0].items[0].id.clone();
    editor
        .graph_mut()
        .update_item_kind(day, &item, ItemKind::Note)
        .unwrap();
    editor
        .graph_mut()
        .set_item_title(day, &item, "Rest day")
        .unwrap();
    let report = agency.save_editor(&mut editor).await.unwrap();
    assert_eq!(report.items_updated, 1);
    assert_eq!(report.item_lists_rewritten, 0);

    let reopened = agency.open_editor(&header.id).await.unwrap();
    let stored = &reopened.graph().days()[0].items[0];
    assert_eq!(stored.kind, ItemKind::Note);
    assert_eq!(stored.title, "Rest day");
    assert!(stored.activity_ids.is_empty());
}

#[tokio::test]
async fn test_independent_sessions_last_write_wins() {
    let (_temp_dir, agency) = create_test_agency().await;
    let header = agency
        .create_itinerary(&CreateItinerary {
            title: "Shared".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let mut first = agency.open_editor(&header.id).await.unwrap();
    let mut second = agency.open_editor(&header.id).await.unwrap();

    first.graph_mut().add_day();
    agency.save_editor(&mut first).await.unwrap();

    second.graph_mut().add_day();
    second.graph_mut().add_day();
    agency.save_editor(&mut second).await.unwrap();

    // The second session's day list replaces the first one's
    let reopened = agency.open_editor(&header.id).await.unwrap();
    assert_eq!(reopened.graph().len(), 2);
}
