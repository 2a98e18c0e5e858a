//! Fetching an itinerary graph from the document store.

use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    codec::{self, DAY_PLAN_IDS, ITEM_IDS},
    error::Result,
    graph::ItineraryGraph,
    models::{DayItem, ItineraryHeader},
    store::{Collection, Document, DocumentStore, ListQuery},
};

/// Header plus graph of one itinerary, as stored.
#[derive(Debug, Clone)]
pub struct LoadedItinerary {
    pub header: ItineraryHeader,
    pub graph: ItineraryGraph,
}

/// Loads an itinerary with all of its day-plans and items.
///
/// Children are ordered by the parent's id list, which is the only source
/// of truth for membership and order. Ids whose documents are missing are
/// skipped with a warning.
pub async fn fetch_itinerary<S>(store: &S, itinerary_id: &str) -> Result<LoadedItinerary>
where
    S: DocumentStore + ?Sized,
{
    let doc = store.get(Collection::Itineraries, itinerary_id).await?;
    let header = codec::header_from_document(&doc);
    let day_ids = codec::relation_ids(doc.field(DAY_PLAN_IDS));

    let plans = fetch_in_order(store, Collection::DayPlans, &day_ids).await?;

    let mut days = Vec::with_capacity(plans.len());
    for plan in &plans {
        let item_ids = codec::relation_ids(plan.field(ITEM_IDS));
        let items = fetch_in_order(store, Collection::DayItems, &item_ids)
            .await?
            .iter()
            .map(codec::item_from_document)
            .collect::<Result<Vec<DayItem>>>()?;
        days.push(codec::day_from_document(plan, items)?);
    }

    debug!(
        "Loaded itinerary {itinerary_id} with {} days",
        days.len()
    );

    Ok(LoadedItinerary {
        header,
        graph: ItineraryGraph::from_days(days),
    })
}

/// Batch-fetches documents by id and returns them in the order of `ids`.
pub(crate) async fn fetch_in_order<S>(
    store: &S,
    collection: Collection,
    ids: &[String],
) -> Result<Vec<Document>>
where
    S: DocumentStore + ?Sized,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let docs = store
        .list(collection, &ListQuery::by_ids(ids.iter().cloned()))
        .await?;
    let mut by_id: HashMap<String, Document> =
        docs.into_iter().map(|d| (d.id.clone(), d)).collect();

    let mut ordered = Vec::with_capacity(ids.len());
    for id in ids {
        match by_id.remove(id) {
            Some(doc) => ordered.push(doc),
            None => warn!("Skipping dangling reference {collection}/{id}"),
        }
    }
    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        models::ItemKind,
        reconcile::Reconciler,
        store::{Fields, MemoryStore},
    };

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap_or_default()
    }

    fn seed_itinerary(store: &MemoryStore, days: Value) {
        store.seed(
            Collection::Itineraries,
            "itin",
            fields(json!({ "title": "Komodo", "days": days })),
        );
    }

    #[tokio::test]
    async fn test_dangling_day_reference_is_skipped() {
        let store = MemoryStore::new();
        store.seed(
            Collection::DayPlans,
            "d1",
            fields(json!({ "dayNumber": 1, "title": "Labuan Bajo", "items": [] })),
        );
        seed_itinerary(&store, json!(["missing", "d1"]));

        let loaded = fetch_itinerary(&store, "itin").await.expect("Failed to load");
        assert_eq!(loaded.graph.len(), 1);
        assert_eq!(loaded.graph.days()[0].title, "Labuan Bajo");

        store.clear_calls();
        let baseline = loaded.graph.clone();
        let mut graph = loaded.graph;
        let outcome = Reconciler::new(&store)
            .reconcile(&baseline, &mut graph, "itin")
            .await
            .expect("Failed to reconcile");
        assert!(outcome.report.is_noop());
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_item_kind_loads_and_survives_noop_save() {
        let store = MemoryStore::new();
        store.seed(
            Collection::DayItems,
            "meal",
            fields(json!({ "type": "Meal", "title": "Dinner" })),
        );
        store.seed(
            Collection::DayItems,
            "dive",
            fields(json!({ "type": "Activity", "refActivity": ["act-1"] })),
        );
        store.seed(
            Collection::DayPlans,
            "d1",
            fields(json!({ "dayNumber": 1, "items": ["meal", "dive"] })),
        );
        seed_itinerary(&store, json!(["d1"]));

        let loaded = fetch_itinerary(&store, "itin").await.expect("Failed to load");
        let items = &loaded.graph.days()[0].items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ItemKind::Note);
        assert_eq!(items[0].title, "Dinner");
        assert_eq!(items[1].activity_ids, vec!["act-1"]);

        store.clear_calls();
        let baseline = loaded.graph.clone();
        let mut graph = loaded.graph;
        let outcome = Reconciler::new(&store)
            .reconcile(&baseline, &mut graph, "itin")
            .await
            .expect("Failed to reconcile");
        assert!(outcome.report.is_noop());
        assert!(store.writes().is_empty());

        let stored = store
            .document(Collection::DayItems, "meal")
            .expect("Item should exist");
        assert_eq!(stored.field("type"), Some(&json!("Meal")));
        assert_eq!(stored.field("title"), Some(&json!("Dinner")));
    }
}
