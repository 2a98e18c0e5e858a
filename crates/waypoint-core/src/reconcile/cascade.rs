//! Best-effort cascade deletion of day-plans and itineraries.
//!
//! Child deletions never abort the cascade. Each failure is logged and
//! returned to the caller so it can decide whether to surface a
//! partial-failure warning. Documents that are already gone are not
//! failures.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    codec::{self, DAY_PLAN_IDS, ITEM_IDS},
    error::Result,
    store::{Collection, DocumentStore, ListQuery},
};

/// A child document that could not be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFailure {
    pub collection: Collection,
    pub id: String,
    pub reason: String,
}

/// What a day-plan cascade actually removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub items_deleted: usize,
    pub plan_deleted: bool,
    pub failures: Vec<DeleteFailure>,
}

/// Deletes one document, tolerating failure.
///
/// Returns true if the document was removed by this call.
pub(crate) async fn delete_best_effort<S>(
    store: &S,
    collection: Collection,
    id: &str,
    failures: &mut Vec<DeleteFailure>,
) -> bool
where
    S: DocumentStore + ?Sized,
{
    match store.delete(collection, id).await {
        Ok(()) => {
            debug!("Deleted {collection}/{id}");
            true
        }
        Err(e) if e.is_not_found() => {
            debug!("{collection}/{id} was already gone");
            false
        }
        Err(e) => {
            warn!("Failed to delete {collection}/{id}: {e}");
            failures.push(DeleteFailure {
                collection,
                id: id.to_string(),
                reason: e.to_string(),
            });
            false
        }
    }
}

/// Deletes a day-plan's items and then the day-plan itself.
///
/// The stored document is read first so that items linked by a concurrent
/// or earlier session are removed too; `known_item_ids` (from the editor's
/// baseline) covers the case where that read fails.
pub async fn delete_day_plan<S>(store: &S, plan_id: &str, known_item_ids: &[String]) -> CascadeOutcome
where
    S: DocumentStore + ?Sized,
{
    let mut outcome = CascadeOutcome::default();

    let mut item_ids = match store.get(Collection::DayPlans, plan_id).await {
        Ok(doc) => codec::relation_ids(doc.field(ITEM_IDS)),
        Err(e) => {
            if !e.is_not_found() {
                warn!("Could not inspect day plan {plan_id} before deleting it: {e}");
            }
            Vec::new()
        }
    };
    for id in known_item_ids {
        if !item_ids.contains(id) {
            item_ids.push(id.clone());
        }
    }

    for item_id in &item_ids {
        if delete_best_effort(store, Collection::DayItems, item_id, &mut outcome.failures).await {
            outcome.items_deleted += 1;
        }
    }

    outcome.plan_deleted =
        delete_best_effort(store, Collection::DayPlans, plan_id, &mut outcome.failures).await;
    outcome
}

/// Deletes an itinerary with all of its day-plans and items.
///
/// Reading the itinerary and deleting the itinerary document itself are
/// not best-effort: their errors propagate. Everything below the itinerary
/// is removed best-effort and reported.
pub async fn delete_itinerary<S>(store: &S, itinerary_id: &str) -> Result<Vec<DeleteFailure>>
where
    S: DocumentStore + ?Sized,
{
    let doc = store.get(Collection::Itineraries, itinerary_id).await?;
    let day_ids = codec::relation_ids(doc.field(DAY_PLAN_IDS));

    let mut failures = Vec::new();
    if !day_ids.is_empty() {
        let plans = store
            .list(Collection::DayPlans, &ListQuery::by_ids(day_ids.iter().cloned()))
            .await?;
        for plan in plans {
            let item_ids = codec::relation_ids(plan.field(ITEM_IDS));
            for item_id in &item_ids {
                delete_best_effort(store, Collection::DayItems, item_id, &mut failures).await;
            }
            delete_best_effort(store, Collection::DayPlans, &plan.id, &mut failures).await;
        }
    }

    store.delete(Collection::Itineraries, itinerary_id).await?;
    debug!(
        "Deleted itinerary {itinerary_id} ({} child failures)",
        failures.len()
    );

    Ok(failures)
}
