//! Diff-based synchronization of an edited graph with the document store.
//!
//! The reconciler compares the edited graph against the baseline captured
//! at load (or at the last successful save) and issues the smallest set of
//! writes that makes the store match:
//!
//! 1. removed day-plans are cascade-deleted (best-effort),
//! 2. day-plans are created or updated in their final order,
//! 3. each day-plan's items are deleted, created or updated, and its item
//!    list is rewritten if it changed,
//! 4. the itinerary's day-plan list is rewritten if it changed.
//!
//! Remote calls are awaited one at a time so that every child exists before
//! its id is written into a parent list. Creates are keyed by the node's
//! local marker, which makes retrying a failed save safe.

pub(crate) mod cascade;


use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use cascade::{delete_day_plan, delete_itinerary, CascadeOutcome, DeleteFailure};

use crate::{
    codec,
    error::{Result, WaypointError},
    graph::ItineraryGraph,
    models::{DayItem, DayPlan, NodeId},
    store::{Collection, DocumentStore, Fields, NewDocumentId},
};

/// Tally of the writes performed by one save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReport {
    pub header_updated: bool,
    pub days_created: usize,
    pub days_updated: usize,
    pub days_deleted: usize,
    pub items_created: usize,
    pub items_updated: usize,
    pub items_deleted: usize,
    /// Number of day-plans whose item list was rewritten
    pub item_lists_rewritten: usize,
    pub day_list_rewritten: bool,
    /// Creates that found their document already stored by an earlier attempt
    pub adopted: usize,
    pub delete_failures: Vec<DeleteFailure>,
}

impl SaveReport {
    /// True when the save did not touch the store at all.
    pub fn is_noop(&self) -> bool {
        !self.header_updated
            && self.days_created == 0
            && self.days_updated == 0
            && self.days_deleted == 0
            && self.items_created == 0
            && self.items_updated == 0
            && self.items_deleted == 0
            && self.item_lists_rewritten == 0
            && !self.day_list_rewritten
            && self.delete_failures.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.delete_failures.is_empty()
    }
}

/// Result of a successful reconcile.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// Deep copy of the saved graph; the next save diffs against this
    pub baseline: ItineraryGraph,
    pub report: SaveReport,
}

/// Applies graph diffs for one store.
pub struct Reconciler<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> Reconciler<'a, S>
where
    S: DocumentStore + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Makes the itinerary `parent_id` in the store match `current`.
    ///
    /// Store ids assigned to local nodes are written back into `current`
    /// as they are obtained, so a failed call leaves `current` holding every
    /// id that was created before the failure. Only deletions are
    /// best-effort; any other store error aborts and is returned.
    pub async fn reconcile(
        &self,
        original: &ItineraryGraph,
        current: &mut ItineraryGraph,
        parent_id: &str,
    ) -> Result<ReconcileOutcome> {
        let mut report = SaveReport::default();

        let baseline_days: HashMap<&str, &DayPlan> = original
            .days()
            .iter()
            .filter_map(|day| day.id.persisted_id().map(|id| (id, day)))
            .collect();

        self.delete_removed_days(original, current, &mut report)
            .await;

        let mut final_day_ids = Vec::with_capacity(current.len());
        for (idx, day) in current.days_mut().iter_mut().enumerate() {
            let day_number = idx as u32 + 1;
            let baseline = day
                .id
                .persisted_id()
                .and_then(|id| baseline_days.get(id).copied());

            let plan_id = self.upsert_day(day, day_number, baseline, &mut report).await?;
            self.sync_items(&plan_id, day, baseline, &mut report).await?;
            final_day_ids.push(plan_id);
        }

        if final_day_ids != original.day_ids() {
            debug!(
                "Rewriting day list of itinerary {parent_id} ({} days)",
                final_day_ids.len()
            );
            self.store
                .update(
                    Collection::Itineraries,
                    parent_id,
                    codec::day_plan_ids_fields(&final_day_ids),
                )
                .await?;
            report.day_list_rewritten = true;
        }

        Ok(ReconcileOutcome {
            baseline: current.clone(),
            report,
        })
    }

    async fn delete_removed_days(
        &self,
        original: &ItineraryGraph,
        current: &ItineraryGraph,
        report: &mut SaveReport,
    ) {
        let kept: HashSet<String> = current.day_ids().into_iter().collect();

        for day in original.days() {
            let Some(plan_id) = day.id.persisted_id() else {
                continue;
            };
            if kept.contains(plan_id) {
                continue;
            }

            debug!("Deleting removed day plan {plan_id}");
            let outcome = delete_day_plan(self.store, plan_id, &day.persisted_item_ids()).await;
            report.items_deleted += outcome.items_deleted;
            if outcome.plan_deleted {
                report.days_deleted += 1;
            }
            report.delete_failures.extend(outcome.failures);
        }
    }

    /// Creates or updates one day-plan and returns its store id.
    async fn upsert_day(
        &self,
        day: &mut DayPlan,
        day_number: u32,
        baseline: Option<&DayPlan>,
        report: &mut SaveReport,
    ) -> Result<String> {
        let fields = codec::day_fields(day_number, day);

        let plan_id = match day.id.persisted_id() {
            None => {
                let (id, adopted) = self
                    .create_or_adopt(Collection::DayPlans, day.id.document_key(), fields)
                    .await?;
                day.id = NodeId::persisted(&id);
                report.days_created += 1;
                if adopted {
                    report.adopted += 1;
                }
                id
            }
            Some(id) => {
                let id = id.to_string();
                let changed = baseline.map_or(true, |orig| {
                    orig.day_number != day_number
                        || orig.title != day.title
                        || orig.summary != day.summary
                });
                if changed {
                    debug!("Updating day plan {id} (day {day_number})");
                    self.store.update(Collection::DayPlans, &id, fields).await?;
                    report.days_updated += 1;
                }
                id
            }
        };

        day.day_number = day_number;
        Ok(plan_id)
    }

    async fn sync_items(
        &self,
        plan_id: &str,
        day: &mut DayPlan,
        baseline: Option<&DayPlan>,
        report: &mut SaveReport,
    ) -> Result<()> {
        let baseline_items: HashMap<&str, &DayItem> = baseline
            .map(|orig| {
                orig.items
                    .iter()
                    .filter_map(|item| item.id.persisted_id().map(|id| (id, item)))
                    .collect()
            })
            .unwrap_or_default();

        let kept: HashSet<String> = day.persisted_item_ids().into_iter().collect();
        let removed = baseline
            .map(DayPlan::persisted_item_ids)
            .unwrap_or_default()
            .into_iter()
            .filter(|id| !kept.contains(id));
        for id in removed {
            if cascade::delete_best_effort(
                self.store,
                Collection::DayItems,
                &id,
                &mut report.delete_failures,
            )
            .await
            {
                report.items_deleted += 1;
            }
        }

        let mut final_item_ids = Vec::with_capacity(day.items.len());
        for item in day.items.iter_mut() {
            let fields = codec::item_fields(item);
            match item.id.persisted_id() {
                None => {
                    let (id, adopted) = self
                        .create_or_adopt(Collection::DayItems, item.id.document_key(), fields)
                        .await?;
                    item.id = NodeId::persisted(&id);
                    report.items_created += 1;
                    if adopted {
                        report.adopted += 1;
                    }
                    final_item_ids.push(id);
                }
                Some(id) => {
                    let changed = baseline_items
                        .get(id)
                        .map_or(true, |orig| codec::item_fields(orig) != fields);
                    if changed {
                        debug!("Updating item {id}");
                        self.store.update(Collection::DayItems, id, fields).await?;
                        report.items_updated += 1;
                    }
                    final_item_ids.push(id.to_string());
                }
            }
        }

        // A day-plan absent from the baseline was either just created or
        // left behind by a failed save, so its stored list is unknown.
        let list_changed = match baseline {
            Some(orig) => orig.persisted_item_ids() != final_item_ids,
            None => true,
        };
        if list_changed {
            debug!(
                "Rewriting item list of day plan {plan_id} ({} items)",
                final_item_ids.len()
            );
            self.store
                .update(
                    Collection::DayPlans,
                    plan_id,
                    codec::item_ids_fields(&final_item_ids),
                )
                .await?;
            report.item_lists_rewritten += 1;
        }

        Ok(())
    }

    /// Creates a document under `key`, or adopts it if an earlier attempt
    /// already stored it.
    ///
    /// Returns the document id and whether it was adopted.
    async fn create_or_adopt(
        &self,
        collection: Collection,
        key: String,
        fields: Fields,
    ) -> Result<(String, bool)> {
        debug!("Creating {collection}/{key}");
        match self
            .store
            .create(collection, NewDocumentId::Given(key.clone()), fields.clone())
            .await
        {
            Ok(doc) => Ok((doc.id, false)),
            Err(WaypointError::DocumentExists { .. }) => {
                warn!("{collection}/{key} already exists from an earlier attempt, adopting it");
                self.store.update(collection, &key, fields).await?;
                Ok((key, true))
            }
            Err(e) => Err(e),
        }
    }
}
