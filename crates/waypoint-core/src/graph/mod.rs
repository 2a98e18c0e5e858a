//! In-memory itinerary graph and its local edit operations.
//!
//! The graph is the editable tree `itinerary → days → items`. Every
//! operation here is synchronous and touches only memory; nothing reaches
//! the document store until [`crate::reconcile::Reconciler`] runs.
//!
//! Structural edits keep `day_number` equal to `1 + position`:
//!
//! ```rust
//! use waypoint_core::graph::ItineraryGraph;
//!
//! let mut graph = ItineraryGraph::default();
//! graph.add_day();
//! graph.add_day();
//! graph.add_day();
//! graph.remove_day(0).unwrap();
//!
//! let numbers: Vec<u32> = graph.days().iter().map(|d| d.day_number).collect();
//! assert_eq!(numbers, vec![1, 2]);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WaypointError},
    models::{DayItem, DayPlan, ItemKind, NodeId},
};


/// Ordered day-plans of one itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItineraryGraph {
    days: Vec<DayPlan>,
}

impl ItineraryGraph {
    /// Builds a graph from already ordered days, renumbering nothing.
    ///
    /// Used by the loader so the baseline reflects stored day numbers
    /// exactly; a mismatch is repaired by the next save.
    pub fn from_days(days: Vec<DayPlan>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub(crate) fn days_mut(&mut self) -> &mut [DayPlan] {
        &mut self.days
    }

    pub fn day(&self, index: usize) -> Option<&DayPlan> {
        self.days.get(index)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Ids of persisted days, in order.
    pub fn day_ids(&self) -> Vec<String> {
        self.days
            .iter()
            .filter_map(|d| d.id.persisted_id().map(String::from))
            .collect()
    }

    pub fn find_day(&self, id: &str) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.id.persisted_id() == Some(id))
    }

    pub fn item(&self, day_index: usize, item_id: &NodeId) -> Option<&DayItem> {
        self.days
            .get(day_index)
            .and_then(|d| d.items.iter().find(|i| &i.id == item_id))
    }

    /// True if any day or item has not been saved yet.
    pub fn has_local_markers(&self) -> bool {
        self.days
            .iter()
            .any(|d| d.id.is_local() || d.items.iter().any(|i| i.id.is_local()))
    }

    /// Appends an unsaved day with no items and returns its index.
    pub fn add_day(&mut self) -> usize {
        let next = self.days.len() as u32 + 1;
        self.days.push(DayPlan::new_local(next));
        self.days.len() - 1
    }

    /// Removes the day at `index` and renumbers the remaining days.
    pub fn remove_day(&mut self, index: usize) -> Result<DayPlan> {
        self.check_day(index)?;
        let removed = self.days.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Moves a day to a new position and renumbers.
    pub fn move_day(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_day(from)?;
        self.check_day(to)?;
        let day = self.days.remove(from);
        self.days.insert(to, day);
        self.renumber();
        Ok(())
    }

    pub fn set_day_title(&mut self, index: usize, title: impl Into<String>) -> Result<()> {
        self.day_mut(index)?.title = title.into();
        Ok(())
    }

    pub fn set_day_summary(&mut self, index: usize, summary: impl Into<String>) -> Result<()> {
        self.day_mut(index)?.summary = summary.into();
        Ok(())
    }

    /// Appends an unsaved activity item to a day and returns its id.
    pub fn add_item(&mut self, day_index: usize) -> Result<NodeId> {
        let item = DayItem::new_local();
        let id = item.id.clone();
        self.day_mut(day_index)?.items.push(item);
        Ok(id)
    }

    /// Removes an item by id from a day.
    pub fn remove_item(&mut self, day_index: usize, item_id: &NodeId) -> Result<DayItem> {
        let day = self.day_mut(day_index)?;
        let position = day
            .item_position(item_id)
            .ok_or_else(|| item_not_found(item_id))?;
        Ok(day.items.remove(position))
    }

    /// Moves an item to a new position within its day.
    pub fn move_item(&mut self, day_index: usize, from: usize, to: usize) -> Result<()> {
        let day = self.day_mut(day_index)?;
        let count = day.items.len();
        if from >= count || to >= count {
            return Err(WaypointError::invalid_input("position").with_reason(format!(
                "Item position out of range. Day has {count} items"
            )));
        }
        let item = day.items.remove(from);
        day.items.insert(to, item);
        Ok(())
    }

    /// Changes an item's kind, clearing references and free text that no
    /// longer apply.
    pub fn update_item_kind(
        &mut self,
        day_index: usize,
        item_id: &NodeId,
        kind: ItemKind,
    ) -> Result<()> {
        self.item_mut(day_index, item_id)?.set_kind(kind);
        Ok(())
    }

    pub fn set_item_title(
        &mut self,
        day_index: usize,
        item_id: &NodeId,
        title: impl Into<String>,
    ) -> Result<()> {
        self.item_mut(day_index, item_id)?.title = title.into();
        Ok(())
    }

    pub fn set_item_description(
        &mut self,
        day_index: usize,
        item_id: &NodeId,
        description: impl Into<String>,
    ) -> Result<()> {
        self.item_mut(day_index, item_id)?.description = description.into();
        Ok(())
    }

    pub fn set_item_activities(
        &mut self,
        day_index: usize,
        item_id: &NodeId,
        activity_ids: Vec<String>,
    ) -> Result<()> {
        self.item_mut(day_index, item_id)?.activity_ids = dedup_ids(activity_ids);
        Ok(())
    }

    pub fn set_item_hotels(
        &mut self,
        day_index: usize,
        item_id: &NodeId,
        hotel_ids: Vec<String>,
    ) -> Result<()> {
        self.item_mut(day_index, item_id)?.hotel_ids = dedup_ids(hotel_ids);
        Ok(())
    }

    fn renumber(&mut self) {
        for (idx, day) in self.days.iter_mut().enumerate() {
            day.day_number = idx as u32 + 1;
        }
    }

    fn check_day(&self, index: usize) -> Result<()> {
        if index >= self.days.len() {
            return Err(WaypointError::invalid_input("day").with_reason(format!(
                "Day index {index} is out of range. Itinerary has {} days",
                self.days.len()
            )));
        }
        Ok(())
    }

    fn day_mut(&mut self, index: usize) -> Result<&mut DayPlan> {
        self.check_day(index)?;
        Ok(&mut self.days[index])
    }

    fn item_mut(&mut self, day_index: usize, item_id: &NodeId) -> Result<&mut DayItem> {
        self.day_mut(day_index)?
            .items
            .iter_mut()
            .find(|i| &i.id == item_id)
            .ok_or_else(|| item_not_found(item_id))
    }
}

fn item_not_found(item_id: &NodeId) -> WaypointError {
    WaypointError::invalid_input("item").with_reason(format!("No item {item_id} in this day"))
}

/// Drops repeated ids, keeping the first occurrence.
fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
