//! Day-plan model definition.

use serde::{Deserialize, Serialize};

use super::{DayItem, NodeId};

/// One day's worth of itinerary content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub id: NodeId,

    /// 1-based position within the itinerary
    pub day_number: u32,

    #[serde(default)]
    pub title: String,

    /// Rich-text summary of the day
    #[serde(default)]
    pub summary: String,

    /// Ordered items; persisted as the day-plan's item id list
    #[serde(default)]
    pub items: Vec<DayItem>,
}

impl DayPlan {
    /// A fresh, unsaved day placed at `day_number`.
    pub fn new_local(day_number: u32) -> Self {
        Self {
            id: NodeId::local(),
            day_number,
            title: String::new(),
            summary: String::new(),
            items: Vec::new(),
        }
    }

    /// Ids of the items that have already been persisted, in order.
    pub fn persisted_item_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.id.persisted_id().map(String::from))
            .collect()
    }

    pub fn item_position(&self, id: &NodeId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}
