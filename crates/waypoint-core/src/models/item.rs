//! Day item model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// What a day item points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ItemKind {
    /// One or more sightseeing activities from the catalog
    #[default]
    Activity,

    /// One or more hotels from the catalog
    Stay,

    /// Free-text entry with its own title and description
    Note,
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activity" => Ok(ItemKind::Activity),
            "stay" => Ok(ItemKind::Stay),
            "note" => Ok(ItemKind::Note),
            _ => Err(format!("Invalid item kind: {s}")),
        }
    }
}

impl ItemKind {
    /// Wire representation stored in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Activity => "Activity",
            ItemKind::Stay => "Stay",
            ItemKind::Note => "Note",
        }
    }

    /// Whether title and description are owned by the item itself rather
    /// than derived from the referenced catalog entries.
    pub fn has_free_text(&self) -> bool {
        matches!(self, ItemKind::Note)
    }
}

/// A single entry within a day-plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayItem {
    pub id: NodeId,

    pub kind: ItemKind,

    /// Free-text title (notes only)
    #[serde(default)]
    pub title: String,

    /// Free-text description, rich text (notes only)
    #[serde(default)]
    pub description: String,

    /// Referenced activities (activities only)
    #[serde(default)]
    pub activity_ids: Vec<String>,

    /// Referenced hotels (stays only)
    #[serde(default)]
    pub hotel_ids: Vec<String>,
}

impl DayItem {
    /// A fresh, unsaved activity item with no references.
    pub fn new_local() -> Self {
        Self {
            id: NodeId::local(),
            kind: ItemKind::Activity,
            title: String::new(),
            description: String::new(),
            activity_ids: Vec::new(),
            hotel_ids: Vec::new(),
        }
    }

    /// Switches the kind and drops state that belongs to other kinds.
    pub fn set_kind(&mut self, kind: ItemKind) {
        self.kind = kind;
        match kind {
            ItemKind::Activity => {
                self.hotel_ids.clear();
                self.title.clear();
                self.description.clear();
            }
            ItemKind::Stay => {
                self.activity_ids.clear();
                self.title.clear();
                self.description.clear();
            }
            ItemKind::Note => {
                self.activity_ids.clear();
                self.hotel_ids.clear();
            }
        }
    }

    /// The references that matter for the current kind.
    pub fn references(&self) -> &[String] {
        match self.kind {
            ItemKind::Activity => &self.activity_ids,
            ItemKind::Stay => &self.hotel_ids,
            ItemKind::Note => &[],
        }
    }
}
