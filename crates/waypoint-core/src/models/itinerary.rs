//! Itinerary header and summary models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Scalar metadata of an itinerary document.
///
/// The ordered day-plan list lives in [`crate::graph::ItineraryGraph`]; the
/// header carries everything else the itinerary document stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryHeader {
    /// Store id of the itinerary document
    pub id: String,

    pub title: String,

    /// Rich-text overview shown under the title
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub destination_ids: Vec<String>,

    #[serde(default)]
    pub price_segment_ids: Vec<String>,

    #[serde(default)]
    pub banner_url: String,

    /// Inclusions section; `None` until first edited or filled from the
    /// settings template
    pub inclusion_html: Option<String>,

    pub exclusion_html: Option<String>,

    pub terms_html: Option<String>,

    /// Timestamp when the itinerary was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the itinerary document was last written (UTC)
    pub updated_at: Timestamp,
}

/// Compact view of an itinerary used by listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItinerarySummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub day_count: usize,
    pub destination_ids: Vec<String>,
    pub price_segment_ids: Vec<String>,
    pub created_at: Timestamp,
}
