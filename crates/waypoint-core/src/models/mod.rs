//! Data models for itineraries, day-plans, items and the reference catalog.
//!
//! These are the typed forms of the documents held by the document store.
//! Narrowing from loosely typed store documents happens once, in
//! [`crate::codec`]; everything past that boundary works with these types.
//! Display implementations live in [`crate::display`].
//!
//! # Identity
//!
//! Day-plans and items are identified by [`NodeId`], which makes "has this
//! been saved yet" a type-level question:
//!
//! ```rust
//! use waypoint_core::models::{DayItem, NodeId};
//!
//! let mut item = DayItem::new_local();
//! assert!(item.id.is_local());
//!
//! item.id = NodeId::persisted("65f0c2a1");
//! assert_eq!(item.id.persisted_id(), Some("65f0c2a1"));
//! ```

pub mod day;
pub mod ids;
pub mod item;
pub mod itinerary;
pub mod reference;
pub mod settings;

#[cfg(test)]
mod tests;

pub use day::DayPlan;
pub use ids::{NodeId, LOCAL_MARKER_PREFIX};
pub use item::{DayItem, ItemKind};
pub use itinerary::{ItineraryHeader, ItinerarySummary};
pub use reference::{Activity, Catalog, Destination, Hotel, HotelKind, PriceSegment};
pub use settings::{CompanyInfo, EditorConfig, TemplateSection};
