//! Core library for the Waypoint itinerary editor.
//!
//! A travel agency keeps its itineraries in a document store: an itinerary
//! holds an ordered list of day-plans, each day-plan an ordered list of
//! items, and items reference activities or hotels from a shared catalog.
//! This crate loads one itinerary into an editable in-memory graph and
//! saves it back with the smallest set of document writes.
//!
//! # Layers
//!
//! - [`store`]: the [`DocumentStore`] boundary, with SQLite and in-memory
//!   backends
//! - [`codec`]: narrowing store documents into [`models`] and back
//! - [`graph`]: synchronous edits on the itinerary tree
//! - [`reconcile`]: diffing an edited graph against its baseline and
//!   applying the writes
//! - [`editor`]: an editing session that tracks the baseline across saves
//! - [`agency`]: the high-level API used by front ends
//! - [`display`]: markdown rendering for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{AgencyBuilder, params::CreateItinerary};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agency = AgencyBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let header = agency
//!     .create_itinerary(&CreateItinerary {
//!         title: "Bali Highlights".to_string(),
//!         description: None,
//!     })
//!     .await?;
//!
//! let mut editor = agency.open_editor(&header.id).await?;
//! let day = editor.graph_mut().add_day();
//! let item = editor.graph_mut().add_item(day)?;
//! editor
//!     .graph_mut()
//!     .set_item_activities(day, &item, vec!["act-uluwatu".to_string()])?;
//!
//! let report = agency.save_editor(&mut editor).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod agency;
pub mod codec;
pub mod db;
pub mod display;
pub mod editor;
pub mod error;
pub mod graph;
pub mod loader;
pub mod models;
pub mod params;
pub mod reconcile;
pub mod store;

// Re-export commonly used types
pub use agency::{Agency, AgencyBuilder};
pub use display::{
    CreateResult, DeleteResult, ItineraryPreview, ItinerarySummaries, OperationStatus,
    UpdateResult,
};
pub use editor::ItineraryEditor;
pub use error::{Result, WaypointError};
pub use graph::ItineraryGraph;
pub use models::{
    Activity, Catalog, DayItem, DayPlan, Destination, EditorConfig, Hotel, HotelKind, ItemKind,
    ItineraryHeader, ItinerarySummary, NodeId, PriceSegment, TemplateSection,
};
pub use reconcile::{DeleteFailure, Reconciler, SaveReport};
pub use store::{Collection, DocumentStore, MemoryStore, SqliteStore};
