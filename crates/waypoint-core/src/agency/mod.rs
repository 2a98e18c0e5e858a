//! High-level agency API.
//!
//! [`Agency`] is the entry point front ends use. It owns a shared handle to
//! a [`DocumentStore`] and exposes itinerary, catalog and settings
//! operations on top of it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │  DocumentStore  │
//! │  (display       │───▶│ (itinerary_ops, │───▶│ (SQLite or      │
//! │   wrappers)     │    │  catalog_ops)   │    │  in-memory)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Agency`] instances
//! - [`itinerary_ops`]: Creating, listing, deleting and editing itineraries
//! - [`catalog_ops`]: Reference catalog and settings
//! - [`handlers`]: The same operations returning display wrappers
//!
//! # Example
//!
//! ```rust
//! use waypoint_core::{AgencyBuilder, params::CreateItinerary};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agency = AgencyBuilder::new()
//!     .with_database_path(Some("agency.db"))
//!     .build()
//!     .await?;
//!
//! let itinerary = agency
//!     .create_itinerary(&CreateItinerary {
//!         title: "Lombok Escape".to_string(),
//!         description: None,
//!     })
//!     .await?;
//!
//! let mut editor = agency.open_editor(&itinerary.id).await?;
//! let day = editor.graph_mut().add_day();
//! editor.graph_mut().set_day_title(day, "Gili islands")?;
//! agency.save_editor(&mut editor).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod builder;
pub mod catalog_ops;
pub mod handlers;
pub mod itinerary_ops;


pub use builder::AgencyBuilder;

use crate::store::DocumentStore;

/// Main interface for managing itineraries and the reference catalog.
#[derive(Clone)]
pub struct Agency {
    pub(crate) store: Arc<dyn DocumentStore>,
}

impl Agency {
    pub(crate) fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// The underlying document store.
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
