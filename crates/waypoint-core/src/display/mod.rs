//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results,
//! the composed [`ItineraryPreview`], and rich-text flattening. Everything
//! renders markdown, which the CLI passes to its terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ItinerarySummaries, Hotels, ...)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`preview`]: Customer-facing itinerary rendering
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`text`]: HTML to plain text conversion
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use waypoint_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Moved day 3 to position 1".to_string());
//! assert_eq!(status.to_string(), "Success: Moved day 3 to position 1\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod preview;
pub mod results;
pub mod status;
pub mod text;

// Re-export commonly used types for convenience
pub use collections::{Activities, Destinations, Hotels, ItinerarySummaries, PriceSegments};
pub use datetime::LocalDateTime;
pub use preview::{item_detail, item_label, ItineraryPreview};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, StatusLevel};
pub use text::html_to_plain_text;
