//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    models::{Activity, Destination, EditorConfig, Hotel, ItineraryHeader, PriceSegment},
    reconcile::{DeleteFailure, SaveReport},
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::CreateResult, models::PriceSegment};
///
/// let segment = PriceSegment {
///     id: "seg-1".to_string(),
///     name: "PREMIUM".to_string(),
/// };
/// let output = CreateResult::new(segment).to_string();
/// assert!(output.starts_with("Created price segment with ID: seg-1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<ItineraryHeader> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created itinerary with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

macro_rules! catalog_create_result {
    ($ty:ty, $label:literal) => {
        impl fmt::Display for CreateResult<$ty> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                writeln!(f, concat!("Created ", $label, " with ID: {}"), self.resource.id)?;
                writeln!(f)?;
                write!(f, "{}", self.resource)
            }
        }
    };
}

catalog_create_result!(Activity, "activity");
catalog_create_result!(Hotel, "hotel");
catalog_create_result!(Destination, "destination");
catalog_create_result!(PriceSegment, "price segment");

/// Wrapper type for displaying the result of update operations.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<EditorConfig> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated settings")?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

macro_rules! catalog_update_result {
    ($ty:ty, $label:literal) => {
        impl fmt::Display for UpdateResult<$ty> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                writeln!(f, concat!("Updated ", $label, " with ID: {}"), self.resource.id)?;
                if !self.changes.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "Changes made:")?;
                    for change in &self.changes {
                        writeln!(f, "- {change}")?;
                    }
                }
                writeln!(f)?;
                write!(f, "{}", self.resource)
            }
        }
    };
}

catalog_update_result!(Activity, "activity");
catalog_update_result!(Hotel, "hotel");
catalog_update_result!(Destination, "destination");
catalog_update_result!(PriceSegment, "price segment");

/// Outcome of deleting an itinerary with its children, or a catalog entry.
pub struct DeleteResult {
    /// What was deleted, such as "itinerary" or "hotel"
    pub label: &'static str,
    pub id: String,
    pub failures: Vec<DeleteFailure>,
}

impl DeleteResult {
    pub fn new(id: impl Into<String>, failures: Vec<DeleteFailure>) -> Self {
        Self {
            label: "itinerary",
            id: id.into(),
            failures,
        }
    }

    /// A catalog entry; these have no children that could fail.
    pub fn entry(label: &'static str, id: impl Into<String>) -> Self {
        Self {
            label,
            id: id.into(),
            failures: Vec::new(),
        }
    }
}

fn fmt_failures(f: &mut fmt::Formatter<'_>, failures: &[DeleteFailure]) -> fmt::Result {
    if failures.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "Could not delete {} documents:", failures.len())?;
    for failure in failures {
        writeln!(
            f,
            "- {}/{}: {}",
            failure.collection, failure.id, failure.reason
        )?;
    }
    Ok(())
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted {} with ID: {}", self.label, self.id)?;
        fmt_failures(f, &self.failures)
    }
}

impl fmt::Display for SaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            return writeln!(f, "No changes to save.");
        }

        writeln!(f, "Saved changes:")?;
        writeln!(f)?;
        if self.header_updated {
            writeln!(f, "- Itinerary details updated")?;
        }
        let counts = [
            ("Days created", self.days_created),
            ("Days updated", self.days_updated),
            ("Days deleted", self.days_deleted),
            ("Items created", self.items_created),
            ("Items updated", self.items_updated),
            ("Items deleted", self.items_deleted),
            ("Item lists rewritten", self.item_lists_rewritten),
        ];
        for (label, count) in counts.into_iter().filter(|(_, count)| *count > 0) {
            writeln!(f, "- {label}: {count}")?;
        }
        if self.day_list_rewritten {
            writeln!(f, "- Day order updated")?;
        }
        if self.adopted > 0 {
            writeln!(
                f,
                "- Recovered {} documents from an earlier attempt",
                self.adopted
            )?;
        }
        fmt_failures(f, &self.delete_failures)
    }
}
