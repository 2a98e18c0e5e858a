//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its entries one after another and prints a short
//! notice when the collection is empty.

use std::{fmt, ops::Index};

use crate::models::{Activity, Destination, Hotel, ItinerarySummary, PriceSegment};

/// Newtype wrapper for displaying itinerary listings.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::ItinerarySummaries, models::ItinerarySummary};
/// use jiff::Timestamp;
///
/// let summary = ItinerarySummary {
///     id: "itin-1".to_string(),
///     title: "Flores Overland".to_string(),
///     description: String::new(),
///     day_count: 6,
///     destination_ids: vec![],
///     price_segment_ids: vec![],
///     created_at: Timestamp::now(),
/// };
///
/// let output = format!("{}", ItinerarySummaries(vec![summary]));
/// assert!(output.contains("Flores Overland (ID: itin-1) (6 days)"));
/// ```
pub struct ItinerarySummaries(pub Vec<ItinerarySummary>);

impl ItinerarySummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&ItinerarySummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItinerarySummary> {
        self.0.iter()
    }
}

impl Index<usize> for ItinerarySummaries {
    type Output = ItinerarySummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ItinerarySummaries {
    type Item = ItinerarySummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItinerarySummaries {
    type Item = &'a ItinerarySummary;
    type IntoIter = std::slice::Iter<'a, ItinerarySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ItinerarySummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No itineraries found.")
        } else {
            for itinerary in &self.0 {
                write!(f, "{itinerary}")?;
            }
            Ok(())
        }
    }
}

/// Writes a bulleted catalog listing, or `empty` when there is nothing.
fn fmt_entries<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    entries: &[T],
    empty: &str,
) -> fmt::Result {
    if entries.is_empty() {
        return writeln!(f, "{empty}");
    }
    for entry in entries {
        write!(f, "{entry}")?;
    }
    Ok(())
}

pub struct Activities(pub Vec<Activity>);

impl fmt::Display for Activities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(f, &self.0, "No activities found.")
    }
}

pub struct Hotels(pub Vec<Hotel>);

impl fmt::Display for Hotels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(f, &self.0, "No hotels found.")
    }
}

pub struct Destinations(pub Vec<Destination>);

impl fmt::Display for Destinations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(f, &self.0, "No destinations found.")
    }
}

pub struct PriceSegments(pub Vec<PriceSegment>);

impl fmt::Display for PriceSegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(f, &self.0, "No price segments found.")
    }
}
