//! Catalog entities referenced from itineraries.
//!
//! The editor never mutates these; it only resolves them by id for display.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Kind of accommodation a hotel entry describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HotelKind {
    #[default]
    Hotel,
    Homestay,
    Resort,
}

impl FromStr for HotelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hotel" => Ok(HotelKind::Hotel),
            "homestay" => Ok(HotelKind::Homestay),
            "resort" => Ok(HotelKind::Resort),
            _ => Err(format!("Invalid hotel type: {s}")),
        }
    }
}

impl HotelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelKind::Hotel => "Hotel",
            HotelKind::Homestay => "Homestay",
            HotelKind::Resort => "Resort",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub kind: HotelKind,
    pub star_rating: Option<u8>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    /// Activities typically offered at this destination
    #[serde(default)]
    pub activity_ids: Vec<String>,
}

/// Price band an itinerary is offered in (BUDGET, STANDARD, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceSegment {
    pub id: String,
    pub name: String,
}

/// All reference entities, loaded together for display lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub activities: Vec<Activity>,
    pub hotels: Vec<Hotel>,
    pub destinations: Vec<Destination>,
    pub price_segments: Vec<PriceSegment>,
}

impl Catalog {
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn hotel(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn price_segment(&self, id: &str) -> Option<&PriceSegment> {
        self.price_segments.iter().find(|s| s.id == id)
    }
}
