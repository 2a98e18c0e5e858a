//! Parameter structures for agency operations.
//!
//! These are plain structs with no framework derives so that every front
//! end can build them from its own argument types. The CLI, for instance,
//! wraps them in clap `Args` structs and converts with `From`.
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct AddActivityArgs {
//!     pub name: String,
//!     #[arg(short, long)]
//!     pub description: Option<String>,
//! }
//!
//! impl From<AddActivityArgs> for AddActivity {
//!     fn from(args: AddActivityArgs) -> Self {
//!         AddActivity { name: args.name, description: args.description }
//!     }
//! }
//! ```

use crate::{
    error::{Result, WaypointError},
    models::{EditorConfig, HotelKind},
};

/// Parameters for creating a new itinerary.
#[derive(Debug, Clone)]
pub struct CreateItinerary {
    pub title: String,
    pub description: Option<String>,
}

/// Identifies a single itinerary or catalog entry.
#[derive(Debug, Clone)]
pub struct Id {
    pub id: String,
}

/// Parameters for listing itineraries, newest first.
#[derive(Debug, Clone, Default)]
pub struct ListItineraries {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct AddActivity {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddHotel {
    pub name: String,
    pub kind: HotelKind,
    /// 1 to 5 stars
    pub star_rating: Option<u8>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddDestination {
    pub name: String,
    pub activity_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AddPriceSegment {
    pub name: String,
}

/// Partial update of a catalog activity; `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct UpdateActivity {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateActivity {
    /// Names of the fields this update sets.
    pub fn changes(&self) -> Vec<&'static str> {
        set_fields([("name", self.name.is_some()), ("description", self.description.is_some())])
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateHotel {
    pub id: String,
    pub name: Option<String>,
    pub kind: Option<HotelKind>,
    pub star_rating: Option<u8>,
    pub description: Option<String>,
}

impl UpdateHotel {
    pub fn changes(&self) -> Vec<&'static str> {
        set_fields([
            ("name", self.name.is_some()),
            ("kind", self.kind.is_some()),
            ("star rating", self.star_rating.is_some()),
            ("description", self.description.is_some()),
        ])
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDestination {
    pub id: String,
    pub name: Option<String>,
    /// Replaces the whole activity list
    pub activity_ids: Option<Vec<String>>,
}

impl UpdateDestination {
    pub fn changes(&self) -> Vec<&'static str> {
        set_fields([("name", self.name.is_some()), ("activities", self.activity_ids.is_some())])
    }
}

/// Renames a price segment.
#[derive(Debug, Clone)]
pub struct UpdatePriceSegment {
    pub id: String,
    pub name: String,
}

fn set_fields<const N: usize>(fields: [(&'static str, bool); N]) -> Vec<&'static str> {
    fields
        .into_iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| name)
        .collect()
}

/// Partial update of the agency settings; `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettings {
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub inclusion_template_html: Option<String>,
    pub exclusion_template_html: Option<String>,
    pub terms_template_html: Option<String>,
}

impl UpdateSettings {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.logo_url.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.inclusion_template_html.is_none()
            && self.exclusion_template_html.is_none()
            && self.terms_template_html.is_none()
    }

    /// Applies the set fields to `config`.
    pub fn apply(&self, config: &mut EditorConfig) {
        let targets = [
            (&self.company_name, &mut config.company.name),
            (&self.logo_url, &mut config.company.logo_url),
            (&self.address, &mut config.company.address),
            (&self.phone, &mut config.company.phone),
            (&self.email, &mut config.company.email),
            (&self.inclusion_template_html, &mut config.inclusion_template_html),
            (&self.exclusion_template_html, &mut config.exclusion_template_html),
            (&self.terms_template_html, &mut config.terms_template_html),
        ];
        for (value, target) in targets {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
    }
}

/// Rejects blank names and titles.
pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WaypointError::invalid_input(field).with_reason(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_star_rating(rating: Option<u8>) -> Result<Option<u8>> {
    match rating {
        Some(stars) if !(1..=5).contains(&stars) => Err(WaypointError::invalid_input("star_rating")
            .with_reason(format!("Star rating must be between 1 and 5, got {stars}"))),
        other => Ok(other),
    }
}

/// Rejects updates that set nothing.
pub(crate) fn require_changes(changes: &[&str]) -> Result<()> {
    if changes.is_empty() {
        return Err(WaypointError::invalid_input("update").with_reason("Nothing to update"));
    }
    Ok(())
}
