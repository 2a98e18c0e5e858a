//! Display implementations for domain models.
//!
//! All output is markdown, rendered to the terminal by the CLI.

use std::fmt;

use super::{datetime::LocalDateTime, text::html_to_plain_text};
use crate::models::{
    Activity, Destination, EditorConfig, Hotel, HotelKind, ItemKind, ItineraryHeader,
    ItinerarySummary, PriceSegment,
};

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for HotelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ItineraryHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        let description = html_to_plain_text(&self.description);
        if !description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ItinerarySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = match self.day_count {
            0 => String::new(),
            1 => " (1 day)".to_string(),
            n => format!(" ({n} days)"),
        };

        writeln!(f, "## {} (ID: {}){days}", self.title, self.id)?;
        writeln!(f)?;

        let description = html_to_plain_text(&self.description);
        if !description.is_empty() {
            writeln!(f, "- **Description**: {}", description.replace('\n', " "))?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** (ID: {})", self.name, self.id)?;
        let description = html_to_plain_text(&self.description);
        if !description.is_empty() {
            write!(f, ": {}", description.replace('\n', " "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** (ID: {}) {}", self.name, self.id, self.kind)?;
        if let Some(stars) = self.star_rating {
            write!(f, ", {}", "★".repeat(usize::from(stars)))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** (ID: {})", self.name, self.id)?;
        if !self.activity_ids.is_empty() {
            write!(f, ", activities: {}", self.activity_ids.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PriceSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** (ID: {})", self.name, self.id)
    }
}

impl fmt::Display for EditorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_unset = |value: &str| {
            if value.is_empty() {
                "(not set)".to_string()
            } else {
                value.to_string()
            }
        };

        writeln!(f, "# Settings")?;
        writeln!(f)?;
        writeln!(f, "- Company: {}", or_unset(&self.company.name))?;
        writeln!(f, "- Logo URL: {}", or_unset(&self.company.logo_url))?;
        writeln!(f, "- Address: {}", or_unset(&self.company.address))?;
        writeln!(f, "- Phone: {}", or_unset(&self.company.phone))?;
        writeln!(f, "- Email: {}", or_unset(&self.company.email))?;

        for (title, html) in [
            ("Inclusion template", &self.inclusion_template_html),
            ("Exclusion template", &self.exclusion_template_html),
            ("Terms template", &self.terms_template_html),
        ] {
            writeln!(f)?;
            writeln!(f, "## {title}")?;
            writeln!(f)?;
            writeln!(f, "{}", or_unset(&html_to_plain_text(html)))?;
        }
        Ok(())
    }
}
