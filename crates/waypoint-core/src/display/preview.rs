//! Composed, read-only rendering of an itinerary.

use std::fmt;

use super::{datetime::LocalDateTime, text::html_to_plain_text};
use crate::{
    graph::ItineraryGraph,
    models::{Catalog, CompanyInfo, DayItem, ItemKind, ItineraryHeader},
};

/// Everything needed to render an itinerary the way a customer sees it.
///
/// Catalog references are resolved by id; ids with no catalog entry are
/// skipped.
#[derive(Debug, Clone)]
pub struct ItineraryPreview {
    pub header: ItineraryHeader,
    pub graph: ItineraryGraph,
    pub catalog: Catalog,
    pub company: CompanyInfo,
}

/// Heading line for an item.
///
/// Activities and stays are named after what they reference, falling back
/// to the kind when nothing resolves. Notes use their own title.
pub fn item_label(item: &DayItem, catalog: &Catalog) -> String {
    let names: Vec<&str> = match item.kind {
        ItemKind::Activity => item
            .activity_ids
            .iter()
            .filter_map(|id| catalog.activity(id))
            .map(|a| a.name.as_str())
            .filter(|name| !name.is_empty())
            .collect(),
        ItemKind::Stay => item
            .hotel_ids
            .iter()
            .filter_map(|id| catalog.hotel(id))
            .map(|h| h.name.as_str())
            .filter(|name| !name.is_empty())
            .collect(),
        ItemKind::Note if item.title.trim().is_empty() => vec![item.kind.as_str()],
        ItemKind::Note => vec![item.title.as_str()],
    };

    if names.is_empty() {
        item.kind.as_str().to_string()
    } else {
        names.join(", ")
    }
}

/// Body text for an item, as plain text.
pub fn item_detail(item: &DayItem, catalog: &Catalog) -> String {
    let html = match item.kind {
        ItemKind::Activity => item
            .activity_ids
            .iter()
            .filter_map(|id| catalog.activity(id))
            .map(|a| a.description.as_str())
            .filter(|d| !d.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        ItemKind::Stay => item
            .hotel_ids
            .iter()
            .filter_map(|id| catalog.hotel(id))
            .map(|h| h.description.as_str())
            .filter(|d| !d.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        ItemKind::Note => item.description.clone(),
    };
    html_to_plain_text(&html)
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, html: Option<&str>) -> fmt::Result {
    let text = html.map(html_to_plain_text).unwrap_or_default();
    if text.is_empty() {
        return Ok(());
    }
    writeln!(f, "## {title}")?;
    writeln!(f)?;
    writeln!(f, "{text}")?;
    writeln!(f)
}

impl fmt::Display for ItineraryPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        writeln!(f, "# {}", header.title)?;
        writeln!(f)?;

        if !self.company.name.is_empty() {
            writeln!(f, "- Presented by: {}", self.company.name)?;
        }
        let destinations: Vec<&str> = header
            .destination_ids
            .iter()
            .filter_map(|id| self.catalog.destination(id))
            .map(|d| d.name.as_str())
            .collect();
        if !destinations.is_empty() {
            writeln!(f, "- Destinations: {}", destinations.join(", "))?;
        }
        let segments: Vec<&str> = header
            .price_segment_ids
            .iter()
            .filter_map(|id| self.catalog.price_segment(id))
            .map(|s| s.name.as_str())
            .collect();
        if !segments.is_empty() {
            writeln!(f, "- Price segments: {}", segments.join(", "))?;
        }
        writeln!(f, "- Days: {}", self.graph.len())?;
        writeln!(f, "- Updated: {}", LocalDateTime(&header.updated_at))?;

        let overview = html_to_plain_text(&header.description);
        if !overview.is_empty() {
            writeln!(f)?;
            writeln!(f, "{overview}")?;
        }
        writeln!(f)?;

        if self.graph.is_empty() {
            writeln!(f, "No days planned yet.")?;
            writeln!(f)?;
        }

        for day in self.graph.days() {
            if day.title.trim().is_empty() {
                writeln!(f, "## Day {}", day.day_number)?;
            } else {
                writeln!(f, "## Day {}: {}", day.day_number, day.title)?;
            }
            writeln!(f)?;

            let summary = html_to_plain_text(&day.summary);
            if !summary.is_empty() {
                writeln!(f, "{summary}")?;
                writeln!(f)?;
            }

            for item in &day.items {
                writeln!(
                    f,
                    "### {} ({})",
                    item_label(item, &self.catalog),
                    item.kind.as_str()
                )?;
                writeln!(f)?;
                let detail = item_detail(item, &self.catalog);
                if !detail.is_empty() {
                    writeln!(f, "{detail}")?;
                    writeln!(f)?;
                }
            }
        }

        write_section(f, "Inclusions", header.inclusion_html.as_deref())?;
        write_section(f, "Exclusions", header.exclusion_html.as_deref())?;
        write_section(f, "Terms & Conditions", header.terms_html.as_deref())?;

        let contact: Vec<&str> = [
            self.company.address.as_str(),
            self.company.phone.as_str(),
            self.company.email.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
        if !contact.is_empty() {
            writeln!(f, "---")?;
            writeln!(f)?;
            writeln!(f, "{}", contact.join(" | "))?;
        }

        Ok(())
    }
}
