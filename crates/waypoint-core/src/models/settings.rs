//! Agency-wide settings handed to the editor at construction.

use serde::{Deserialize, Serialize};

/// Company details printed on itinerary previews.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompanyInfo {
    pub name: String,
    pub logo_url: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Explicit editor configuration.
///
/// The templates seed an itinerary's inclusion, exclusion and terms
/// sections when the itinerary has none of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    pub company: CompanyInfo,
    pub inclusion_template_html: String,
    pub exclusion_template_html: String,
    pub terms_template_html: String,
}

/// Itinerary sections that have a settings template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateSection {
    Inclusion,
    Exclusion,
    Terms,
}

impl EditorConfig {
    pub fn template(&self, section: TemplateSection) -> &str {
        match section {
            TemplateSection::Inclusion => &self.inclusion_template_html,
            TemplateSection::Exclusion => &self.exclusion_template_html,
            TemplateSection::Terms => &self.terms_template_html,
        }
    }

    /// Returns `value` unless it is missing or blank, in which case the
    /// template is used.
    pub(crate) fn fill(value: Option<String>, template: &str) -> Option<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Some(v),
            _ if !template.trim().is_empty() => Some(template.to_string()),
            other => other,
        }
    }
}
