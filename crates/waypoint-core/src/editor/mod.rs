//! Editing session for a single itinerary.
//!
//! [`ItineraryEditor`] holds two copies of the itinerary: the working copy
//! that edits are applied to, and the baseline that was last known to match
//! the store. Saving writes the difference and, only if every write
//! succeeded, makes the working copy the new baseline.
//!
//! ```rust
//! use waypoint_core::{editor::ItineraryEditor, models::EditorConfig, store::MemoryStore};
//!
//! # async fn example(store: &MemoryStore) -> waypoint_core::Result<()> {
//! let mut editor = ItineraryEditor::load(store, "itin-1", &EditorConfig::default()).await?;
//!
//! let day = editor.graph_mut().add_day();
//! editor.graph_mut().set_day_title(day, "Arrival in Ubud")?;
//!
//! let report = editor.save(store).await?;
//! assert_eq!(report.days_created, 1);
//! assert!(!editor.is_dirty());
//! # Ok(())
//! # }
//! ```

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use log::{debug, info};

use crate::{
    codec,
    error::{Result, WaypointError},
    graph::ItineraryGraph,
    loader::{fetch_itinerary, LoadedItinerary},
    models::{EditorConfig, ItineraryHeader, TemplateSection},
    reconcile::{cascade::delete_best_effort, Reconciler, SaveReport},
    store::{Collection, DocumentStore},
};

/// In-memory editing session over one itinerary.
#[derive(Debug, Clone)]
pub struct ItineraryEditor {
    header: ItineraryHeader,
    original_header: ItineraryHeader,
    current: ItineraryGraph,
    original: ItineraryGraph,
    /// Documents created by failed saves that the baseline does not list.
    unsaved: Vec<(Collection, String)>,
}

impl ItineraryEditor {
    /// Loads an itinerary and starts a session on it.
    pub async fn load<S>(store: &S, itinerary_id: &str, config: &EditorConfig) -> Result<Self>
    where
        S: DocumentStore + ?Sized,
    {
        let loaded = fetch_itinerary(store, itinerary_id).await?;
        Ok(Self::from_loaded(loaded, config))
    }

    /// Starts a session from an already fetched itinerary.
    ///
    /// Blank inclusion, exclusion and terms sections are filled from the
    /// config's templates. The baseline keeps the stored values, so the
    /// filled sections are written by the next save.
    pub fn from_loaded(loaded: LoadedItinerary, config: &EditorConfig) -> Self {
        let original_header = loaded.header;
        let mut header = original_header.clone();
        header.inclusion_html =
            EditorConfig::fill(header.inclusion_html, &config.inclusion_template_html);
        header.exclusion_html =
            EditorConfig::fill(header.exclusion_html, &config.exclusion_template_html);
        header.terms_html = EditorConfig::fill(header.terms_html, &config.terms_template_html);

        Self {
            header,
            original_header,
            current: loaded.graph.clone(),
            original: loaded.graph,
            unsaved: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.header.id
    }

    pub fn header(&self) -> &ItineraryHeader {
        &self.header
    }

    /// The working copy.
    pub fn graph(&self) -> &ItineraryGraph {
        &self.current
    }

    /// Mutable access to the working copy for structural and field edits.
    pub fn graph_mut(&mut self) -> &mut ItineraryGraph {
        &mut self.current
    }

    /// The graph as of the last load or successful save.
    pub fn baseline(&self) -> &ItineraryGraph {
        &self.original
    }

    /// True if the header or the graph differs from the baseline, or a
    /// failed save left documents behind.
    pub fn is_dirty(&self) -> bool {
        self.header_changed() || self.current != self.original || !self.unsaved.is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.header.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.header.description = description.into();
    }

    pub fn set_destinations(&mut self, destination_ids: Vec<String>) {
        self.header.destination_ids = destination_ids;
    }

    pub fn set_price_segments(&mut self, price_segment_ids: Vec<String>) {
        self.header.price_segment_ids = price_segment_ids;
    }

    pub fn set_banner_url(&mut self, banner_url: impl Into<String>) {
        self.header.banner_url = banner_url.into();
    }

    pub fn set_inclusion_html(&mut self, html: impl Into<String>) {
        self.header.inclusion_html = Some(html.into());
    }

    pub fn set_exclusion_html(&mut self, html: impl Into<String>) {
        self.header.exclusion_html = Some(html.into());
    }

    pub fn set_terms_html(&mut self, html: impl Into<String>) {
        self.header.terms_html = Some(html.into());
    }

    /// Replaces one section with its settings template, discarding the
    /// itinerary's own text.
    pub fn use_template(&mut self, section: TemplateSection, config: &EditorConfig) {
        let html = config.template(section).to_string();
        match section {
            TemplateSection::Inclusion => self.set_inclusion_html(html),
            TemplateSection::Exclusion => self.set_exclusion_html(html),
            TemplateSection::Terms => self.set_terms_html(html),
        }
    }

    /// Writes all pending changes to the store.
    ///
    /// The itinerary's scalar fields are written first, and only if they
    /// changed; then the graph is reconciled. Both baselines advance only
    /// when everything succeeded. On failure the working copy keeps any ids
    /// the store already assigned, and calling `save` again completes the
    /// remaining writes. Documents a failed save created that have since
    /// been removed from the working copy are deleted by the next
    /// successful save.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidInput` if the title is blank (nothing
    /// is written), or the first store error other than a tolerated delete
    /// failure.
    pub async fn save<S>(&mut self, store: &S) -> Result<SaveReport>
    where
        S: DocumentStore + ?Sized,
    {
        if self.header.title.trim().is_empty() {
            return Err(WaypointError::invalid_input("title")
                .with_reason("Itinerary title cannot be empty"));
        }

        let header_changed = self.header_changed();
        if header_changed {
            debug!("Updating itinerary {}", self.header.id);
            let doc = store
                .update(
                    Collection::Itineraries,
                    &self.header.id,
                    codec::header_fields(&self.header),
                )
                .await?;
            self.header.updated_at = doc.updated_at;
        }

        let outcome = match Reconciler::new(store)
            .reconcile(&self.original, &mut self.current, &self.header.id)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                self.remember_unsaved();
                return Err(e);
            }
        };

        self.original = outcome.baseline;
        self.original_header = self.header.clone();

        let mut report = outcome.report;
        report.header_updated = header_changed;
        self.delete_abandoned(store, &mut report).await;
        info!(
            "Saved itinerary {}: {} created, {} updated, {} deleted, {} delete failures",
            self.header.id,
            report.days_created + report.items_created,
            report.days_updated + report.items_updated,
            report.days_deleted + report.items_deleted,
            report.delete_failures.len()
        );
        Ok(report)
    }

    /// Records documents the working copy gained ids for during a failed
    /// save.
    fn remember_unsaved(&mut self) {
        let known = persisted_ids(&self.original);
        let created: Vec<(Collection, String)> = persisted_ids(&self.current)
            .into_iter()
            .filter(|entry| !known.contains(entry))
            .collect();
        for entry in created {
            if !self.unsaved.contains(&entry) {
                self.unsaved.push(entry);
            }
        }
    }

    /// Deletes documents from failed saves that the saved graph no longer
    /// references.
    async fn delete_abandoned<S>(&mut self, store: &S, report: &mut SaveReport)
    where
        S: DocumentStore + ?Sized,
    {
        if self.unsaved.is_empty() {
            return;
        }
        let live = persisted_ids(&self.current);
        for (collection, id) in std::mem::take(&mut self.unsaved) {
            if live.contains(&(collection, id.clone())) {
                continue;
            }
            debug!("Removing {collection}/{id} left by an earlier failed save");
            if delete_best_effort(store, collection, &id, &mut report.delete_failures).await {
                match collection {
                    Collection::DayPlans => report.days_deleted += 1,
                    _ => report.items_deleted += 1,
                }
            }
        }
    }

    fn header_changed(&self) -> bool {
        codec::header_fields(&self.header) != codec::header_fields(&self.original_header)
    }
}

/// Store ids of every day-plan and item in `graph`.
fn persisted_ids(graph: &ItineraryGraph) -> HashSet<(Collection, String)> {
    let mut ids = HashSet::new();
    for day in graph.days() {
        if let Some(id) = day.id.persisted_id() {
            ids.insert((Collection::DayPlans, id.to_string()));
        }
        for item in &day.items {
            if let Some(id) = item.id.persisted_id() {
                ids.insert((Collection::DayItems, id.to_string()));
            }
        }
    }
    ids
}
