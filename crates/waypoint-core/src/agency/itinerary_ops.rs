//! Itinerary operations for the Agency.

use log::{info, warn};

use super::Agency;
use crate::{
    codec,
    editor::ItineraryEditor,
    error::Result,
    models::{ItineraryHeader, ItinerarySummary},
    params::{require_text, CreateItinerary, ListItineraries},
    reconcile::{self, DeleteFailure, SaveReport},
    store::{Collection, ListQuery, NewDocumentId},
};

impl Agency {
    /// Creates an empty itinerary and returns its header.
    pub async fn create_itinerary(&self, params: &CreateItinerary) -> Result<ItineraryHeader> {
        let title = require_text("title", &params.title)?;

        let description = params.description.as_deref().unwrap_or_default();
        let fields = codec::new_itinerary_fields(&title, description);

        let doc = self
            .store
            .create(Collection::Itineraries, NewDocumentId::Unique, fields)
            .await?;
        info!("Created itinerary {}", doc.id);
        Ok(codec::header_from_document(&doc))
    }

    /// Lists itineraries, newest first.
    pub async fn list_itineraries(&self, params: &ListItineraries) -> Result<Vec<ItinerarySummary>> {
        let mut query = ListQuery::all().newest_first();
        if let Some(limit) = params.limit {
            query = query.limit(limit);
        }
        let docs = self.store.list(Collection::Itineraries, &query).await?;
        Ok(docs.iter().map(codec::summary_from_document).collect())
    }

    /// Deletes an itinerary together with its day-plans and items.
    ///
    /// Children are removed best-effort; the returned list names the ones
    /// that could not be deleted. Failing to delete the itinerary document
    /// itself is an error.
    pub async fn delete_itinerary(&self, itinerary_id: &str) -> Result<Vec<DeleteFailure>> {
        let failures = reconcile::delete_itinerary(self.store.as_ref(), itinerary_id).await?;
        if failures.is_empty() {
            info!("Deleted itinerary {itinerary_id}");
        } else {
            warn!(
                "Deleted itinerary {itinerary_id}, leaving {} orphaned documents",
                failures.len()
            );
        }
        Ok(failures)
    }

    /// Opens an editing session, seeded with the current settings templates.
    pub async fn open_editor(&self, itinerary_id: &str) -> Result<ItineraryEditor> {
        let config = self.settings().await?;
        ItineraryEditor::load(self.store.as_ref(), itinerary_id, &config).await
    }

    /// Saves an editing session against this agency's store.
    pub async fn save_editor(&self, editor: &mut ItineraryEditor) -> Result<SaveReport> {
        editor.save(self.store.as_ref()).await
    }
}
