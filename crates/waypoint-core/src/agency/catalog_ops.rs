//! Reference catalog and settings operations for the Agency.

use log::{debug, info};

use super::Agency;
use crate::{
    codec,
    error::Result,
    models::{Activity, Catalog, Destination, EditorConfig, Hotel, PriceSegment},
    params::{
        require_changes, require_text, validate_star_rating, AddActivity, AddDestination,
        AddHotel, AddPriceSegment, UpdateActivity, UpdateDestination, UpdateHotel,
        UpdatePriceSegment, UpdateSettings,
    },
    store::{Collection, Document, Fields, ListQuery, NewDocumentId},
};

/// Id of the single settings document.
pub const SETTINGS_DOCUMENT_ID: &str = "default";

impl Agency {
    pub async fn add_activity(&self, params: &AddActivity) -> Result<Activity> {
        let name = require_text("name", &params.name)?;
        let fields =
            codec::activity_fields(&name, params.description.as_deref().unwrap_or_default());
        let doc = self.create_entry(Collection::Activities, fields).await?;
        Ok(codec::activity_from_document(&doc))
    }

    pub async fn list_activities(&self) -> Result<Vec<Activity>> {
        let docs = self.list_all(Collection::Activities).await?;
        Ok(docs.iter().map(codec::activity_from_document).collect())
    }

    pub async fn update_activity(&self, params: &UpdateActivity) -> Result<Activity> {
        require_changes(&params.changes())?;
        let doc = self.store.get(Collection::Activities, &params.id).await?;
        let mut activity = codec::activity_from_document(&doc);
        if let Some(name) = &params.name {
            activity.name = require_text("name", name)?;
        }
        if let Some(description) = &params.description {
            activity.description = description.clone();
        }

        let fields = codec::activity_fields(&activity.name, &activity.description);
        let doc = self.update_entry(Collection::Activities, &params.id, fields).await?;
        Ok(codec::activity_from_document(&doc))
    }

    pub async fn delete_activity(&self, id: &str) -> Result<()> {
        self.delete_entry(Collection::Activities, id).await
    }

    pub async fn add_hotel(&self, params: &AddHotel) -> Result<Hotel> {
        let name = require_text("name", &params.name)?;
        let star_rating = validate_star_rating(params.star_rating)?;
        let fields = codec::hotel_fields(
            &name,
            params.kind,
            star_rating,
            params.description.as_deref().unwrap_or_default(),
        );
        let doc = self.create_entry(Collection::Hotels, fields).await?;
        codec::hotel_from_document(&doc)
    }

    pub async fn list_hotels(&self) -> Result<Vec<Hotel>> {
        let docs = self.list_all(Collection::Hotels).await?;
        docs.iter().map(codec::hotel_from_document).collect()
    }

    pub async fn update_hotel(&self, params: &UpdateHotel) -> Result<Hotel> {
        require_changes(&params.changes())?;
        let star_rating = validate_star_rating(params.star_rating)?;
        let doc = self.store.get(Collection::Hotels, &params.id).await?;
        let mut hotel = codec::hotel_from_document(&doc)?;
        if let Some(name) = &params.name {
            hotel.name = require_text("name", name)?;
        }
        if let Some(kind) = params.kind {
            hotel.kind = kind;
        }
        if star_rating.is_some() {
            hotel.star_rating = star_rating;
        }
        if let Some(description) = &params.description {
            hotel.description = description.clone();
        }

        let fields =
            codec::hotel_fields(&hotel.name, hotel.kind, hotel.star_rating, &hotel.description);
        let doc = self.update_entry(Collection::Hotels, &params.id, fields).await?;
        codec::hotel_from_document(&doc)
    }

    pub async fn delete_hotel(&self, id: &str) -> Result<()> {
        self.delete_entry(Collection::Hotels, id).await
    }

    pub async fn add_destination(&self, params: &AddDestination) -> Result<Destination> {
        let name = require_text("name", &params.name)?;
        let fields = codec::destination_fields(&name, &params.activity_ids);
        let doc = self.create_entry(Collection::Destinations, fields).await?;
        Ok(codec::destination_from_document(&doc))
    }

    pub async fn list_destinations(&self) -> Result<Vec<Destination>> {
        let docs = self.list_all(Collection::Destinations).await?;
        Ok(docs.iter().map(codec::destination_from_document).collect())
    }

    pub async fn update_destination(&self, params: &UpdateDestination) -> Result<Destination> {
        require_changes(&params.changes())?;
        let doc = self.store.get(Collection::Destinations, &params.id).await?;
        let mut destination = codec::destination_from_document(&doc);
        if let Some(name) = &params.name {
            destination.name = require_text("name", name)?;
        }
        if let Some(activity_ids) = &params.activity_ids {
            destination.activity_ids = activity_ids.clone();
        }

        let fields = codec::destination_fields(&destination.name, &destination.activity_ids);
        let doc = self.update_entry(Collection::Destinations, &params.id, fields).await?;
        Ok(codec::destination_from_document(&doc))
    }

    pub async fn delete_destination(&self, id: &str) -> Result<()> {
        self.delete_entry(Collection::Destinations, id).await
    }

    pub async fn add_price_segment(&self, params: &AddPriceSegment) -> Result<PriceSegment> {
        let name = require_text("name", &params.name)?;
        let doc = self
            .create_entry(Collection::PriceSegments, codec::price_segment_fields(&name))
            .await?;
        Ok(codec::price_segment_from_document(&doc))
    }

    pub async fn list_price_segments(&self) -> Result<Vec<PriceSegment>> {
        let docs = self.list_all(Collection::PriceSegments).await?;
        Ok(docs.iter().map(codec::price_segment_from_document).collect())
    }

    pub async fn update_price_segment(&self, params: &UpdatePriceSegment) -> Result<PriceSegment> {
        let name = require_text("name", &params.name)?;
        let doc = self
            .update_entry(
                Collection::PriceSegments,
                &params.id,
                codec::price_segment_fields(&name),
            )
            .await?;
        Ok(codec::price_segment_from_document(&doc))
    }

    /// Deletes a price segment. Itineraries that list it keep the id and
    /// previews skip it.
    pub async fn delete_price_segment(&self, id: &str) -> Result<()> {
        self.delete_entry(Collection::PriceSegments, id).await
    }

    /// Loads every reference entity, for resolving ids in previews.
    pub async fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog {
            activities: self.list_activities().await?,
            hotels: self.list_hotels().await?,
            destinations: self.list_destinations().await?,
            price_segments: self.list_price_segments().await?,
        })
    }

    /// Current settings; defaults when none have been saved yet.
    pub async fn settings(&self) -> Result<EditorConfig> {
        match self
            .store
            .get(Collection::Settings, SETTINGS_DOCUMENT_ID)
            .await
        {
            Ok(doc) => Ok(codec::settings_from_document(&doc)),
            Err(e) if e.is_not_found() => {
                debug!("No settings stored yet, using defaults");
                Ok(EditorConfig::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Applies a partial settings update and returns the result.
    pub async fn update_settings(&self, params: &UpdateSettings) -> Result<EditorConfig> {
        let mut config = self.settings().await?;
        params.apply(&mut config);
        let fields = codec::settings_fields(&config);

        match self
            .store
            .update(Collection::Settings, SETTINGS_DOCUMENT_ID, fields.clone())
            .await
        {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                self.store
                    .create(
                        Collection::Settings,
                        NewDocumentId::Given(SETTINGS_DOCUMENT_ID.to_string()),
                        fields,
                    )
                    .await?;
            }
            Err(e) => return Err(e),
        }

        info!("Updated settings");
        Ok(config)
    }

    async fn create_entry(
        &self,
        collection: Collection,
        fields: Fields,
    ) -> Result<Document> {
        let doc = self
            .store
            .create(collection, NewDocumentId::Unique, fields)
            .await?;
        info!("Added {collection}/{}", doc.id);
        Ok(doc)
    }

    async fn update_entry(
        &self,
        collection: Collection,
        id: &str,
        fields: Fields,
    ) -> Result<Document> {
        let doc = self.store.update(collection, id, fields).await?;
        info!("Updated {collection}/{id}");
        Ok(doc)
    }

    async fn delete_entry(&self, collection: Collection, id: &str) -> Result<()> {
        self.store.delete(collection, id).await?;
        info!("Deleted {collection}/{id}");
        Ok(())
    }

    async fn list_all(&self, collection: Collection) -> Result<Vec<Document>> {
        self.store.list(collection, &ListQuery::all()).await
    }
}
