//! Agency operations that return display wrapper types.

use super::Agency;
use crate::{
    display::{
        Activities, CreateResult, DeleteResult, Destinations, Hotels, ItineraryPreview,
        ItinerarySummaries, PriceSegments, UpdateResult,
    },
    editor::ItineraryEditor,
    error::Result,
    models::{Activity, Destination, EditorConfig, Hotel, ItineraryHeader, PriceSegment},
    params::{
        AddActivity, AddDestination, AddHotel, AddPriceSegment, CreateItinerary, Id,
        ListItineraries, UpdateActivity, UpdateDestination, UpdateHotel, UpdatePriceSegment,
        UpdateSettings,
    },
};

impl Agency {
    pub async fn list_itineraries_summary(
        &self,
        params: &ListItineraries,
    ) -> Result<ItinerarySummaries> {
        Ok(ItinerarySummaries(self.list_itineraries(params).await?))
    }

    pub async fn create_itinerary_result(
        &self,
        params: &CreateItinerary,
    ) -> Result<CreateResult<ItineraryHeader>> {
        Ok(CreateResult::new(self.create_itinerary(params).await?))
    }

    pub async fn delete_itinerary_result(&self, params: &Id) -> Result<DeleteResult> {
        let failures = self.delete_itinerary(&params.id).await?;
        Ok(DeleteResult::new(&params.id, failures))
    }

    /// Builds the customer-facing preview of an itinerary.
    ///
    /// Settings templates are applied the same way an editing session
    /// applies them, so the preview matches what a save would store.
    pub async fn preview_itinerary(&self, params: &Id) -> Result<ItineraryPreview> {
        let config = self.settings().await?;
        let editor = ItineraryEditor::load(self.store.as_ref(), &params.id, &config).await?;
        Ok(ItineraryPreview {
            header: editor.header().clone(),
            graph: editor.graph().clone(),
            catalog: self.catalog().await?,
            company: config.company,
        })
    }

    pub async fn add_activity_result(&self, params: &AddActivity) -> Result<CreateResult<Activity>> {
        Ok(CreateResult::new(self.add_activity(params).await?))
    }

    pub async fn list_activities_result(&self) -> Result<Activities> {
        Ok(Activities(self.list_activities().await?))
    }

    pub async fn update_activity_result(
        &self,
        params: &UpdateActivity,
    ) -> Result<UpdateResult<Activity>> {
        let activity = self.update_activity(params).await?;
        Ok(UpdateResult::with_changes(activity, describe_changes(&params.changes())))
    }

    pub async fn delete_activity_result(&self, params: &Id) -> Result<DeleteResult> {
        self.delete_activity(&params.id).await?;
        Ok(DeleteResult::entry("activity", &params.id))
    }

    pub async fn add_hotel_result(&self, params: &AddHotel) -> Result<CreateResult<Hotel>> {
        Ok(CreateResult::new(self.add_hotel(params).await?))
    }

    pub async fn list_hotels_result(&self) -> Result<Hotels> {
        Ok(Hotels(self.list_hotels().await?))
    }

    pub async fn update_hotel_result(&self, params: &UpdateHotel) -> Result<UpdateResult<Hotel>> {
        let hotel = self.update_hotel(params).await?;
        Ok(UpdateResult::with_changes(hotel, describe_changes(&params.changes())))
    }

    pub async fn delete_hotel_result(&self, params: &Id) -> Result<DeleteResult> {
        self.delete_hotel(&params.id).await?;
        Ok(DeleteResult::entry("hotel", &params.id))
    }

    pub async fn add_destination_result(
        &self,
        params: &AddDestination,
    ) -> Result<CreateResult<Destination>> {
        Ok(CreateResult::new(self.add_destination(params).await?))
    }

    pub async fn list_destinations_result(&self) -> Result<Destinations> {
        Ok(Destinations(self.list_destinations().await?))
    }

    pub async fn update_destination_result(
        &self,
        params: &UpdateDestination,
    ) -> Result<UpdateResult<Destination>> {
        let destination = self.update_destination(params).await?;
        Ok(UpdateResult::with_changes(destination, describe_changes(&params.changes())))
    }

    pub async fn delete_destination_result(&self, params: &Id) -> Result<DeleteResult> {
        self.delete_destination(&params.id).await?;
        Ok(DeleteResult::entry("destination", &params.id))
    }

    pub async fn add_price_segment_result(
        &self,
        params: &AddPriceSegment,
    ) -> Result<CreateResult<PriceSegment>> {
        Ok(CreateResult::new(self.add_price_segment(params).await?))
    }

    pub async fn list_price_segments_result(&self) -> Result<PriceSegments> {
        Ok(PriceSegments(self.list_price_segments().await?))
    }

    pub async fn update_price_segment_result(
        &self,
        params: &UpdatePriceSegment,
    ) -> Result<UpdateResult<PriceSegment>> {
        let segment = self.update_price_segment(params).await?;
        Ok(UpdateResult::with_changes(segment, describe_changes(&["name"])))
    }

    pub async fn delete_price_segment_result(&self, params: &Id) -> Result<DeleteResult> {
        self.delete_price_segment(&params.id).await?;
        Ok(DeleteResult::entry("price segment", &params.id))
    }

    /// Updates settings and lists which fields were touched.
    pub async fn update_settings_result(
        &self,
        params: &UpdateSettings,
    ) -> Result<UpdateResult<EditorConfig>> {
        let config = self.update_settings(params).await?;

        let changes = [
            ("company name", params.company_name.is_some()),
            ("logo URL", params.logo_url.is_some()),
            ("address", params.address.is_some()),
            ("phone", params.phone.is_some()),
            ("email", params.email.is_some()),
            ("inclusion template", params.inclusion_template_html.is_some()),
            ("exclusion template", params.exclusion_template_html.is_some()),
            ("terms template", params.terms_template_html.is_some()),
        ]
        .into_iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| name)
        .collect::<Vec<_>>();

        Ok(UpdateResult::with_changes(config, describe_changes(&changes)))
    }
}

fn describe_changes(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|name| format!("Updated {name}")).collect()
}
