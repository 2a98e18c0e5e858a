//! Conversion between store documents and typed models.
//!
//! Documents arrive as loosely typed JSON maps. This module narrows them
//! into the models once, at the boundary, and builds the field payloads the
//! reconciler writes back. Relation fields are read leniently: arrays of
//! ids, arrays of expanded documents carrying `$id`, and legacy single-id
//! values are all accepted.

use log::debug;
use serde_json::{json, Value};

use crate::{
    error::{Result, WaypointError},
    models::{
        Activity, CompanyInfo, DayItem, DayPlan, Destination, EditorConfig, Hotel, HotelKind,
        ItemKind, ItineraryHeader, ItinerarySummary, NodeId, PriceSegment,
    },
    store::{Collection, Document, Fields},
};

/// Itinerary field holding the ordered day-plan ids.
pub const DAY_PLAN_IDS: &str = "days";
/// Day-plan field holding the ordered item ids.
pub const ITEM_IDS: &str = "items";

/// Extracts an ordered id list from a relation field.
pub fn relation_ids(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(entries)) => entries.iter().filter_map(relation_id).collect(),
        Some(single) => relation_id(single).into_iter().collect(),
        None => Vec::new(),
    }
}

fn relation_id(value: &Value) -> Option<String> {
    let id = match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map
            .get("$id")
            .or_else(|| map.get("id"))
            .and_then(Value::as_str),
        _ => None,
    }?;
    (!id.is_empty()).then(|| id.to_string())
}

fn text(doc: &Document, name: &str) -> String {
    doc.field(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_text(doc: &Document, name: &str) -> Option<String> {
    doc.field(name).and_then(Value::as_str).map(String::from)
}

fn string_list(doc: &Document, name: &str) -> Vec<String> {
    relation_ids(doc.field(name))
}

fn into_fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => Fields::new(),
    }
}

pub fn header_from_document(doc: &Document) -> ItineraryHeader {
    ItineraryHeader {
        id: doc.id.clone(),
        title: text(doc, "title"),
        description: text(doc, "description"),
        destination_ids: string_list(doc, "destinationIds"),
        price_segment_ids: string_list(doc, "priceSegmentIds"),
        banner_url: text(doc, "bannerUrl"),
        inclusion_html: optional_text(doc, "inclusionHtml"),
        exclusion_html: optional_text(doc, "exclusionHtml"),
        terms_html: optional_text(doc, "termsHtml"),
        created_at: doc.created_at,
        updated_at: doc.updated_at,
    }
}

/// Scalar payload of the itinerary document (everything except the day
/// list).
pub fn header_fields(header: &ItineraryHeader) -> Fields {
    into_fields(json!({
        "title": header.title,
        "description": header.description,
        "destinationIds": header.destination_ids,
        "priceSegmentIds": header.price_segment_ids,
        "bannerUrl": header.banner_url,
        "inclusionHtml": header.inclusion_html.clone().unwrap_or_default(),
        "exclusionHtml": header.exclusion_html.clone().unwrap_or_default(),
        "termsHtml": header.terms_html.clone().unwrap_or_default(),
    }))
}

/// Payload of a freshly created itinerary with no days.
pub fn new_itinerary_fields(title: &str, description: &str) -> Fields {
    into_fields(json!({
        "title": title,
        "description": description,
        "destinationIds": [],
        "priceSegmentIds": [],
        "bannerUrl": "",
        DAY_PLAN_IDS: [],
    }))
}

pub fn summary_from_document(doc: &Document) -> ItinerarySummary {
    ItinerarySummary {
        id: doc.id.clone(),
        title: text(doc, "title"),
        description: text(doc, "description"),
        day_count: relation_ids(doc.field(DAY_PLAN_IDS)).len(),
        destination_ids: string_list(doc, "destinationIds"),
        price_segment_ids: string_list(doc, "priceSegmentIds"),
        created_at: doc.created_at,
    }
}

/// Narrows a day-plan document; `items` must already be in stored order.
pub fn day_from_document(doc: &Document, items: Vec<DayItem>) -> Result<DayPlan> {
    let day_number = match doc.field("dayNumber") {
        None | Some(Value::Null) => 0,
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                WaypointError::invalid_document(
                    Collection::DayPlans,
                    &doc.id,
                    format!("dayNumber is not a positive integer: {value}"),
                )
            })?,
    };

    Ok(DayPlan {
        id: NodeId::persisted(&doc.id),
        day_number,
        title: text(doc, "title"),
        summary: text(doc, "summary"),
        items,
    })
}

/// Scalar payload of a day-plan placed at `day_number`.
pub fn day_fields(day_number: u32, day: &DayPlan) -> Fields {
    into_fields(json!({
        "dayNumber": day_number,
        "title": day.title,
        "summary": day.summary,
    }))
}

pub fn item_ids_fields(ids: &[String]) -> Fields {
    into_fields(json!({ ITEM_IDS: ids }))
}

pub fn day_plan_ids_fields(ids: &[String]) -> Fields {
    into_fields(json!({ DAY_PLAN_IDS: ids }))
}

pub fn item_from_document(doc: &Document) -> Result<DayItem> {
    let kind = match doc.field("type") {
        Some(Value::String(raw)) => raw.parse::<ItemKind>().unwrap_or_else(|_| {
            // Kinds added by newer clients are shown as free text
            debug!("Reading {}/{} of kind {raw} as a note", Collection::DayItems, doc.id);
            ItemKind::Note
        }),
        Some(_) => {
            return Err(WaypointError::invalid_document(
                Collection::DayItems,
                &doc.id,
                "item type is not a string",
            ))
        }
        None => {
            return Err(WaypointError::invalid_document(
                Collection::DayItems,
                &doc.id,
                "missing item type",
            ))
        }
    };

    let activity_ids = relation_ids(
        doc.field("refActivity")
            .filter(|v| !v.is_null())
            .or_else(|| doc.field("refActivityId")),
    );
    let hotel_ids = relation_ids(
        doc.field("refHotel")
            .filter(|v| !v.is_null())
            .or_else(|| doc.field("refHotelId")),
    );

    Ok(DayItem {
        id: NodeId::persisted(&doc.id),
        kind,
        title: text(doc, "title"),
        description: text(doc, "description"),
        activity_ids,
        hotel_ids,
    })
}

/// Persisted payload of an item.
///
/// Title and description are only meaningful for notes; activities and
/// stays take their display text from the referenced catalog entries. Only
/// the reference set matching the kind is written.
pub fn item_fields(item: &DayItem) -> Fields {
    let free_text = item.kind.has_free_text();
    let empty: &[String] = &[];
    into_fields(json!({
        "type": item.kind.as_str(),
        "title": if free_text { item.title.as_str() } else { "" },
        "description": if free_text { item.description.as_str() } else { "" },
        "refActivity": if item.kind == ItemKind::Activity { item.activity_ids.as_slice() } else { empty },
        "refHotel": if item.kind == ItemKind::Stay { item.hotel_ids.as_slice() } else { empty },
    }))
}

pub fn activity_from_document(doc: &Document) -> Activity {
    Activity {
        id: doc.id.clone(),
        name: text(doc, "name"),
        description: text(doc, "description"),
    }
}

pub fn activity_fields(name: &str, description: &str) -> Fields {
    into_fields(json!({ "name": name, "description": description }))
}

pub fn hotel_from_document(doc: &Document) -> Result<Hotel> {
    let kind = match doc.field("type").and_then(Value::as_str) {
        Some(raw) => raw
            .parse::<HotelKind>()
            .map_err(|reason| WaypointError::invalid_document(Collection::Hotels, &doc.id, reason))?,
        None => HotelKind::default(),
    };
    let star_rating = doc
        .field("starRating")
        .and_then(Value::as_u64)
        .and_then(|n| u8::try_from(n).ok());

    Ok(Hotel {
        id: doc.id.clone(),
        name: text(doc, "name"),
        kind,
        star_rating,
        description: text(doc, "description"),
    })
}

pub fn hotel_fields(name: &str, kind: HotelKind, star_rating: Option<u8>, description: &str) -> Fields {
    into_fields(json!({
        "name": name,
        "type": kind.as_str(),
        "starRating": star_rating,
        "description": description,
    }))
}

pub fn destination_from_document(doc: &Document) -> Destination {
    Destination {
        id: doc.id.clone(),
        name: text(doc, "name"),
        activity_ids: string_list(doc, "activityIds"),
    }
}

pub fn destination_fields(name: &str, activity_ids: &[String]) -> Fields {
    into_fields(json!({ "name": name, "activityIds": activity_ids }))
}

pub fn price_segment_from_document(doc: &Document) -> PriceSegment {
    PriceSegment {
        id: doc.id.clone(),
        name: text(doc, "name"),
    }
}

pub fn price_segment_fields(name: &str) -> Fields {
    into_fields(json!({ "name": name }))
}

pub fn settings_from_document(doc: &Document) -> EditorConfig {
    EditorConfig {
        company: CompanyInfo {
            name: text(doc, "companyName"),
            logo_url: text(doc, "logoUrl"),
            address: text(doc, "address"),
            phone: text(doc, "phone"),
            email: text(doc, "email"),
        },
        inclusion_template_html: text(doc, "inclusionTemplateHtml"),
        exclusion_template_html: text(doc, "exclusionTemplateHtml"),
        terms_template_html: text(doc, "termsTemplateHtml"),
    }
}

pub fn settings_fields(config: &EditorConfig) -> Fields {
    into_fields(json!({
        "companyName": config.company.name,
        "logoUrl": config.company.logo_url,
        "address": config.company.address,
        "phone": config.company.phone,
        "email": config.company.email,
        "inclusionTemplateHtml": config.inclusion_template_html,
        "exclusionTemplateHtml": config.exclusion_template_html,
        "termsTemplateHtml": config.terms_template_html,
    }))
}
