//! Command handlers
//!
//! Every structural edit follows the same session: open the itinerary,
//! apply one change to the in-memory graph, save, and print what was
//! written. Nothing is written when the change itself is rejected.

use std::fmt::Display;

use anyhow::{bail, Context, Result};
use log::debug;
use waypoint_core::{
    display::OperationStatus,
    models::{ItemKind, NodeId},
    params::{Id, ListItineraries, UpdateSettings},
    Agency, ItineraryEditor, ItineraryGraph,
};

use crate::{
    cli::{
        ActivityCommands, DayCommands, DestinationCommands, EditItineraryArgs, HotelCommands,
        ItemCommands, ItemContentArgs, ItineraryCommands, SegmentCommands, SettingsCommands,
        TemplateSectionArg,
    },
    renderer::TerminalRenderer,
};

/// Dispatches parsed commands to the agency and renders the results.
pub struct Cli {
    agency: Agency,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(agency: Agency, renderer: TerminalRenderer) -> Self {
        Self { agency, renderer }
    }

    fn render(&self, content: impl Display) -> Result<()> {
        self.renderer.render(&content.to_string())
    }

    pub async fn list_itineraries(&self, params: &ListItineraries) -> Result<()> {
        let summaries = self
            .agency
            .list_itineraries_summary(params)
            .await
            .context("Failed to list itineraries")?;
        self.render(summaries)
    }

    pub async fn handle_itinerary_command(&self, command: ItineraryCommands) -> Result<()> {
        match command {
            ItineraryCommands::Create(args) => {
                let result = self
                    .agency
                    .create_itinerary_result(&args.into())
                    .await
                    .context("Failed to create itinerary")?;
                self.render(result)
            }
            ItineraryCommands::List(args) => self.list_itineraries(&args.into()).await,
            ItineraryCommands::Show(args) => {
                let params: Id = args.into();
                let preview = self
                    .agency
                    .preview_itinerary(&params)
                    .await
                    .with_context(|| format!("Failed to load itinerary {}", params.id))?;
                self.render(preview)
            }
            ItineraryCommands::Edit(args) => self.edit_itinerary(args).await,
            ItineraryCommands::Delete(args) => {
                let params: Id = args.into();
                let result = self
                    .agency
                    .delete_itinerary_result(&params)
                    .await
                    .with_context(|| format!("Failed to delete itinerary {}", params.id))?;
                if !result.failures.is_empty() {
                    self.render(OperationStatus::warning(format!(
                        "{} related documents could not be deleted",
                        result.failures.len()
                    )))?;
                }
                self.render(result)
            }
        }
    }

    async fn edit_itinerary(&self, args: EditItineraryArgs) -> Result<()> {
        let EditItineraryArgs {
            id,
            title,
            description,
            destinations,
            segments,
            banner_url,
            inclusion,
            exclusion,
            terms,
            use_template,
        } = args;

        let config = if use_template.is_empty() {
            None
        } else {
            Some(self.agency.settings().await.context("Failed to read settings")?)
        };

        self.edit(&id, move |editor| {
            let mut changed = Vec::new();
            if let Some(title) = title {
                editor.set_title(title);
                changed.push("title");
            }
            if let Some(description) = description {
                editor.set_description(description);
                changed.push("description");
            }
            if let Some(ids) = destinations {
                editor.set_destinations(clean_ids(ids));
                changed.push("destinations");
            }
            if let Some(ids) = segments {
                editor.set_price_segments(clean_ids(ids));
                changed.push("price segments");
            }
            if let Some(url) = banner_url {
                editor.set_banner_url(url);
                changed.push("banner");
            }
            if let Some(html) = inclusion {
                editor.set_inclusion_html(html);
                changed.push("inclusions");
            }
            if let Some(html) = exclusion {
                editor.set_exclusion_html(html);
                changed.push("exclusions");
            }
            if let Some(html) = terms {
                editor.set_terms_html(html);
                changed.push("terms");
            }
            if let Some(config) = &config {
                for section in use_template {
                    editor.use_template(section.into(), config);
                    changed.push(match section {
                        TemplateSectionArg::Inclusion => "inclusions from template",
                        TemplateSectionArg::Exclusion => "exclusions from template",
                        TemplateSectionArg::Terms => "terms from template",
                    });
                }
            }
            if changed.is_empty() {
                bail!("Nothing to edit. Pass at least one field flag, see `wp itinerary edit --help`");
            }
            Ok(format!("Edited {}", changed.join(", ")))
        })
        .await
    }

    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Add(args) => {
                self.edit(&args.itinerary_id, move |editor| {
                    let graph = editor.graph_mut();
                    let day = graph.add_day();
                    if let Some(title) = args.title {
                        graph.set_day_title(day, title)?;
                    }
                    if let Some(summary) = args.summary {
                        graph.set_day_summary(day, summary)?;
                    }
                    Ok(format!("Added day {}", day + 1))
                })
                .await
            }
            DayCommands::Remove(args) => {
                self.edit(&args.itinerary_id, move |editor| {
                    let graph = editor.graph_mut();
                    let day = day_index(graph, args.day)?;
                    let removed = graph.remove_day(day)?;
                    Ok(format!(
                        "Removed day {} with {} items",
                        args.day,
                        removed.items.len()
                    ))
                })
                .await
            }
            DayCommands::Move(args) => {
                self.edit(&args.itinerary_id, move |editor| {
                    let graph = editor.graph_mut();
                    let from = day_index(graph, args.from)?;
                    let to = day_index(graph, args.to)?;
                    graph.move_day(from, to)?;
                    Ok(format!("Moved day {} to position {}", args.from, args.to))
                })
                .await
            }
            DayCommands::Edit(args) => {
                if args.title.is_none() && args.summary.is_none() {
                    bail!("Nothing to edit. Pass --title or --summary");
                }
                self.edit(&args.day.itinerary_id, move |editor| {
                    let graph = editor.graph_mut();
                    let day = day_index(graph, args.day.day)?;
                    if let Some(title) = args.title {
                        graph.set_day_title(day, title)?;
                    }
                    if let Some(summary) = args.summary {
                        graph.set_day_summary(day, summary)?;
                    }
                    Ok(format!("Edited day {}", args.day.day))
                })
                .await
            }
        }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => {
                self.edit(&args.day.itinerary_id, move |editor| {
                    let graph = editor.graph_mut();
                    let day = day_index(graph, args.day.day)?;
                    let item = graph.add_item(day)?;
                    apply_item_content(graph, day, &item, args.content)?;
                    let position = graph.day(day).map_or(0, |d| d.items.len());
                    Ok(format!("Added item {position} to day {}", args.day.day))
                })
                .await
            }
            ItemCommands::Remove(args) => {
                self.edit(&args.day.itinerary_id, move |editor| {
                    let graph = editor.graph_mut();
                    let day = day_index(graph, args.day.day)?;
                    let item = item_id(graph, day, args.item)?;
                    graph.remove_item(day, &item)?;
                    Ok(format!("Removed item {} from day {}", args.item, args.day.day))
                })
                .await
            }
            ItemCommands::Move(args) => {
                self.edit(&args.day.itinerary_id, move |editor| {
                    let graph = editor.graph_mut();
                    let day = day_index(graph, args.day.day)?;
                    graph.move_item(day, args.from as usize - 1, args.to as usize - 1)?;
                    Ok(format!(
                        "Moved item {} to position {} in day {}",
                        args.from, args.to, args.day.day
                    ))
                })
                .await
            }
            ItemCommands::Edit(args) => {
                let target = args.item;
                self.edit(&target.day.itinerary_id, move |editor| {
                    let graph = editor.graph_mut();
                    let day = day_index(graph, target.day.day)?;
                    let item = item_id(graph, day, target.item)?;
                    apply_item_content(graph, day, &item, args.content)?;
                    Ok(format!("Edited item {} in day {}", target.item, target.day.day))
                })
                .await
            }
        }
    }

    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::Add(args) => {
                let result = self
                    .agency
                    .add_activity_result(&args.into())
                    .await
                    .context("Failed to add activity")?;
                self.render(result)
            }
            ActivityCommands::List => {
                let activities = self
                    .agency
                    .list_activities_result()
                    .await
                    .context("Failed to list activities")?;
                self.render(activities)
            }
            ActivityCommands::Update(args) => {
                let result = self
                    .agency
                    .update_activity_result(&args.into())
                    .await
                    .context("Failed to update activity")?;
                self.render(result)
            }
            ActivityCommands::Delete(args) => {
                let params: Id = args.into();
                let result = self
                    .agency
                    .delete_activity_result(&params)
                    .await
                    .with_context(|| format!("Failed to delete activity {}", params.id))?;
                self.render(result)
            }
        }
    }

    pub async fn handle_hotel_command(&self, command: HotelCommands) -> Result<()> {
        match command {
            HotelCommands::Add(args) => {
                let result = self
                    .agency
                    .add_hotel_result(&args.into())
                    .await
                    .context("Failed to add hotel")?;
                self.render(result)
            }
            HotelCommands::List => {
                let hotels = self
                    .agency
                    .list_hotels_result()
                    .await
                    .context("Failed to list hotels")?;
                self.render(hotels)
            }
            HotelCommands::Update(args) => {
                let result = self
                    .agency
                    .update_hotel_result(&args.into())
                    .await
                    .context("Failed to update hotel")?;
                self.render(result)
            }
            HotelCommands::Delete(args) => {
                let params: Id = args.into();
                let result = self
                    .agency
                    .delete_hotel_result(&params)
                    .await
                    .with_context(|| format!("Failed to delete hotel {}", params.id))?;
                self.render(result)
            }
        }
    }

    pub async fn handle_destination_command(&self, command: DestinationCommands) -> Result<()> {
        match command {
            DestinationCommands::Add(args) => {
                let result = self
                    .agency
                    .add_destination_result(&args.into())
                    .await
                    .context("Failed to add destination")?;
                self.render(result)
            }
            DestinationCommands::List => {
                let destinations = self
                    .agency
                    .list_destinations_result()
                    .await
                    .context("Failed to list destinations")?;
                self.render(destinations)
            }
            DestinationCommands::Update(args) => {
                let result = self
                    .agency
                    .update_destination_result(&args.into())
                    .await
                    .context("Failed to update destination")?;
                self.render(result)
            }
            DestinationCommands::Delete(args) => {
                let params: Id = args.into();
                let result = self
                    .agency
                    .delete_destination_result(&params)
                    .await
                    .with_context(|| format!("Failed to delete destination {}", params.id))?;
                self.render(result)
            }
        }
    }

    pub async fn handle_segment_command(&self, command: SegmentCommands) -> Result<()> {
        match command {
            SegmentCommands::Add(args) => {
                let result = self
                    .agency
                    .add_price_segment_result(&args.into())
                    .await
                    .context("Failed to add price segment")?;
                self.render(result)
            }
            SegmentCommands::List => {
                let segments = self
                    .agency
                    .list_price_segments_result()
                    .await
                    .context("Failed to list price segments")?;
                self.render(segments)
            }
            SegmentCommands::Update(args) => {
                let result = self
                    .agency
                    .update_price_segment_result(&args.into())
                    .await
                    .context("Failed to rename price segment")?;
                self.render(result)
            }
            SegmentCommands::Delete(args) => {
                let params: Id = args.into();
                let result = self
                    .agency
                    .delete_price_segment_result(&params)
                    .await
                    .with_context(|| format!("Failed to delete price segment {}", params.id))?;
                self.render(result)
            }
        }
    }

    pub async fn handle_settings_command(&self, command: SettingsCommands) -> Result<()> {
        match command {
            SettingsCommands::Show => {
                let settings = self
                    .agency
                    .settings()
                    .await
                    .context("Failed to read settings")?;
                self.render(settings)
            }
            SettingsCommands::Set(args) => {
                let params: UpdateSettings = args.into();
                if params.is_empty() {
                    bail!("No settings given, see `wp settings set --help`");
                }
                let result = self
                    .agency
                    .update_settings_result(&params)
                    .await
                    .context("Failed to update settings")?;
                self.render(result)
            }
        }
    }

    /// Runs one load, edit, save session against an itinerary.
    ///
    /// `edit` returns the confirmation message shown above the save report.
    /// When it fails the session is dropped without touching the store.
    async fn edit<F>(&self, itinerary_id: &str, edit: F) -> Result<()>
    where
        F: FnOnce(&mut ItineraryEditor) -> Result<String>,
    {
        let mut editor = self
            .agency
            .open_editor(itinerary_id)
            .await
            .with_context(|| format!("Failed to open itinerary {itinerary_id}"))?;

        let message = edit(&mut editor)?;
        debug!("Edit applied to {itinerary_id}: {message}");

        let report = self
            .agency
            .save_editor(&mut editor)
            .await
            .with_context(|| format!("Failed to save itinerary {itinerary_id}"))?;

        let status = if report.has_failures() {
            OperationStatus::warning(message)
        } else {
            OperationStatus::success(message)
        };
        self.render(status)?;
        self.render(report)
    }
}

/// Converts a 1-based day number into an index, checking it exists.
fn day_index(graph: &ItineraryGraph, day: u32) -> Result<usize> {
    let index = day as usize - 1;
    if index >= graph.len() {
        bail!("Day {day} does not exist. The itinerary has {} days", graph.len());
    }
    Ok(index)
}

/// Looks up the item at a 1-based position within a day.
fn item_id(graph: &ItineraryGraph, day: usize, position: u32) -> Result<NodeId> {
    let items = graph.day(day).map(|d| d.items.as_slice()).unwrap_or_default();
    match items.get(position as usize - 1) {
        Some(item) => Ok(item.id.clone()),
        None => bail!(
            "Item {position} does not exist. Day {} has {} items",
            day + 1,
            items.len()
        ),
    }
}

/// Applies `item add`/`item edit` flags to one item.
///
/// The kind is switched first so that content flags are checked against
/// the kind the item ends up with.
fn apply_item_content(
    graph: &mut ItineraryGraph,
    day: usize,
    item: &NodeId,
    content: ItemContentArgs,
) -> Result<()> {
    if let Some(kind) = content.kind {
        graph.update_item_kind(day, item, kind.into())?;
    }
    let kind = graph
        .item(day, item)
        .map(|i| i.kind)
        .context("Item disappeared while editing")?;

    if (content.title.is_some() || content.description.is_some()) && !kind.has_free_text() {
        bail!("Only note items have their own title and description. Use --kind note");
    }
    if content.activities.is_some() && kind != ItemKind::Activity {
        bail!("--activities only applies to activity items");
    }
    if content.hotels.is_some() && kind != ItemKind::Stay {
        bail!("--hotels only applies to stay items. Use --kind stay");
    }

    if let Some(title) = content.title {
        graph.set_item_title(day, item, title)?;
    }
    if let Some(description) = content.description {
        graph.set_item_description(day, item, description)?;
    }
    if let Some(ids) = content.activities {
        graph.set_item_activities(day, item, clean_ids(ids))?;
    }
    if let Some(ids) = content.hotels {
        graph.set_item_hotels(day, item, clean_ids(ids))?;
    }
    Ok(())
}

/// Trims comma-separated IDs and drops empty entries, so that an empty
/// flag value clears the list.
fn clean_ids(ids: Vec<String>) -> Vec<String> {
    ids.into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use waypoint_core::{DayPlan, ItineraryGraph};

    use super::*;
    use crate::cli::ItemKindArg;

    fn graph_with_items(count: usize) -> ItineraryGraph {
        let mut graph = ItineraryGraph::from_days(vec![DayPlan::new_local(1)]);
        for _ in 0..count {
            graph.add_item(0).unwrap();
        }
        graph
    }

    fn content() -> ItemContentArgs {
        ItemContentArgs {
            kind: None,
            title: None,
            description: None,
            activities: None,
            hotels: None,
        }
    }

    #[test]
    fn test_day_index_bounds() {
        let graph = graph_with_items(0);
        assert_eq!(day_index(&graph, 1).unwrap(), 0);
        let err = day_index(&graph, 2).unwrap_err();
        assert!(err.to_string().contains("Day 2 does not exist"));
    }

    #[test]
    fn test_item_id_by_position() {
        let graph = graph_with_items(2);
        let second = item_id(&graph, 0, 2).unwrap();
        assert_eq!(graph.days()[0].items[1].id, second);
        assert!(item_id(&graph, 0, 3).is_err());
    }

    #[test]
    fn test_clean_ids() {
        assert_eq!(
            clean_ids(vec![" a ".to_string(), String::new(), "b".to_string()]),
            vec!["a", "b"]
        );
        assert!(clean_ids(vec![String::new()]).is_empty());
    }

    #[test]
    fn test_apply_note_content() {
        let mut graph = graph_with_items(1);
        let item = graph.days()[0].items[0].id.clone();

        apply_item_content(
            &mut graph,
            0,
            &item,
            ItemContentArgs {
                kind: Some(ItemKindArg::Note),
                title: Some("Free evening".to_string()),
                ..content()
            },
        )
        .unwrap();

        let stored = graph.item(0, &item).unwrap();
        assert_eq!(stored.kind, ItemKind::Note);
        assert_eq!(stored.title, "Free evening");
    }

    #[test]
    fn test_apply_rejects_content_for_other_kind() {
        let mut graph = graph_with_items(1);
        let item = graph.days()[0].items[0].id.clone();

        let err = apply_item_content(
            &mut graph,
            0,
            &item,
            ItemContentArgs {
                hotels: Some(vec!["hotel-1".to_string()]),
                ..content()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("--hotels"));

        let err = apply_item_content(
            &mut graph,
            0,
            &item,
            ItemContentArgs {
                title: Some("Lunch".to_string()),
                ..content()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("note"));
    }
}
