//! Command-line argument definitions using clap
//!
//! Commands that map onto an agency operation wrap a core parameter struct
//! and convert with `From`, keeping clap derives out of `waypoint-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Agency
//! ```
//!
//! Structural edits (days and items) have no core parameter type. Their
//! argument structs are consumed by [`crate::handler::Cli`], which opens an
//! editing session, applies the edit to the graph and saves.

use clap::{Args, Subcommand, ValueEnum};
use waypoint_core::{
    models::{HotelKind, ItemKind, TemplateSection},
    params::*,
};

// ============================================================================
// Itineraries
// ============================================================================

/// Create a new itinerary
#[derive(Args)]
pub struct CreateItineraryArgs {
    /// Title of the itinerary
    pub title: String,
    /// Optional description, may contain HTML
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<CreateItineraryArgs> for CreateItinerary {
    fn from(val: CreateItineraryArgs) -> Self {
        CreateItinerary {
            title: val.title,
            description: val.description,
        }
    }
}

/// List itineraries, newest first
#[derive(Args)]
pub struct ListItinerariesArgs {
    /// Show at most this many itineraries
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl From<ListItinerariesArgs> for ListItineraries {
    fn from(val: ListItinerariesArgs) -> Self {
        ListItineraries { limit: val.limit }
    }
}

/// Identifies one itinerary by its document ID
#[derive(Args)]
pub struct ItineraryIdArgs {
    /// Document ID of the itinerary
    #[arg(help = "Document ID of the itinerary")]
    pub id: String,
}

impl From<ItineraryIdArgs> for Id {
    fn from(val: ItineraryIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit itinerary header fields
///
/// Only the flags given are changed. List flags replace the whole list and
/// accept comma-separated IDs; pass an empty string to clear a list.
#[derive(Args)]
pub struct EditItineraryArgs {
    /// Document ID of the itinerary
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Destination IDs, in display order
    #[arg(long, value_delimiter = ',')]
    pub destinations: Option<Vec<String>>,
    /// Price segment IDs
    #[arg(long, value_delimiter = ',')]
    pub segments: Option<Vec<String>>,
    #[arg(long)]
    pub banner_url: Option<String>,
    /// Inclusions section (HTML)
    #[arg(long)]
    pub inclusion: Option<String>,
    /// Exclusions section (HTML)
    #[arg(long)]
    pub exclusion: Option<String>,
    /// Terms and conditions section (HTML)
    #[arg(long)]
    pub terms: Option<String>,
    /// Replace a section with its settings template; repeatable
    #[arg(long, value_enum)]
    pub use_template: Vec<TemplateSectionArg>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TemplateSectionArg {
    Inclusion,
    Exclusion,
    Terms,
}

impl From<TemplateSectionArg> for TemplateSection {
    fn from(val: TemplateSectionArg) -> Self {
        match val {
            TemplateSectionArg::Inclusion => TemplateSection::Inclusion,
            TemplateSectionArg::Exclusion => TemplateSection::Exclusion,
            TemplateSectionArg::Terms => TemplateSection::Terms,
        }
    }
}

#[derive(Subcommand)]
pub enum ItineraryCommands {
    /// Create a new itinerary
    #[command(alias = "c")]
    Create(CreateItineraryArgs),
    /// List itineraries
    #[command(aliases = ["l", "ls"])]
    List(ListItinerariesArgs),
    /// Show the full itinerary preview
    #[command(alias = "s")]
    Show(ItineraryIdArgs),
    /// Edit header fields of an itinerary
    #[command(alias = "e")]
    Edit(EditItineraryArgs),
    /// Delete an itinerary with all of its days and items
    #[command(aliases = ["d", "rm"])]
    Delete(ItineraryIdArgs),
}

// ============================================================================
// Days
// ============================================================================

/// Append a day to an itinerary
#[derive(Args)]
pub struct AddDayArgs {
    /// Document ID of the itinerary
    pub itinerary_id: String,
    #[arg(short, long)]
    pub title: Option<String>,
    /// Short summary of the day (HTML allowed)
    #[arg(short, long)]
    pub summary: Option<String>,
}

/// Addresses one day by position
#[derive(Args)]
pub struct DayRefArgs {
    /// Document ID of the itinerary
    pub itinerary_id: String,
    /// Day number, starting at 1
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub day: u32,
}

/// Move a day to another position
#[derive(Args)]
pub struct MoveDayArgs {
    /// Document ID of the itinerary
    pub itinerary_id: String,
    /// Current day number
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub from: u32,
    /// New day number
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub to: u32,
}

/// Change a day's title or summary
#[derive(Args)]
pub struct EditDayArgs {
    #[command(flatten)]
    pub day: DayRefArgs,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub summary: Option<String>,
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Append a day
    #[command(alias = "a")]
    Add(AddDayArgs),
    /// Remove a day and all of its items
    #[command(aliases = ["r", "rm"])]
    Remove(DayRefArgs),
    /// Move a day to another position
    #[command(alias = "m")]
    Move(MoveDayArgs),
    /// Edit a day's title or summary
    #[command(alias = "e")]
    Edit(EditDayArgs),
}

// ============================================================================
// Items
// ============================================================================

/// Item kind as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ItemKindArg {
    /// Catalog activities
    Activity,
    /// Catalog hotels
    Stay,
    /// Free text
    Note,
}

impl From<ItemKindArg> for ItemKind {
    fn from(val: ItemKindArg) -> Self {
        match val {
            ItemKindArg::Activity => ItemKind::Activity,
            ItemKindArg::Stay => ItemKind::Stay,
            ItemKindArg::Note => ItemKind::Note,
        }
    }
}

/// Item content shared by `item add` and `item edit`
///
/// Titles and descriptions belong to notes. Activity and hotel IDs belong
/// to activity and stay items respectively.
#[derive(Args)]
pub struct ItemContentArgs {
    #[arg(short, long, value_enum)]
    pub kind: Option<ItemKindArg>,
    /// Note title
    #[arg(short, long)]
    pub title: Option<String>,
    /// Note description (HTML allowed)
    #[arg(short, long)]
    pub description: Option<String>,
    /// Comma-separated activity IDs
    #[arg(long, value_delimiter = ',')]
    pub activities: Option<Vec<String>>,
    /// Comma-separated hotel IDs
    #[arg(long, value_delimiter = ',')]
    pub hotels: Option<Vec<String>>,
}

/// Append an item to a day
#[derive(Args)]
pub struct AddItemArgs {
    #[command(flatten)]
    pub day: DayRefArgs,
    #[command(flatten)]
    pub content: ItemContentArgs,
}

/// Addresses one item by day and position
#[derive(Args)]
pub struct ItemRefArgs {
    #[command(flatten)]
    pub day: DayRefArgs,
    /// Item position within the day, starting at 1
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub item: u32,
}

/// Move an item within its day
#[derive(Args)]
pub struct MoveItemArgs {
    #[command(flatten)]
    pub day: DayRefArgs,
    /// Current item position
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub from: u32,
    /// New item position
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub to: u32,
}

/// Change an item's kind or content
///
/// Changing the kind clears the references and text that belong to the old
/// kind before the other flags are applied.
#[derive(Args)]
pub struct EditItemArgs {
    #[command(flatten)]
    pub item: ItemRefArgs,
    #[command(flatten)]
    pub content: ItemContentArgs,
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Append an item to a day
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Remove an item
    #[command(aliases = ["r", "rm"])]
    Remove(ItemRefArgs),
    /// Move an item within its day
    #[command(alias = "m")]
    Move(MoveItemArgs),
    /// Edit an item
    #[command(alias = "e")]
    Edit(EditItemArgs),
}

// ============================================================================
// Catalog
// ============================================================================

/// Add an activity to the catalog
#[derive(Args)]
pub struct AddActivityArgs {
    pub name: String,
    /// Description (HTML allowed)
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddActivityArgs> for AddActivity {
    fn from(val: AddActivityArgs) -> Self {
        AddActivity {
            name: val.name,
            description: val.description,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum HotelKindArg {
    Hotel,
    Homestay,
    Resort,
}

impl From<HotelKindArg> for HotelKind {
    fn from(val: HotelKindArg) -> Self {
        match val {
            HotelKindArg::Hotel => HotelKind::Hotel,
            HotelKindArg::Homestay => HotelKind::Homestay,
            HotelKindArg::Resort => HotelKind::Resort,
        }
    }
}

/// Change an activity; only the flags given are changed
#[derive(Args)]
pub struct UpdateActivityArgs {
    /// Document ID of the activity
    pub id: String,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<UpdateActivityArgs> for UpdateActivity {
    fn from(val: UpdateActivityArgs) -> Self {
        UpdateActivity {
            id: val.id,
            name: val.name,
            description: val.description,
        }
    }
}

/// Identifies one catalog entry by its document ID
#[derive(Args)]
pub struct CatalogIdArgs {
    pub id: String,
}

impl From<CatalogIdArgs> for Id {
    fn from(val: CatalogIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Add a hotel to the catalog
#[derive(Args)]
pub struct AddHotelArgs {
    pub name: String,
    #[arg(short, long, value_enum, default_value_t = HotelKindArg::Hotel)]
    pub kind: HotelKindArg,
    /// Star rating from 1 to 5
    #[arg(short, long)]
    pub stars: Option<u8>,
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddHotelArgs> for AddHotel {
    fn from(val: AddHotelArgs) -> Self {
        AddHotel {
            name: val.name,
            kind: val.kind.into(),
            star_rating: val.stars,
            description: val.description,
        }
    }
}

/// Change a hotel; only the flags given are changed
#[derive(Args)]
pub struct UpdateHotelArgs {
    /// Document ID of the hotel
    pub id: String,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long, value_enum)]
    pub kind: Option<HotelKindArg>,
    /// Star rating from 1 to 5
    #[arg(short, long)]
    pub stars: Option<u8>,
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<UpdateHotelArgs> for UpdateHotel {
    fn from(val: UpdateHotelArgs) -> Self {
        UpdateHotel {
            id: val.id,
            name: val.name,
            kind: val.kind.map(Into::into),
            star_rating: val.stars,
            description: val.description,
        }
    }
}

/// Add a destination to the catalog
#[derive(Args)]
pub struct AddDestinationArgs {
    pub name: String,
    /// Comma-separated IDs of activities available at this destination
    #[arg(long, value_delimiter = ',')]
    pub activities: Vec<String>,
}

impl From<AddDestinationArgs> for AddDestination {
    fn from(val: AddDestinationArgs) -> Self {
        AddDestination {
            name: val.name,
            activity_ids: val.activities,
        }
    }
}

/// Change a destination; only the flags given are changed
#[derive(Args)]
pub struct UpdateDestinationArgs {
    /// Document ID of the destination
    pub id: String,
    #[arg(short, long)]
    pub name: Option<String>,
    /// Comma-separated activity IDs, replacing the current list
    #[arg(long, value_delimiter = ',')]
    pub activities: Option<Vec<String>>,
}

impl From<UpdateDestinationArgs> for UpdateDestination {
    fn from(val: UpdateDestinationArgs) -> Self {
        UpdateDestination {
            id: val.id,
            name: val.name,
            activity_ids: val.activities.map(|ids| {
                ids.into_iter()
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect()
            }),
        }
    }
}

/// Add a price segment
#[derive(Args)]
pub struct AddSegmentArgs {
    /// Segment name, such as STANDARD or DELUXE
    pub name: String,
}

impl From<AddSegmentArgs> for AddPriceSegment {
    fn from(val: AddSegmentArgs) -> Self {
        AddPriceSegment { name: val.name }
    }
}

/// Rename a price segment
#[derive(Args)]
pub struct RenameSegmentArgs {
    /// Document ID of the price segment
    pub id: String,
    /// New segment name
    pub name: String,
}

impl From<RenameSegmentArgs> for UpdatePriceSegment {
    fn from(val: RenameSegmentArgs) -> Self {
        UpdatePriceSegment {
            id: val.id,
            name: val.name,
        }
    }
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Add an activity
    #[command(alias = "a")]
    Add(AddActivityArgs),
    /// List activities
    #[command(aliases = ["l", "ls"])]
    List,
    /// Change an activity
    #[command(alias = "u")]
    Update(UpdateActivityArgs),
    /// Delete an activity
    #[command(aliases = ["d", "rm"])]
    Delete(CatalogIdArgs),
}

#[derive(Subcommand)]
pub enum HotelCommands {
    /// Add a hotel
    #[command(alias = "a")]
    Add(AddHotelArgs),
    /// List hotels
    #[command(aliases = ["l", "ls"])]
    List,
    /// Change a hotel
    #[command(alias = "u")]
    Update(UpdateHotelArgs),
    /// Delete a hotel
    #[command(aliases = ["d", "rm"])]
    Delete(CatalogIdArgs),
}

#[derive(Subcommand)]
pub enum DestinationCommands {
    /// Add a destination
    #[command(alias = "a")]
    Add(AddDestinationArgs),
    /// List destinations
    #[command(aliases = ["l", "ls"])]
    List,
    /// Change a destination
    #[command(alias = "u")]
    Update(UpdateDestinationArgs),
    /// Delete a destination
    #[command(aliases = ["d", "rm"])]
    Delete(CatalogIdArgs),
}

#[derive(Subcommand)]
pub enum SegmentCommands {
    /// Add a price segment
    #[command(alias = "a")]
    Add(AddSegmentArgs),
    /// List price segments
    #[command(aliases = ["l", "ls"])]
    List,
    /// Rename a price segment
    #[command(alias = "u")]
    Update(RenameSegmentArgs),
    /// Delete a price segment
    #[command(aliases = ["d", "rm"])]
    Delete(CatalogIdArgs),
}

// ============================================================================
// Settings
// ============================================================================

/// Change agency settings
///
/// Company details appear on itinerary previews. Templates seed the
/// inclusion, exclusion and terms sections of itineraries that have none.
#[derive(Args)]
pub struct SetSettingsArgs {
    #[arg(long)]
    pub company_name: Option<String>,
    #[arg(long)]
    pub logo_url: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub inclusion_template: Option<String>,
    #[arg(long)]
    pub exclusion_template: Option<String>,
    #[arg(long)]
    pub terms_template: Option<String>,
}

impl From<SetSettingsArgs> for UpdateSettings {
    fn from(val: SetSettingsArgs) -> Self {
        UpdateSettings {
            company_name: val.company_name,
            logo_url: val.logo_url,
            address: val.address,
            phone: val.phone,
            email: val.email,
            inclusion_template_html: val.inclusion_template,
            exclusion_template_html: val.exclusion_template,
            terms_template_html: val.terms_template,
        }
    }
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    #[command(alias = "s")]
    Show,
    /// Change one or more settings
    Set(SetSettingsArgs),
}
