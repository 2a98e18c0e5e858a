use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ActivityCommands, DayCommands, DestinationCommands, HotelCommands, ItemCommands,
    ItineraryCommands, SegmentCommands, SettingsCommands,
};

/// Itinerary editor for travel agency back offices
///
/// Waypoint keeps itineraries, their day-by-day plans and the shared
/// catalog of activities, hotels, destinations and price segments in a
/// local document store. Every editing command loads the itinerary,
/// applies one change and saves only what changed.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
///
/// Itinerary structure is edited with `itinerary`, `day` and `item`. The
/// remaining commands manage the reference catalog and agency settings.
/// Days and items are addressed by their 1-based position.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage itineraries
    #[command(alias = "i")]
    Itinerary {
        #[command(subcommand)]
        command: ItineraryCommands,
    },
    /// Manage the days of an itinerary
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Manage the items of a day
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Manage catalog activities
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Manage catalog hotels
    Hotel {
        #[command(subcommand)]
        command: HotelCommands,
    },
    /// Manage catalog destinations
    Destination {
        #[command(subcommand)]
        command: DestinationCommands,
    },
    /// Manage price segments
    Segment {
        #[command(subcommand)]
        command: SegmentCommands,
    },
    /// Show or change agency settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}
