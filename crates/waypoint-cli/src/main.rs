//! Waypoint CLI Application
//!
//! Command-line itinerary editor on top of `waypoint-core`.

mod args;
mod cli;
mod handler;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handler::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::{params::ListItineraries, AgencyBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let agency = AgencyBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize agency")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started");

    let cli = Cli::new(agency, renderer);
    match command {
        Some(Itinerary { command }) => cli.handle_itinerary_command(command).await,
        Some(Day { command }) => cli.handle_day_command(command).await,
        Some(Item { command }) => cli.handle_item_command(command).await,
        Some(Activity { command }) => cli.handle_activity_command(command).await,
        Some(Hotel { command }) => cli.handle_hotel_command(command).await,
        Some(Destination { command }) => cli.handle_destination_command(command).await,
        Some(Segment { command }) => cli.handle_segment_command(command).await,
        Some(Settings { command }) => cli.handle_settings_command(command).await,
        None => cli.list_itineraries(&ListItineraries::default()).await,
    }
}
