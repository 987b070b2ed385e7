//! State Scatter - Interactive state health statistics viewer
//!
//! Loads a CSV of per-state poverty, age, and healthcare-access statistics
//! and displays them as an interactive scatter chart with switchable x-axis
//! metrics and hover tooltips.

mod charts;
mod data;
mod gui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use gui::ScatterApp;

/// Interactive scatter viewer for state health statistics.
#[derive(Parser, Debug)]
#[command(name = "state_scatter", version, about)]
struct Args {
    /// CSV file to load at startup
    data: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([820.0, 660.0])
            .with_title("State Scatter"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "State Scatter",
        options,
        Box::new(move |cc| Ok(Box::new(ScatterApp::new(cc, args.data)))),
    )
}
