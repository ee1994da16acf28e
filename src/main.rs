mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::RustyDatApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

/// Viewer for sectioned DAT files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// DAT file to open at start-up.
    file: Option<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = AppState::default();
    if let Some(path) = &cli.file {
        state.open_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty DAT – Section Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(RustyDatApp::with_state(state)))),
    )
}
