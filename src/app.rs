use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RustyDatApp {
    pub state: AppState,
}

impl RustyDatApp {
    /// Start with `state` already populated (e.g. a file given on the
    /// command line).
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for RustyDatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: sections ----
        egui::SidePanel::left("section_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::section_plot(ui, &self.state);
        });
    }
}
