use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Sampled-points plot (central panel)
// ---------------------------------------------------------------------------

/// Render the sampled points of every visible section.
pub fn section_plot(ui: &mut Ui, state: &AppState) {
    let document = match &state.document {
        Some(doc) => doc,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a .dat file to view its sections  (File → Open…)");
            });
            return;
        }
    };

    Plot::new("section_plot")
        .legend(Legend::default())
        .x_axis_label("x")
        .y_axis_label("y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for &idx in &state.visible_indices {
                let section = &document.sections[idx];
                if section.sampled.is_empty() {
                    continue;
                }

                let color = state.colors.color_for(idx);
                let name = format!("Section {}", idx + 1);
                let coords: Vec<[f64; 2]> =
                    section.sampled.iter().map(|&p| <[f64; 2]>::from(p)).collect();

                let line = Line::new(PlotPoints::from(coords.clone()))
                    .name(&name)
                    .color(color)
                    .width(1.5);
                plot_ui.line(line);

                if state.show_markers {
                    let markers = Points::new(PlotPoints::from(coords))
                        .name(&name)
                        .color(color)
                        .radius(3.0);
                    plot_ui.points(markers);
                }
            }
        });
}
