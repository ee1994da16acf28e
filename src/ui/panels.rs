use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use rusty_dat::data::loader::DAT_EXTENSION;
use rusty_dat::data::model::Section;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – section list
// ---------------------------------------------------------------------------

/// Render the left panel: filter box plus one entry per section.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sections");
    ui.separator();

    let Some(document) = &state.document else {
        ui.label("No file loaded.");
        return;
    };

    ui.label(RichText::new(&document.name).strong());
    ui.label(format!(
        "{} sections, {} data points",
        document.len(),
        document.total_points()
    ));

    // Widgets mutate `state`, so collect actions and apply after drawing.
    let mut query = state.filter.query.clone();
    let mut toggled: Option<usize> = None;
    let mut show_all = false;
    let mut hide_all = false;

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Metadata filter");
        ui.text_edit_singleline(&mut query);
    });
    ui.horizontal(|ui: &mut Ui| {
        show_all = ui.small_button("All").clicked();
        hide_all = ui.small_button("None").clicked();
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, section) in document.sections.iter().enumerate() {
                let mut switched_on = state.is_switched_on(idx);
                // Switched on but excluded by the metadata query: grey it out.
                let color = if switched_on && !state.is_visible(idx) {
                    Color32::GRAY
                } else {
                    state.colors.color_for(idx)
                };

                ui.horizontal(|ui: &mut Ui| {
                    if ui.checkbox(&mut switched_on, "").changed() {
                        toggled = Some(idx);
                    }
                    let header = format!(
                        "Section {}  ({}/{})",
                        idx + 1,
                        section.sampled.len(),
                        section.point_count
                    );
                    egui::CollapsingHeader::new(RichText::new(header).strong().color(color))
                        .id_salt(("section", idx))
                        .default_open(false)
                        .show(ui, |ui: &mut Ui| {
                            ui.push_id(idx, |ui: &mut Ui| section_details(ui, section));
                        });
                });
            }
        });

    if query != state.filter.query {
        state.filter.query = query;
        state.refilter();
    }
    if let Some(idx) = toggled {
        state.toggle_section(idx);
    }
    if show_all {
        state.show_all();
    }
    if hide_all {
        state.hide_all();
    }
}

/// Metadata lines and the sampled-point table of one section.
fn section_details(ui: &mut Ui, section: &Section) {
    if section.metadata.is_empty() {
        ui.weak("No metadata");
    } else {
        for line in &section.metadata {
            ui.monospace(line.as_str());
        }
    }

    if section.sampled.is_empty() {
        ui.weak("No data points");
        return;
    }

    ui.add_space(4.0);
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(30.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder().at_least(80.0))
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("x");
            });
            header.col(|ui| {
                ui.strong("y");
            });
        })
        .body(|mut body| {
            for (i, p) in section.sampled.iter().enumerate() {
                body.row(16.0, |mut row| {
                    row.col(|ui| {
                        ui.label(i.to_string());
                    });
                    row.col(|ui| {
                        ui.label(p.x.to_string());
                    });
                    row.col(|ui| {
                        ui.label(p.y.to_string());
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.document.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export sampled CSV…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(doc) = &state.document {
            ui.label(format!(
                "{} sections loaded, {} visible",
                doc.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_markers, "Markers")
            .clicked()
        {
            state.show_markers = !state.show_markers;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open DAT file")
        .add_filter("DAT files", &[DAT_EXTENSION, "DAT"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export sampled points")
        .add_filter("CSV", &["csv"])
        .set_file_name("sampled.csv")
        .save_file();

    if let Some(path) = file {
        match state.export_csv(&path) {
            Ok(()) => {
                log::info!("Exported sampled points to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
