use std::path::Path;

use anyhow::{Context, Result};

use crate::color::SectionColors;
use rusty_dat::data::export::write_csv;
use rusty_dat::data::filter::{visible_indices, SectionFilter};
use rusty_dat::data::loader::load_file;
use rusty_dat::data::model::DatDocument;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded document (None until the user opens a file).
    pub document: Option<DatDocument>,

    /// Section visibility selections.
    pub filter: SectionFilter,

    /// Indices of sections passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// One colour per section.
    pub colors: SectionColors,

    /// Draw point markers on top of the lines.
    pub show_markers: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            document: None,
            filter: SectionFilter::default(),
            visible_indices: Vec::new(),
            colors: SectionColors::default(),
            show_markers: true,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded document and reset filter and colours.
    pub fn set_document(&mut self, document: DatDocument) {
        self.filter = SectionFilter::default();
        self.visible_indices = (0..document.len()).collect();
        self.colors = SectionColors::new(document.len());
        self.document = Some(document);
        self.status_message = None;
    }

    /// Load a DAT file, reporting failure through `status_message`.
    pub fn open_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(document) => {
                log::info!(
                    "Loaded {} with {} sections ({} data points)",
                    document.name,
                    document.len(),
                    document.total_points()
                );
                self.set_document(document);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Write the sampled points of the current document as CSV.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let document = self.document.as_ref().context("no document loaded")?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        write_csv(document, file)
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(doc) = &self.document {
            self.visible_indices = visible_indices(doc, &self.filter);
        }
    }

    /// Flip one section's visibility.
    pub fn toggle_section(&mut self, idx: usize) {
        self.filter.toggle(idx);
        self.refilter();
    }

    pub fn show_all(&mut self) {
        self.filter.show_all();
        self.refilter();
    }

    pub fn hide_all(&mut self) {
        if let Some(doc) = &self.document {
            self.filter.hide_all(doc);
        }
        self.refilter();
    }

    /// Whether section `idx` passes the filter and is drawn.
    pub fn is_visible(&self, idx: usize) -> bool {
        self.visible_indices.contains(&idx)
    }

    /// Whether the user has section `idx` switched on, regardless of the
    /// metadata query.
    pub fn is_switched_on(&self, idx: usize) -> bool {
        !self.filter.hidden.contains(&idx)
    }
}
