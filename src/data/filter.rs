use std::collections::BTreeSet;

use super::model::{DatDocument, Section};

// ---------------------------------------------------------------------------
// Filter predicate: which sections are shown
// ---------------------------------------------------------------------------

/// Section visibility state for the viewer.
#[derive(Debug, Clone, Default)]
pub struct SectionFilter {
    /// Case-insensitive text that must appear in some metadata line.
    /// Empty means "no constraint".
    pub query: String,
    /// Sections switched off by the user.
    pub hidden: BTreeSet<usize>,
}

impl SectionFilter {
    /// Flip the visibility of one section.
    pub fn toggle(&mut self, idx: usize) {
        if !self.hidden.remove(&idx) {
            self.hidden.insert(idx);
        }
    }

    pub fn show_all(&mut self) {
        self.hidden.clear();
    }

    pub fn hide_all(&mut self, doc: &DatDocument) {
        self.hidden = (0..doc.len()).collect();
    }

    fn matches(&self, section: &Section) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        section
            .metadata
            .iter()
            .any(|line| line.to_lowercase().contains(&query))
    }
}

/// Return indices of sections that pass the filter.
///
/// A section passes when it is not hidden and, if a query is set, one of
/// its metadata lines contains the query.
pub fn visible_indices(doc: &DatDocument, filter: &SectionFilter) -> Vec<usize> {
    doc.sections
        .iter()
        .enumerate()
        .filter(|(i, s)| !filter.hidden.contains(i) && filter.matches(s))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> DatDocument {
        let section = |meta: &[&str]| Section {
            metadata: meta.iter().map(|s| s.to_string()).collect(),
            ..Section::default()
        };
        DatDocument::new(
            "f.dat",
            vec![
                section(&["Sample: Alpha", "T=300K"]),
                section(&[]),
                section(&["sample: beta"]),
            ],
        )
    }

    #[test]
    fn default_shows_everything() {
        assert_eq!(visible_indices(&doc(), &SectionFilter::default()), vec![0, 1, 2]);
    }

    #[test]
    fn query_is_case_insensitive_and_skips_bare_sections() {
        let filter = SectionFilter {
            query: " SAMPLE ".into(),
            ..Default::default()
        };
        assert_eq!(visible_indices(&doc(), &filter), vec![0, 2]);
    }

    #[test]
    fn toggle_hides_and_restores() {
        let d = doc();
        let mut filter = SectionFilter::default();
        filter.toggle(1);
        assert_eq!(visible_indices(&d, &filter), vec![0, 2]);
        filter.toggle(1);
        assert_eq!(visible_indices(&d, &filter), vec![0, 1, 2]);
        filter.hide_all(&d);
        assert!(visible_indices(&d, &filter).is_empty());
        filter.show_all();
        assert_eq!(visible_indices(&d, &filter).len(), 3);
    }
}
