use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DataPoint – one numeric line of a section
// ---------------------------------------------------------------------------

/// A single `(x, y)` pair read from a two-token numeric line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        DataPoint { x, y }
    }
}

impl From<DataPoint> for [f64; 2] {
    fn from(p: DataPoint) -> Self {
        [p.x, p.y]
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Section – one `&`-delimited chunk of a DAT file
// ---------------------------------------------------------------------------

/// The parsed form of one raw section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Up to [`SAMPLE_SIZE`](super::sampler::SAMPLE_SIZE) points spread
    /// across the section, in source order.
    pub sampled: Vec<DataPoint>,
    /// Every line that was not a data point, trimmed, in source order.
    pub metadata: Vec<String>,
    /// Number of data points found before sampling.
    pub point_count: usize,
}

impl Section {
    /// Whether sampling dropped any points from this section.
    pub fn is_downsampled(&self) -> bool {
        self.point_count > self.sampled.len()
    }

    /// Total number of lines classified for this section.
    pub fn line_count(&self) -> usize {
        self.point_count + self.metadata.len()
    }
}

// ---------------------------------------------------------------------------
// DatDocument – the complete loaded file
// ---------------------------------------------------------------------------

/// All sections of one DAT file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatDocument {
    /// File name the sections were read from.
    pub name: String,
    pub sections: Vec<Section>,
}

impl DatDocument {
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Self {
        DatDocument {
            name: name.into(),
            sections,
        }
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Data points across all sections, before sampling.
    pub fn total_points(&self) -> usize {
        self.sections.iter().map(|s| s.point_count).sum()
    }
}
