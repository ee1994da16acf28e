use super::error::DatError;
use super::model::{DataPoint, Section};
use super::sampler::sample;
use super::splitter::split_sections;

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

/// What a single line of a section turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Point(DataPoint),
    /// The trimmed line, kept verbatim.
    Metadata(String),
}

/// Classify one line on its own text.
///
/// A line is a data point only when it has exactly two whitespace-separated
/// tokens and both parse as `f64`. Anything else, including a pair where
/// one side fails to parse, is kept whole as metadata.
pub fn classify_line(line: &str) -> Line {
    let line = line.trim();
    let mut tokens = line.split_whitespace();

    if let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) {
        if let (Ok(x), Ok(y)) = (a.parse::<f64>(), b.parse::<f64>()) {
            return Line::Point(DataPoint { x, y });
        }
    }
    Line::Metadata(line.to_string())
}

// ---------------------------------------------------------------------------
// Section / file parsing
// ---------------------------------------------------------------------------

/// Parse one raw section: trim, split into lines, classify, then sample.
///
/// Empty and whitespace-only sections produce an empty [`Section`]. Blank
/// lines inside a section are kept as empty metadata strings.
pub fn parse_section(raw: &str) -> Section {
    let body = raw.trim();
    if body.is_empty() {
        return Section::default();
    }

    let mut points = Vec::new();
    let mut metadata = Vec::new();
    for line in body.split('\n') {
        match classify_line(line) {
            Line::Point(p) => points.push(p),
            Line::Metadata(text) => metadata.push(text),
        }
    }

    Section {
        sampled: sample(&points),
        point_count: points.len(),
        metadata,
    }
}

/// Split decoded file content into sections and parse each one.
pub fn parse_content(content: &str) -> Vec<Section> {
    split_sections(content)
        .into_iter()
        .map(parse_section)
        .collect()
}

/// Decode raw bytes as UTF-8 and parse them. Invalid UTF-8 fails the whole
/// file.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<Section>, DatError> {
    let content = std::str::from_utf8(bytes)?;
    Ok(parse_content(content))
}
