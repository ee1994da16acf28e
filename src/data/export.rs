use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};

use super::model::DatDocument;

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Write every sampled point as a `section,x,y` row.
pub fn write_csv<W: Write>(doc: &DatDocument, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["section", "x", "y"])
        .context("writing CSV header")?;

    for (idx, section) in doc.sections.iter().enumerate() {
        for p in &section.sampled {
            wtr.serialize((idx, p.x, p.y))
                .with_context(|| format!("writing CSV row for section {idx}"))?;
        }
    }
    wtr.flush().context("flushing CSV output")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Pretty-printed JSON of the whole document.
pub fn to_json(doc: &DatDocument) -> Result<String> {
    serde_json::to_string_pretty(doc).context("serializing document to JSON")
}

// ---------------------------------------------------------------------------
// Plain text
// ---------------------------------------------------------------------------

/// Human-readable listing: per section, its sampled points then its
/// metadata lines.
pub fn to_text(doc: &DatDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {} sections", doc.name, doc.len());

    for (idx, section) in doc.sections.iter().enumerate() {
        let _ = writeln!(
            out,
            "\nSection {} ({} of {} points)",
            idx + 1,
            section.sampled.len(),
            section.point_count
        );
        for p in &section.sampled {
            let _ = writeln!(out, "  {p}");
        }
        if !section.metadata.is_empty() {
            let _ = writeln!(out, "  Metadata:");
            for line in &section.metadata {
                let _ = writeln!(out, "    {line}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DataPoint, Section};

    fn doc() -> DatDocument {
        DatDocument::new(
            "t.dat",
            vec![
                Section {
                    sampled: vec![DataPoint::new(1.0, 2.5), DataPoint::new(3.0, 4.0)],
                    metadata: vec!["label: test".into()],
                    point_count: 2,
                },
                Section::default(),
            ],
        )
    }

    #[test]
    fn csv_rows_per_sampled_point() {
        let mut buf = Vec::new();
        write_csv(&doc(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "section,x,y\n0,1.0,2.5\n0,3.0,4.0\n");
    }

    #[test]
    fn json_keeps_structure() {
        let json = to_json(&doc()).unwrap();
        let back: DatDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc());
    }

    #[test]
    fn text_lists_points_and_metadata() {
        let text = to_text(&doc());
        assert!(text.starts_with("t.dat: 2 sections"));
        assert!(text.contains("Section 1 (2 of 2 points)"));
        assert!(text.contains("  (1, 2.5)"));
        assert!(text.contains("    label: test"));
        assert!(text.contains("Section 2 (0 of 0 points)"));
    }
}
