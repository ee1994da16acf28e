use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use rusty_dat::data::export::{to_json, to_text, write_csv};
use rusty_dat::data::loader::load_file;
use rusty_dat::DatDocument;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

/// Parse a DAT file and print its sampled sections.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// DAT file to read.
    file: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// Write `doc` to `out` in the chosen format.
fn render<W: Write>(doc: &DatDocument, format: Format, mut out: W) -> Result<()> {
    match format {
        Format::Text => out.write_all(to_text(doc).as_bytes())?,
        Format::Json => writeln!(out, "{}", to_json(doc)?)?,
        Format::Csv => write_csv(doc, &mut out)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let doc = load_file(&args.file)
        .with_context(|| format!("loading {}", args.file.display()))?;
    log::debug!("Rendering {} as {:?}", doc.name, args.format);

    let stdout = std::io::stdout();
    render(&doc, args.format, stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_dat::load_reader;

    fn doc() -> DatDocument {
        load_reader("run.dat", &b"label: a\n1 2\n&3 4\n"[..]).unwrap()
    }

    fn rendered(format: Format) -> String {
        let mut buf = Vec::new();
        render(&doc(), format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn format_defaults_to_text() {
        let args = Args::try_parse_from(["dat-dump", "run.dat"]).unwrap();
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.file, PathBuf::from("run.dat"));
    }

    #[test]
    fn format_flag_selects_output() {
        let args = Args::try_parse_from(["dat-dump", "run.dat", "--format", "json"]).unwrap();
        assert_eq!(args.format, Format::Json);
        let args = Args::try_parse_from(["dat-dump", "-f", "csv", "run.dat"]).unwrap();
        assert_eq!(args.format, Format::Csv);
        assert!(Args::try_parse_from(["dat-dump", "run.dat", "--format", "xml"]).is_err());
    }

    #[test]
    fn text_output() {
        let text = rendered(Format::Text);
        assert!(text.starts_with("run.dat: 2 sections"));
        assert!(text.contains("    label: a"));
    }

    #[test]
    fn json_output_parses_back() {
        let json = rendered(Format::Json);
        let back: DatDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc());
    }

    #[test]
    fn csv_output() {
        assert_eq!(rendered(Format::Csv), "section,x,y\n0,1.0,2.0\n1,3.0,4.0\n");
    }
}
