//! Parsing and sampling of sectioned DAT files.
//!
//! A DAT file is plain UTF-8 text cut into sections by `&`. Each line of a
//! section is either an `x y` numeric pair or free-text metadata. See
//! [`data`] for the pipeline.

pub mod data;

pub use data::error::DatError;
pub use data::loader::{load_file, load_reader};
pub use data::model::{DatDocument, DataPoint, Section};
pub use data::parser::{parse_bytes, parse_content, parse_section};
