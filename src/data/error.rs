//! Errors raised while taking in a DAT file.
//!
//! Malformed lines are never errors: they become metadata. Only the file
//! gate and text decoding can fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DatError {
    #[error("No file selected")]
    MissingFileName,

    #[error("Invalid file type '{name}'. Only .dat files are allowed.")]
    UnsupportedExtension { name: String },

    #[error("File doesn't exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("File is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("Error when reading a file: {0}")]
    Io(#[from] std::io::Error),
}
