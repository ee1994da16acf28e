use std::io::Read;
use std::path::Path;

use super::error::DatError;
use super::model::DatDocument;
use super::parser::parse_bytes;

/// Extension accepted by the loader, compared case-insensitively.
pub const DAT_EXTENSION: &str = "dat";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Whether `name` carries the `.dat` extension.
///
/// Only the text after the last `.` counts: `run.DAT` and `a.tar.dat` pass,
/// `dat` and `run.dat.txt` do not.
pub fn is_dat_file(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(DAT_EXTENSION))
}

/// Load and parse a DAT file from disk.
///
/// The file name and extension are checked before anything is read, so a
/// rejected file never touches the parser.
pub fn load_file(path: &Path) -> Result<DatDocument, DatError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    check_name(&name)?;

    if !path.exists() {
        log::warn!("DAT file not found: {}", path.display());
        return Err(DatError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path)?;
    load_reader(&name, file)
}

/// Parse a DAT file from an already-open stream. The whole stream is read
/// before parsing starts.
pub fn load_reader<R: Read>(name: &str, mut reader: R) -> Result<DatDocument, DatError> {
    check_name(name)?;

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let sections = parse_bytes(&bytes)?;

    let doc = DatDocument::new(name, sections);
    log::debug!(
        "Parsed {name}: {} sections, {} data points",
        doc.len(),
        doc.total_points()
    );
    Ok(doc)
}

fn check_name(name: &str) -> Result<(), DatError> {
    if name.is_empty() {
        return Err(DatError::MissingFileName);
    }
    if !is_dat_file(name) {
        log::warn!("Rejected file with unsupported extension: {name}");
        return Err(DatError::UnsupportedExtension {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn extension_check() {
        assert!(is_dat_file("run.dat"));
        assert!(is_dat_file("RUN.DAT"));
        assert!(is_dat_file("a.tar.dat"));
        assert!(!is_dat_file("dat"));
        assert!(!is_dat_file("run.dat.txt"));
        assert!(!is_dat_file("run.csv"));
        assert!(!is_dat_file(""));
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.dat");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "# header\n1 2\n3 4\n&\n5 6\n").unwrap();

        let doc = load_file(&path).unwrap();
        assert_eq!(doc.name, "scan.dat");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sections[0].metadata, vec!["# header"]);
        assert_eq!(doc.total_points(), 3);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.dat")).unwrap_err();
        assert!(matches!(err, DatError::NotFound { .. }));
    }

    #[test]
    fn wrong_extension_is_rejected_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DatError::UnsupportedExtension { .. }));
    }

    #[test]
    fn directory_named_like_dat_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folder.dat");
        std::fs::create_dir(&path).unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DatError::Io(_)), "got {err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_name_is_still_checked() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"caf\xff.dat"));
        std::fs::write(&path, "1 2\n").unwrap();

        let doc = load_file(&path).unwrap();
        assert_eq!(doc.name, "caf\u{FFFD}.dat");
        assert_eq!(doc.total_points(), 1);

        let other = dir.path().join(OsStr::from_bytes(b"caf\xff.txt"));
        let err = load_file(&other).unwrap_err();
        assert!(matches!(err, DatError::UnsupportedExtension { ref name } if name == "caf\u{FFFD}.txt"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = load_reader("", &b"1 2"[..]).unwrap_err();
        assert!(matches!(err, DatError::MissingFileName));
    }

    #[test]
    fn undecodable_stream_fails() {
        let err = load_reader("bad.dat", &[0xc3, 0x28][..]).unwrap_err();
        assert!(matches!(err, DatError::Decode(_)));
    }
}
