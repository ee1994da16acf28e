/// Character separating sections in a DAT file. It is never escaped.
pub const SECTION_DELIMITER: char = '&';

/// Split raw file content into section texts.
///
/// Produces one piece per delimiter plus one, keeping empty pieces from
/// leading, trailing or repeated delimiters. Pieces are returned untrimmed.
pub fn split_sections(content: &str) -> Vec<&str> {
    content.split(SECTION_DELIMITER).collect()
}
