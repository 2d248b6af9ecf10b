//! String and path component helpers.
//!
//! Both `/` and `\` are treated as path separators regardless of platform,
//! so paths coming from either family split the same way.

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Split `s` on `delim`, skipping empty pieces.
pub fn split(s: &str, delim: char) -> Vec<String> {
    s.split(delim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `s` ends with `suffix`. An empty suffix always matches.
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Drop the last path component, keeping the trailing separator.
///
/// A path with no separator is returned unchanged.
pub fn strip_filename(path: &str) -> &str {
    match path.rfind(SEPARATORS) {
        Some(idx) => &path[..=idx],
        None => path,
    }
}

/// Keep only the last path component.
///
/// Paths ending with a separator have an empty last component.
pub fn strip_parent_dir(path: &str) -> &str {
    match path.rfind(SEPARATORS) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
