//! Core constants and path helpers shared by the tree, the decoders and the sources.

/// Reserved basename of a category metadata item.
pub const CATEGORY_MARKER: &str = ".category.yml";

/// Identifier of the tree root.
pub const ROOT_ID: &str = "root";

/// Split an item name into its directory and filename.
///
/// The directory keeps no trailing separator; names without a `/` have an
/// empty directory.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('/') {
        Some(pos) => (&name[..pos], &name[pos + 1..]),
        None => ("", name),
    }
}

/// Iterate over the non-empty segments of a slash-delimited path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Split a directory path into its parent path and its last segment.
///
/// Returns `None` for a path with no segments (the root).
pub fn split_last_segment(dir: &str) -> Option<(&str, &str)> {
    let trimmed = dir.trim_end_matches('/');
    let last = segments(trimmed).last()?;
    let parent = &trimmed[..trimmed.len() - last.len()];
    Some((parent, last))
}

/// Extension of a filename: the substring starting at its last `.`.
pub fn extension(filename: &str) -> Option<&str> {
    filename.rfind('.').map(|pos| &filename[pos..])
}
