//! Tag strings.
//!
//! Tags are persisted as one comma-delimited column and exposed as an ordered
//! list. Splitting trims every segment and drops empty ones, so
//! `split(join(split(s))) == split(s)` for any stored string.

/// Separator written between tags when joining.
pub const TAG_SEPARATOR: &str = ", ";

/// Split a stored tag string into trimmed, non-empty tags, keeping order.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join tags into the stored representation.
///
/// Each tag goes through [`split_tags`] first, so blank tags are skipped and a
/// tag holding a comma is written as the tags it will split back into.
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .flat_map(|tag| split_tags(tag.as_ref()))
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}
