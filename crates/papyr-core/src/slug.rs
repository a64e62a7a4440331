//! URL slugs derived from titles.

/// Lowercase ASCII slug: alphanumerics kept, every other run of characters
/// collapsed into a single `-`, no leading or trailing dash.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// The given slug, or one derived from `title` when blank.
pub fn slug_or_title(slug: &str, title: &str) -> String {
    let slug = slug.trim();
    if slug.is_empty() {
        slugify(title)
    } else {
        slug.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify("Mocha Test Post"), "mocha-test-post");
        assert_eq!(slugify("  Rust & SeaORM: 2024!  "), "rust-seaorm-2024");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_explicit_slug_wins() {
        assert_eq!(slug_or_title(" custom ", "Title"), "custom");
        assert_eq!(slug_or_title("", "Hello World"), "hello-world");
    }
}
