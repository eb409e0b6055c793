use regex::Regex;
use std::sync::LazyLock;

/// Name shown when a URL carries no author slug.
pub const UNKNOWN_USER: &str = "Unknown User";

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"posts/([^/]+?)_").expect("slug pattern is valid"));

/// Derives a display name from the author slug of a post URL.
///
/// The slug is the text between `posts/` and the next `_`. It is split on
/// `-`, the first character of each piece is upper-cased, and the pieces are
/// joined with single spaces. The rest of each piece keeps its case.
///
/// Falls back to [`UNKNOWN_USER`] when the URL does not follow that layout.
///
/// ```
/// use ogpost::display_name;
///
/// let url = "https://www.linkedin.com/posts/gowthaman-thirunavukkarasu_rust-activity-7063737762654598144-x1y2";
/// assert_eq!(display_name(url), "Gowthaman Thirunavukkarasu");
/// assert_eq!(display_name("https://example.com/7063737762654598144"), "Unknown User");
/// ```
#[must_use]
pub fn display_name(url: &str) -> String {
    SLUG_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|slug| format_slug(slug.as_str()))
        .unwrap_or_else(|| UNKNOWN_USER.to_owned())
}

fn format_slug(slug: &str) -> String {
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
