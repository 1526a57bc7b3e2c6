//! Pattern suggestions based on which metadata is available.

use renamekit_template::Metadata;

/// Upper bound on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 10;

const EPISODE_PATTERNS: &[&str] = &[
    "{title} - {season}{episode}",
    "{title} {season}{episode}",
    "{title} - {season}{episode} - {quality}",
    "{title} [{season}{episode}] {quality}",
];

const MOVIE_PATTERNS: &[&str] = &[
    "{title} ({year})",
    "{title} ({year}) [{quality}]",
    "{title} - {year} - {quality}",
    "{title} ({year}) {quality} {codec}",
];

const QUALITY_PATTERNS: &[&str] = &[
    "{title} [{quality}]",
    "{title} - {quality}",
    "{title} ({year}) [{quality}]",
];

/// Suggests patterns that make sense for `metadata`.
///
/// `{title}` is always offered. Episode patterns need non-empty `season` and
/// `episode`, movie patterns need `year`, and quality patterns need `quality`.
/// Duplicates are dropped keeping the first occurrence, and at most
/// [`MAX_SUGGESTIONS`] are returned.
///
/// ```rust
/// use renamekit::{suggest, Metadata};
///
/// let meta = Metadata::new().with("title", "Dune").with("year", "2021");
/// assert_eq!(suggest(&meta)[..2], ["{title}", "{title} ({year})"]);
/// ```
pub fn suggest(metadata: &Metadata) -> Vec<&'static str> {
    let mut candidates: Vec<&'static str> = vec!["{title}"];

    if metadata.has_value("season") && metadata.has_value("episode") {
        candidates.extend_from_slice(EPISODE_PATTERNS);
    }
    if metadata.has_value("year") {
        candidates.extend_from_slice(MOVIE_PATTERNS);
    }
    if metadata.has_value("quality") {
        candidates.extend_from_slice(QUALITY_PATTERNS);
    }

    let mut unique: Vec<&'static str> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }
    unique.truncate(MAX_SUGGESTIONS);
    unique
}
