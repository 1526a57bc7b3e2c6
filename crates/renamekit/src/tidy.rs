//! Optional cleanup of rendered names.
//!
//! Rendering blank-fills missing variables, which leaves artifacts such as
//! `Dune () [1080p]` or `Title - `. [`tidy`] removes them. It is never applied by
//! the engine itself; callers opt in.

use once_cell::sync::Lazy;
use regex::Regex;

static EMPTY_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*\]|\(\s*\)|\{\s*\}").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_.]{2,}").expect("valid regex"));

const EDGE_CHARS: &[char] = &[' ', '.', '-', '_'];

/// Cleans up a rendered name.
///
/// In order: drops empty `[]`, `()` and `{}` groups, collapses whitespace runs
/// to one space, replaces runs of two or more `-`, `_`, `.` with `-`, and trims
/// spaces and separators from both ends. Groups go first so a separator left
/// dangling by a removed group is trimmed too: `Title - ()` becomes `Title`.
///
/// ```rust
/// use renamekit::tidy;
///
/// assert_eq!(tidy("Dune () [1080p]"), "Dune [1080p]");
/// assert_eq!(tidy("Game of Thrones - "), "Game of Thrones");
/// ```
pub fn tidy(rendered: &str) -> String {
    let text = EMPTY_GROUP.replace_all(rendered, "");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = SEPARATOR_RUN.replace_all(&text, "-");
    text.trim_matches(EDGE_CHARS).to_string()
}

/// Appends a file extension, with or without its leading dot.
///
/// An empty extension leaves the name unchanged.
pub fn with_extension(name: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", name, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod tidy_fn {
        use super::*;

        #[test]
        fn clean_names_unchanged() {
            assert_eq!(tidy("Dune (2021) [1080p]"), "Dune (2021) [1080p]");
            assert_eq!(tidy(""), "");
        }

        #[test]
        fn drops_empty_groups() {
            assert_eq!(tidy("X ( ) [] {}"), "X");
            assert_eq!(tidy("X [{quality}]"), "X [{quality}]");
        }

        #[test]
        fn collapses_whitespace() {
            assert_eq!(tidy("A   B\tC"), "A B C");
        }

        #[test]
        fn collapses_separator_runs() {
            assert_eq!(tidy("A..B__C-.-D"), "A-B-C-D");
        }

        #[test]
        fn empty_group_after_separator_trims_fully() {
            assert_eq!(tidy("Title - ()"), "Title");
            assert_eq!(tidy("Title - [ ] - {}"), "Title");
        }

        #[test]
        fn trims_edges() {
            assert_eq!(tidy(" - X - "), "X");
            assert_eq!(tidy("_.X._"), "X");
        }
    }

    #[test]
    fn extension_handling() {
        assert_eq!(with_extension("Dune", "mkv"), "Dune.mkv");
        assert_eq!(with_extension("Dune", ".mkv"), "Dune.mkv");
        assert_eq!(with_extension("Dune", ""), "Dune");
    }
}
