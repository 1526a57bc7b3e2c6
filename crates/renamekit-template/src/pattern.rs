//! Pattern tokenizer.
//!
//! Splits a rename pattern into literal text and `{name}` placeholders. A
//! placeholder is `{`, one or more characters that are neither `{` nor `}`, then
//! `}`. Anything else, including stray or unbalanced braces and `{}`, is literal
//! text.
//!
//! The tokenizer knows nothing about the catalog. Whether a placeholder names a
//! known variable is decided by the [`Engine`](crate::Engine).
//!
//! ```rust
//! use renamekit_template::pattern::{segments, Segment};
//!
//! let parts: Vec<Segment> = segments("{title} ({year}").collect();
//! assert_eq!(parts[0].as_placeholder().map(|p| p.name()), Some("title"));
//! assert_eq!(parts[1], Segment::Literal(" ("));
//! ```

use std::ops::Range;

/// A `{name}` occurrence in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    name: &'a str,
    span: Range<usize>,
}

impl<'a> Placeholder<'a> {
    /// The text between the braces, exactly as written.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Byte range of the whole placeholder, braces included.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Byte offset of the opening brace.
    pub fn start(&self) -> usize {
        self.span.start
    }
}

/// A piece of a tokenized pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied verbatim.
    Literal(&'a str),
    /// A `{name}` placeholder.
    Placeholder(Placeholder<'a>),
}

impl<'a> Segment<'a> {
    pub fn as_placeholder(&self) -> Option<&Placeholder<'a>> {
        match self {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        }
    }
}

/// Tokenizes `pattern` into segments, left to right.
pub fn segments(pattern: &str) -> Segments<'_> {
    Segments {
        input: pattern,
        pos: 0,
    }
}

/// Iterates only the placeholders of `pattern`.
pub fn placeholders(pattern: &str) -> impl Iterator<Item = Placeholder<'_>> {
    segments(pattern).filter_map(|segment| match segment {
        Segment::Placeholder(p) => Some(p),
        Segment::Literal(_) => None,
    })
}

/// Iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let remaining = &self.input[start..];

        let Some(open) = remaining.find('{') else {
            self.pos = self.input.len();
            return Some(Segment::Literal(remaining));
        };

        if open > 0 {
            self.pos += open;
            return Some(Segment::Literal(&remaining[..open]));
        }

        // At '{': the placeholder ends at the next brace if that brace is '}'.
        let body = &remaining[1..];
        match body.find(['{', '}']) {
            Some(end) if end > 0 && body.as_bytes()[end] == b'}' => {
                self.pos += end + 2;
                Some(Segment::Placeholder(Placeholder {
                    name: &body[..end],
                    span: start..self.pos,
                }))
            }
            _ => {
                self.pos += 1;
                Some(Segment::Literal(&remaining[..1]))
            }
        }
    }
}
