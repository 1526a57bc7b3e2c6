//! Structural checks for patterns.
//!
//! [`validate`] reports whether every `{` is closed by a `}` before the next
//! `{`, and whether any `}` appears without an opening brace. It does not look
//! at variable names: `{whatever}` is well-formed.
//!
//! [`diagnose_with`] is the editor-facing lint. It combines the structural check
//! with a list of placeholders that name variables outside the catalog. Both
//! are advisory; rendering tolerates every pattern.

use std::fmt;

use crate::catalog::Catalog;
use crate::pattern::placeholders;

/// What kind of brace problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// A `{` with no `}` before the next `{` or the end of the pattern.
    UnclosedBrace,
    /// A `}` with no open `{`.
    UnopenedBrace,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::UnclosedBrace => write!(f, "unclosed '{{'"),
            MalformedKind::UnopenedBrace => write!(f, "unmatched '}}'"),
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ValidationResult {
    /// Every brace is paired.
    Valid,
    /// The first unpaired brace, at byte offset `position`.
    Malformed {
        position: usize,
        kind: MalformedKind,
    },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Byte offset of the offending brace, if malformed.
    pub fn position(&self) -> Option<usize> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Malformed { position, .. } => Some(*position),
        }
    }
}

/// Checks brace pairing in `pattern`.
///
/// ```rust
/// use renamekit_template::{validate, MalformedKind, ValidationResult};
///
/// assert_eq!(validate("{title}"), ValidationResult::Valid);
/// assert_eq!(
///     validate("{title"),
///     ValidationResult::Malformed { position: 0, kind: MalformedKind::UnclosedBrace },
/// );
/// ```
pub fn validate(pattern: &str) -> ValidationResult {
    let mut open: Option<usize> = None;

    for (index, ch) in pattern.char_indices() {
        match ch {
            '{' => {
                if let Some(position) = open {
                    return ValidationResult::Malformed {
                        position,
                        kind: MalformedKind::UnclosedBrace,
                    };
                }
                open = Some(index);
            }
            '}' => {
                if open.take().is_none() {
                    return ValidationResult::Malformed {
                        position: index,
                        kind: MalformedKind::UnopenedBrace,
                    };
                }
            }
            _ => {}
        }
    }

    match open {
        Some(position) => ValidationResult::Malformed {
            position,
            kind: MalformedKind::UnclosedBrace,
        },
        None => ValidationResult::Valid,
    }
}

/// An advisory finding about a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A brace is unpaired.
    Malformed {
        position: usize,
        kind: MalformedKind,
    },
    /// A placeholder names a variable the catalog does not know. It will be
    /// left as-is when rendering.
    UnknownVariable { name: String, position: usize },
}

impl Diagnostic {
    /// Byte offset the finding points at.
    pub fn position(&self) -> usize {
        match self {
            Diagnostic::Malformed { position, .. } | Diagnostic::UnknownVariable { position, .. } => {
                *position
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Malformed { position, kind } => write!(f, "{} at {}", kind, position),
            Diagnostic::UnknownVariable { name, position } => {
                write!(f, "unknown variable '{}' at {}", name, position)
            }
        }
    }
}

/// Lints `pattern` against `catalog`.
///
/// The structural problem, if any, comes first, followed by unknown
/// placeholders in pattern order.
pub fn diagnose_with(pattern: &str, catalog: &Catalog) -> Vec<Diagnostic> {
    let mut findings = Vec::new();

    if let ValidationResult::Malformed { position, kind } = validate(pattern) {
        findings.push(Diagnostic::Malformed { position, kind });
    }

    findings.extend(
        placeholders(pattern)
            .filter(|p| !catalog.contains(p.name()))
            .map(|p| Diagnostic::UnknownVariable {
                name: p.name().to_string(),
                position: p.start(),
            }),
    );

    findings
}
