//! The template engine.
//!
//! [`Engine`] pairs a [`Catalog`] with the pattern operations. Every operation is
//! a pure function of its arguments and the catalog: no caching, no interior
//! mutability. An engine is `Send + Sync` and can be shared freely.
//!
//! # Substitution Rules
//!
//! For each `{name}` placeholder, left to right:
//!
//! | Case | Output |
//! |------|--------|
//! | `name` has a value in the metadata | the value |
//! | `name` is in the catalog, no value | empty string |
//! | `name` is unknown, no value | `{name}` unchanged |
//!
//! Every occurrence is replaced. Literal text and stray braces are copied
//! verbatim, and substituted values are never re-scanned.
//!
//! # Example
//!
//! ```rust
//! use renamekit_template::{Engine, Metadata};
//!
//! let engine = Engine::standard();
//! let meta = Metadata::new()
//!     .with("title", "Breaking Bad")
//!     .with("season", "S05")
//!     .with("episode", "E14");
//!
//! assert_eq!(
//!     engine.render("{title} - {season}{episode}", &meta),
//!     "Breaking Bad - S05E14",
//! );
//! assert_eq!(
//!     engine.used_names("{episode} {title} {episode} {nope}"),
//!     vec!["title", "episode"],
//! );
//! ```

use once_cell::sync::Lazy;

use crate::catalog::{Catalog, Variable};
use crate::metadata::Metadata;
use crate::pattern::{placeholders, segments, Segment};
use crate::validate::{self, Diagnostic, ValidationResult};

static STANDARD_ENGINE: Lazy<Engine> = Lazy::new(Engine::standard);

/// Renders and inspects rename patterns against an injected catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    /// Creates an engine over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        tracing::debug!(variables = catalog.len(), "template engine created");
        Self { catalog }
    }

    /// Creates an engine over [`Catalog::standard`].
    pub fn standard() -> Self {
        Self::new(Catalog::standard())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Substitutes `metadata` into `pattern`.
    ///
    /// Never fails. See the module docs for the substitution table.
    pub fn render(&self, pattern: &str, metadata: &Metadata) -> String {
        let mut output = String::with_capacity(pattern.len());

        for segment in segments(pattern) {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let name = placeholder.name();
                    if let Some(value) = metadata.get(name) {
                        output.push_str(value);
                    } else if !self.catalog.contains(name) {
                        tracing::trace!(name, "passing through unknown placeholder");
                        output.push_str(&pattern[placeholder.span()]);
                    }
                }
            }
        }

        output
    }

    /// Catalog variables referenced by `pattern`, each once, in catalog order.
    pub fn used_variables(&self, pattern: &str) -> Vec<&Variable> {
        let mut seen = vec![false; self.catalog.len()];
        for placeholder in placeholders(pattern) {
            if let Some(index) = self.catalog.position(placeholder.name()) {
                seen[index] = true;
            }
        }

        self.catalog
            .iter()
            .zip(seen)
            .filter_map(|(variable, used)| used.then_some(variable))
            .collect()
    }

    /// Names of [`used_variables`](Self::used_variables).
    pub fn used_names(&self, pattern: &str) -> Vec<&str> {
        self.used_variables(pattern)
            .into_iter()
            .map(Variable::name)
            .collect()
    }

    /// Checks brace pairing. Independent of the catalog.
    pub fn validate(&self, pattern: &str) -> ValidationResult {
        validate::validate(pattern)
    }

    /// Structural problems plus placeholders naming unknown variables.
    pub fn diagnose(&self, pattern: &str) -> Vec<Diagnostic> {
        validate::diagnose_with(pattern, &self.catalog)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Renders `pattern` with the standard catalog.
pub fn render(pattern: &str, metadata: &Metadata) -> String {
    STANDARD_ENGINE.render(pattern, metadata)
}

/// Standard-catalog variable names used by `pattern`, in catalog order.
pub fn used_variables(pattern: &str) -> Vec<&'static str> {
    STANDARD_ENGINE.used_names(pattern)
}

/// Lints `pattern` against the standard catalog.
pub fn diagnose(pattern: &str) -> Vec<Diagnostic> {
    STANDARD_ENGINE.diagnose(pattern)
}
