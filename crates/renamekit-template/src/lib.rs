//! Placeholder template engine for filename rename patterns.
//!
//! A rename pattern is plain text with `{name}` placeholders, such as
//! `{title} - {season}{episode}`. This crate renders patterns against a
//! caller-supplied [`Metadata`] record, reports which known variables a pattern
//! uses, and checks patterns for unpaired braces.
//!
//! ## Core Concepts
//!
//! - [`Catalog`]: the ordered set of recognized variable names, with help text
//! - [`Engine`]: the pattern operations bound to one catalog
//! - [`Metadata`]: values keyed by variable name
//! - [`ValidationResult`] / [`Diagnostic`]: advisory findings for editors
//!
//! ## Quick Start
//!
//! ```rust
//! use renamekit_template::{render, used_variables, validate, Metadata, ValidationResult};
//!
//! let meta = Metadata::new()
//!     .with("title", "Dune")
//!     .with("year", "2021")
//!     .with("quality", "1080p");
//!
//! let pattern = "{title} ({year}) [{quality}]";
//! assert_eq!(render(pattern, &meta), "Dune (2021) [1080p]");
//! assert_eq!(used_variables(pattern), vec!["title", "year", "quality"]);
//! assert_eq!(validate(pattern), ValidationResult::Valid);
//! ```
//!
//! ## Unknown Variables
//!
//! Unknown names are never an error. A placeholder whose name is outside the
//! catalog (and absent from the metadata) renders unchanged, so typos and
//! placeholders from a newer catalog stay visible instead of vanishing. Known
//! variables without a value render as the empty string.
//!
//! ## Custom Catalogs
//!
//! The free functions use [`Catalog::standard`]. Inject any other catalog
//! through [`Engine::new`]:
//!
//! ```rust
//! use renamekit_template::{Catalog, Engine, Metadata};
//!
//! let catalog = Catalog::from_yaml("variables:\n  - name: artist\n  - name: title\n").unwrap();
//! let engine = Engine::new(catalog);
//! let meta = Metadata::new().with("title", "Feeling Good");
//! assert_eq!(engine.render("{artist} - {title}", &meta), " - Feeling Good");
//! ```

pub mod catalog;
mod engine;
pub mod error;
mod metadata;
pub mod pattern;
mod validate;

pub use catalog::{Catalog, Variable};
pub use engine::{diagnose, render, used_variables, Engine};
pub use error::{CatalogError, Result};
pub use metadata::Metadata;
pub use validate::{diagnose_with, validate, Diagnostic, MalformedKind, ValidationResult};
