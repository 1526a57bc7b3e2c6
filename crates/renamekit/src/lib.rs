//! # Renamekit - Rename Templates for Media Files
//!
//! `renamekit` bundles the [`renamekit_template`] engine with the helpers a
//! rename-template editor needs around it:
//!
//! - [`PRESETS`]: ready-made patterns such as `{title} ({year}) [{quality}]`
//! - [`samples`] / [`preview`] / [`PreviewReport`]: render one pattern against
//!   several metadata records at once
//! - [`suggest`]: patterns that fit the metadata at hand
//! - [`tidy`] / [`with_extension`]: optional cleanup of rendered names
//!
//! Extracting metadata from real filenames and performing renames are left to
//! the host application.
//!
//! ## Quick Start
//!
//! ```rust
//! use renamekit::{preset, samples, Engine, PreviewReport};
//!
//! let engine = Engine::standard();
//! let series = preset("series").unwrap();
//!
//! let report = PreviewReport::build(&engine, series.template, samples());
//! assert!(report.is_clean());
//! assert_eq!(report.used, vec!["title", "season", "episode"]);
//! assert_eq!(report.previews[0].rendered, "Game of Thrones - S01E01");
//! ```

mod presets;
mod preview;
mod suggest;
mod tidy;

pub use presets::{preset, Preset, PRESETS};
pub use preview::{preview, samples, Preview, PreviewReport, Sample};
pub use suggest::{suggest, MAX_SUGGESTIONS};
pub use tidy::{tidy, with_extension};

pub use renamekit_template::{
    diagnose, diagnose_with, render, used_variables, validate, Catalog, CatalogError, Diagnostic,
    Engine, MalformedKind, Metadata, ValidationResult, Variable,
};
