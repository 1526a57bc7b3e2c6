//! Previewing a pattern against sample metadata.
//!
//! The engine renders one record at a time. This module is the batching side:
//! it renders a pattern against each sample independently and gathers what an
//! editor shows next to the input field (validity, variable badges, findings,
//! and example output).

use once_cell::sync::Lazy;
use renamekit_template::{Diagnostic, Engine, Metadata, ValidationResult};
use serde::Serialize;

/// A labelled metadata record used for previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Usually the filename the metadata was taken from.
    pub label: String,
    pub metadata: Metadata,
}

impl Sample {
    pub fn new(label: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            label: label.into(),
            metadata,
        }
    }
}

static SAMPLES: Lazy<Vec<Sample>> = Lazy::new(|| {
    vec![
        Sample::new(
            "Game.of.Thrones.S01E01.1080p.BluRay.x264-GROUP.mkv",
            Metadata::new()
                .with("title", "Game of Thrones")
                .with("season", "S01")
                .with("episode", "E01")
                .with("quality", "1080p")
                .with("resolution", "1080p")
                .with("codec", "X264")
                .with("source", "BluRay")
                .with("group", "GROUP")
                .with("extension", "mkv"),
        ),
        Sample::new(
            "The.Dark.Knight.2008.1080p.BluRay.x264-SPARKS.mkv",
            Metadata::new()
                .with("title", "The Dark Knight")
                .with("year", "2008")
                .with("quality", "1080p")
                .with("resolution", "1080p")
                .with("codec", "X264")
                .with("source", "BluRay")
                .with("group", "SPARKS")
                .with("extension", "mkv"),
        ),
        Sample::new(
            "Document.Name.2024.pdf",
            Metadata::new()
                .with("title", "Document Name")
                .with("year", "2024")
                .with("extension", "pdf"),
        ),
    ]
});

/// Built-in samples: a TV episode, a movie, and a document.
pub fn samples() -> &'static [Sample] {
    &SAMPLES
}

/// One rendered sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub label: String,
    pub rendered: String,
}

/// Renders `pattern` against every sample, in order.
pub fn preview(engine: &Engine, pattern: &str, samples: &[Sample]) -> Vec<Preview> {
    samples
        .iter()
        .map(|sample| Preview {
            label: sample.label.clone(),
            rendered: engine.render(pattern, &sample.metadata),
        })
        .collect()
}

/// Everything an editor displays for one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewReport {
    pub pattern: String,
    pub validation: ValidationResult,
    /// Recognized variables, in catalog order.
    pub used: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub previews: Vec<Preview>,
}

impl PreviewReport {
    /// Builds the report. Malformed patterns are still previewed.
    pub fn build(engine: &Engine, pattern: &str, samples: &[Sample]) -> Self {
        tracing::debug!(pattern, samples = samples.len(), "building preview report");
        Self {
            pattern: pattern.to_string(),
            validation: engine.validate(pattern),
            used: engine
                .used_names(pattern)
                .into_iter()
                .map(str::to_string)
                .collect(),
            diagnostics: engine.diagnose(pattern),
            previews: preview(engine, pattern, samples),
        }
    }

    /// True when the pattern is well-formed and names only known variables.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
