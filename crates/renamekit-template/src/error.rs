//! Error types for catalog construction and loading.
//!
//! Rendering, detection, and validation are total and never return errors.
//! Only building a [`Catalog`](crate::Catalog) from caller-supplied data can fail.

use std::io;
use std::path::PathBuf;

/// Errors that can occur when building or loading a variable catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog declares no variables.
    #[error("catalog must declare at least one variable")]
    Empty,

    /// A variable name is not a valid identifier.
    #[error("invalid variable name '{0}': expected [A-Za-z_][A-Za-z0-9_]*")]
    InvalidName(String),

    /// The same variable name is declared twice.
    #[error("variable '{0}' is declared more than once")]
    DuplicateName(String),

    /// The catalog source is not valid YAML or does not match the schema.
    #[error("failed to parse catalog{}: {message}", source_suffix(.path))]
    Parse {
        /// Source file, when loaded from disk.
        path: Option<PathBuf>,
        /// Message from the YAML parser.
        message: String,
    },

    /// Reading the catalog file failed.
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    /// Attaches a source path to a parse error.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            CatalogError::Parse { message, .. } => CatalogError::Parse {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}

fn source_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
