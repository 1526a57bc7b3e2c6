//! The variable catalog: which placeholder names the engine recognizes.
//!
//! A [`Catalog`] is an ordered, immutable list of [`Variable`]s. Its order is the
//! order in which [`used_variables`](crate::Engine::used_variables) reports names,
//! so badges and help text always list variables the same way.
//!
//! Catalogs are built once at startup and then shared read-only. Cloning is cheap
//! (the variable list lives behind an `Arc`), and a catalog is `Send + Sync`.
//!
//! # Sources
//!
//! - [`Catalog::standard`]: the built-in media catalog (`title`, `season`, ...)
//! - [`Catalog::new`]: any list of variables, validated
//! - [`Catalog::from_yaml`] / [`Catalog::from_file`]: configuration files
//!
//! # YAML Format
//!
//! ```yaml
//! variables:
//!   - name: title
//!     description: Title of the movie or series
//!   - name: artist
//! ```
//!
//! The `description` key is optional and defaults to an empty string.

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Names and descriptions of the standard media catalog, in catalog order.
const STANDARD_VARIABLES: &[(&str, &str)] = &[
    ("title", "Title of the movie, show, or document"),
    ("season", "Season number (S01, S02, etc.)"),
    ("episode", "Episode number (E01, E02, etc.)"),
    ("year", "Release year (2024, 2025, etc.)"),
    ("quality", "Quality indicator (1080p, 720p, BluRay, etc.)"),
    ("resolution", "Video resolution (1920x1080, 1280x720, etc.)"),
    ("codec", "Video codec (H264, H265, x264, etc.)"),
    ("source", "Source type (BluRay, WEB-DL, HDTV, etc.)"),
    ("group", "Release group name"),
    ("extension", "File extension (mkv, mp4, etc.)"),
];

static STANDARD: Lazy<Catalog> = Lazy::new(|| Catalog {
    variables: STANDARD_VARIABLES
        .iter()
        .map(|(name, description)| Variable::new(*name, *description))
        .collect(),
});

/// A recognized placeholder variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    name: String,
    #[serde(default)]
    description: String,
}

impl Variable {
    /// Creates a variable. The name is checked when the variable joins a [`Catalog`].
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The placeholder name, without braces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable help text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The placeholder as it appears in a pattern, e.g. `{title}`.
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.name)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    variables: Vec<Variable>,
}

/// An ordered, immutable set of recognized variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    variables: Arc<[Variable]>,
}

impl Catalog {
    /// Builds a catalog from the given variables, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list,
    /// [`CatalogError::InvalidName`] when a name is not an identifier, and
    /// [`CatalogError::DuplicateName`] when a name repeats.
    pub fn new(variables: impl IntoIterator<Item = Variable>) -> Result<Self> {
        let variables: Vec<Variable> = variables.into_iter().collect();
        if variables.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, variable) in variables.iter().enumerate() {
            if !is_identifier(&variable.name) {
                return Err(CatalogError::InvalidName(variable.name.clone()));
            }
            if variables[..index].iter().any(|v| v.name == variable.name) {
                return Err(CatalogError::DuplicateName(variable.name.clone()));
            }
        }

        Ok(Self {
            variables: variables.into(),
        })
    }

    /// The built-in media catalog.
    ///
    /// Contains, in order: `title`, `season`, `episode`, `year`, `quality`,
    /// `resolution`, `codec`, `source`, `group`, `extension`.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Parses a catalog from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse {
                path: None,
                message: e.to_string(),
            })?;
        Self::new(file.variables)
    }

    /// Loads a catalog from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml(&content).map_err(|e| e.with_path(path))?;
        tracing::debug!(
            path = %path.display(),
            variables = catalog.len(),
            "loaded variable catalog"
        );
        Ok(catalog)
    }

    /// Returns true if `name` is a recognized variable.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the catalog index of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name == name)
    }

    /// Looks up a variable by name.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Returns the help text for `name`.
    pub fn describe(&self, name: &str) -> Option<&str> {
        self.get(name).map(Variable::description)
    }

    /// Iterates variables in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    /// Variable names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variables.iter().map(Variable::name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if the catalog has no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Checks `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
