//! Caller-supplied metadata values.
//!
//! A [`Metadata`] record maps variable names to the strings substituted for
//! them. Records are built by the caller (sample data, or values extracted from
//! a real file elsewhere) and only borrowed by the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Values keyed by variable name.
///
/// Not every catalog variable needs a value; a missing key renders as the
/// empty string. Keys outside the catalog are allowed and substitute like any
/// other key.
///
/// ```rust
/// use renamekit_template::Metadata;
///
/// let meta = Metadata::new()
///     .with("title", "Dune")
///     .with("year", "2021");
/// assert_eq!(meta.get("title"), Some("Dune"));
/// assert_eq!(meta.get("quality"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    values: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a value, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns true if `name` has a non-empty value.
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds a record from a JSON object.
    ///
    /// Strings are used verbatim, numbers and booleans are formatted, `null`
    /// becomes the empty string, and arrays or objects become their JSON text.
    /// Non-object values yield an empty record.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::new();
        };
        map.iter()
            .map(|(key, value)| (key.clone(), format_json_value(value)))
            .collect()
    }
}

fn format_json_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => value.to_string(),
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_and_lookup() {
        let meta = Metadata::new().with("title", "X").with("year", "");
        assert_eq!(meta.get("title"), Some("X"));
        assert!(meta.contains("year"));
        assert!(!meta.has_value("year"));
        assert!(meta.has_value("title"));
        assert_eq!(meta.len(), 2);
    }

    #[test]
    fn insert_replaces() {
        let mut meta = Metadata::new();
        assert_eq!(meta.insert("title", "a"), None);
        assert_eq!(meta.insert("title", "b"), Some("a".to_string()));
        assert_eq!(meta.remove("title"), Some("b".to_string()));
        assert!(meta.is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let meta: Metadata = [("season", "S01"), ("episode", "E02")].into_iter().collect();
        let pairs: Vec<_> = meta.iter().collect();
        assert_eq!(pairs, vec![("episode", "E02"), ("season", "S01")]);
    }

    #[test]
    fn from_json_formats_scalars() {
        let meta = Metadata::from_json(&json!({
            "title": "Dune",
            "year": 2021,
            "hdr": true,
            "group": null,
            "tags": ["a", "b"]
        }));
        assert_eq!(meta.get("title"), Some("Dune"));
        assert_eq!(meta.get("year"), Some("2021"));
        assert_eq!(meta.get("hdr"), Some("true"));
        assert_eq!(meta.get("group"), Some(""));
        assert_eq!(meta.get("tags"), Some("[\"a\",\"b\"]"));
    }

    #[test]
    fn from_json_non_object_is_empty() {
        assert!(Metadata::from_json(&json!("title")).is_empty());
        assert!(Metadata::from_json(&json!(null)).is_empty());
    }

    #[test]
    fn deserializes_flat_map() {
        let meta: Metadata = serde_json::from_str(r#"{"title":"X","codec":"x264"}"#).unwrap();
        assert_eq!(meta.get("codec"), Some("x264"));
    }
}
