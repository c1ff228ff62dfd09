//! Configuration types for TypeScript emission.

use gots_core::Colors;
use indexmap::IndexMap;

/// Configuration for TypeScript emission.
///
/// Built once before translation and only read afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    /// Literal string written once per nesting level
    pub(crate) indent: String,
    /// `pkg.Name` -> TypeScript type, consulted for qualified references
    pub(crate) type_mappings: IndexMap<String, String>,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            type_mappings: IndexMap::new(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-level indentation string.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Map a qualified Go type (`time.Time`) to a TypeScript type (`string`).
    pub fn type_mapping(mut self, qualified: impl Into<String>, ts: impl Into<String>) -> Self {
        self.type_mappings.insert(qualified.into(), ts.into());
        self
    }

    /// Add several type mappings; later entries replace earlier ones.
    pub fn type_mappings<I, K, V>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.type_mappings
            .extend(mappings.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn get_indent(&self) -> &str {
        &self.indent
    }

    /// Configured TypeScript type for `pkg.Name`, if any.
    pub fn mapped_type(&self, qualified: &str) -> Option<&str> {
        self.type_mappings.get(qualified).map(String::as_str)
    }
}
