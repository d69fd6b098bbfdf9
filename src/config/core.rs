use serde::{Deserialize, Serialize};

use crate::extraction::{HeaderOptions, DEFAULT_EXPORT_MARKER, DEPRECATED_GEOS_EXPORTS};

/// Root configuration structure for bindcheck
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BindcheckConfig {
    /// How exported functions are recognized in the header
    #[serde(default)]
    pub header: Option<HeaderConfig>,

    /// Export names that never need a binding
    #[serde(default)]
    pub ignore: Option<IgnoreConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HeaderConfig {
    pub export_marker: Option<String>,
}

/// When `functions` is given it replaces the built-in GEOS deny-list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub functions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// `terminal` or `json`
    pub default_format: Option<String>,
}

impl BindcheckConfig {
    pub fn export_marker(&self) -> &str {
        self.header
            .as_ref()
            .and_then(|header| header.export_marker.as_deref())
            .unwrap_or(DEFAULT_EXPORT_MARKER)
    }

    pub fn ignored_functions(&self) -> Vec<String> {
        match self.ignore.as_ref().and_then(|ignore| ignore.functions.as_ref()) {
            Some(functions) => functions.clone(),
            None => DEPRECATED_GEOS_EXPORTS.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }

    /// Scanner options before any command-line overrides.
    pub fn header_options(&self) -> HeaderOptions {
        HeaderOptions::new(self.export_marker()).with_ignored(self.ignored_functions())
    }
}
