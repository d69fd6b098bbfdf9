//! Data produced by the declaration scanners.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Declaration text gathered across one or more source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeclaration {
    pub text: String,
    /// 1-based line where the declaration starts
    pub line: usize,
}

/// A C type exactly as written in the header, e.g. `const double *`.
///
/// Kept as text until comparison so the header scanner never depends on the
/// type model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CType(String);

impl CType {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CType {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// An exported function declared in the C header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CSignature {
    pub name: String,
    pub parameters: Vec<CType>,
    pub return_type: CType,
    pub line: usize,
}

/// Exported functions keyed (and ordered) by name.
pub type CSignatureTable = BTreeMap<String, CSignature>;

/// A `fn` declaration found in the Rust bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSignature {
    pub name: String,
    /// Parameter types in Rust notation, whitespace-normalized
    pub parameters: Vec<String>,
    /// `None` when the declaration has no `->` return type
    pub return_type: Option<String>,
    pub line: usize,
}
