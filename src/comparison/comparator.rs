use serde::Serialize;
use std::fmt;

use crate::extraction::{CSignature, CType, TargetSignature};
use crate::types::{translate_c_type, CanonicalType};

/// One way a binding disagrees with its header declaration.
///
/// Both sides are rendered in Rust notation; parameter lists are
/// comma-joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignatureMismatch {
    ReturnType { expected: String, found: String },
    Parameters { expected: String, found: String },
}

impl fmt::Display for SignatureMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReturnType { expected, found } => {
                write!(f, "ret types differ: `{expected}` != `{found}`")
            }
            Self::Parameters { expected, found } => {
                write!(f, "params differ:\n=> `{expected}`\n-> `{found}`")
            }
        }
    }
}

/// Outcome of comparing one binding with its header declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub function_name: String,
    pub ok: bool,
    pub mismatches: Vec<SignatureMismatch>,
}

impl MatchResult {
    pub fn new(function_name: impl Into<String>, mismatches: Vec<SignatureMismatch>) -> Self {
        Self {
            function_name: function_name.into(),
            ok: mismatches.is_empty(),
            mismatches,
        }
    }
}

pub struct SignatureComparator;

impl SignatureComparator {
    /// Compare a header declaration with the binding of the same name.
    ///
    /// The return type and the whole parameter list are checked
    /// independently, so one function can report both.
    pub fn compare(c_signature: &CSignature, target: &TargetSignature) -> MatchResult {
        let mut mismatches = Vec::new();

        let expected_return = Self::translate_return(&c_signature.return_type);
        let found_return = target
            .return_type
            .as_deref()
            .map(CanonicalType::parse_rust);
        if expected_return != found_return {
            mismatches.push(SignatureMismatch::ReturnType {
                expected: Self::render_return(expected_return.as_ref()),
                found: Self::render_return(found_return.as_ref()),
            });
        }

        let expected_params: Vec<CanonicalType> = c_signature
            .parameters
            .iter()
            .map(|param| translate_c_type(param.as_str()))
            .collect();
        let found_params: Vec<CanonicalType> = target
            .parameters
            .iter()
            .map(|param| CanonicalType::parse_rust(param))
            .collect();
        if expected_params != found_params {
            mismatches.push(SignatureMismatch::Parameters {
                expected: Self::render_params(&expected_params),
                found: Self::render_params(&found_params),
            });
        }

        MatchResult::new(&c_signature.name, mismatches)
    }

    /// `void` means "returns nothing", which Rust spells by omitting `->`.
    fn translate_return(return_type: &CType) -> Option<CanonicalType> {
        Some(translate_c_type(return_type.as_str())).filter(|ty| !ty.is_void())
    }

    fn render_return(ty: Option<&CanonicalType>) -> String {
        ty.map(ToString::to_string).unwrap_or_default()
    }

    fn render_params(params: &[CanonicalType]) -> String {
        params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Compare a header declaration with the binding of the same name.
pub fn compare_signatures(c_signature: &CSignature, target: &TargetSignature) -> MatchResult {
    SignatureComparator::compare(c_signature, target)
}
