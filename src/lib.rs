// Export modules for library usage
pub mod audit;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod types;

// Re-export commonly used types
pub use crate::audit::{audit_files, audit_sources};
pub use crate::comparison::{
    compare_signatures, diff_signatures, DiffReport, MatchResult, SignatureMismatch,
};
pub use crate::errors::{Error, Result};
pub use crate::extraction::{
    extract_c_signatures, extract_target_signatures, CSignature, CSignatureTable, CType,
    HeaderOptions, TargetSignature,
};
pub use crate::types::{translate_c_type, BaseType, CanonicalType, PointerKind, Primitive};
