//! Declaration scanners for both sides of a binding.
//!
//! Neither scanner runs a real parser. They key on a handful of markers (the
//! header's export token, the `fn` keyword, parenthesis balance and statement
//! terminators) and hand back structured signatures, so swapping in a real
//! front end later only touches this module.
//!
//! - `c_header` - exported functions from a C header
//! - `rust_bindings` - `fn` declarations from a Rust FFI module
//! - `lexer` - comment stripping and top-level splitting shared by both

pub mod c_header;
pub mod lexer;
pub mod rust_bindings;
pub mod types;

pub use c_header::{
    extract_c_signatures, parse_c_arguments, HeaderOptions, HeaderScanner, DEFAULT_EXPORT_MARKER,
    DEPRECATED_GEOS_EXPORTS,
};
pub use rust_bindings::{extract_target_signatures, parse_rust_arguments};
pub use types::{CSignature, CSignatureTable, CType, RawDeclaration, TargetSignature};
