//! Canonical FFI type model and the C-to-Rust translator.

pub mod canonical;
pub mod translate;

pub use canonical::{BaseType, CanonicalType, PointerKind, Primitive};
pub use translate::translate_c_type;
