//! CLI command implementations.
//!
//! - **check**: compare a header with its bindings and write the report
//! - **init**: write a default `.bindcheck.toml`

pub mod check;
pub mod init;

pub use check::{run_check, CheckConfig};
pub use init::init_config;
