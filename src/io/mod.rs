pub mod output;

use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole source file, naming the path on failure.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}
