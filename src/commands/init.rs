use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# bindcheck configuration

[header]
# Token that marks an exported function in the header
export_marker = "GEOS_DLL"

[ignore]
# Exports that are not expected to have a binding
functions = [
    "initGEOS_r",
    "finishGEOS_r",
    "GEOSGeomFromWKT",
    "GEOSGeomFromWKT_r",
    "GEOSGeomToWKT",
    "GEOSGeomToWKT_r",
    "GEOSSingleSidedBuffer",
    "GEOSSingleSidedBuffer_r",
    "GEOSUnionCascaded",
    "GEOSUnionCascaded_r",
]

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
