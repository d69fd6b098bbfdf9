mod core;
mod loader;

pub use self::core::{BindcheckConfig, HeaderConfig, IgnoreConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_in, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
