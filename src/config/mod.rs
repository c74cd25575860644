//! Configuration module for spritegen projects
//!
//! Provides types, discovery and parsing for `spritegen.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    default_config, find_config, find_config_from, load_config, load_config_file, merge_cli_overrides,
    parse_config, resolve_path, CliOverrides, ConfigError, LoadedConfig, CONFIG_FILE_NAME,
};
pub use schema::*;
