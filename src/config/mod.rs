//! Optional configuration for mui-migrate.
//!
//! This module handles:
//! - TOML config file parsing (`.mui-migrate.toml`)
//! - Locating the config file in the working directory
//! - Combining config values with command-line arguments

pub mod parser;
pub mod types;

pub use parser::{find_config, parse_config_file, parse_config_str};
pub use types::{CONFIG_FILE_NAME, Config, LoadedConfig, resolve_options};
