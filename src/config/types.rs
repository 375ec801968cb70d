use crate::migrate::{DEFAULT_ROOT, MigrationOptions, WriteMode};
use crate::walk::SourceFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".mui-migrate.toml";

/// Configuration from a `.mui-migrate.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// Directory to migrate. Relative paths are resolved against the
	/// directory containing the config file.
	#[serde(default)]
	pub root: Option<PathBuf>,
}

/// A loaded configuration with its source path.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

impl LoadedConfig {
	/// The configured root, resolved against the config file's directory.
	pub fn root(&self) -> Option<PathBuf> {
		let root = self.config.root.as_ref()?;
		if root.is_absolute() {
			return Some(root.clone());
		}
		let base = self.path.parent().unwrap_or_else(|| Path::new(""));
		Some(base.join(root))
	}
}

/// Build run options. A root given on the command line wins over the
/// config file, which wins over the built-in default.
pub fn resolve_options(
	loaded: Option<&LoadedConfig>,
	root_arg: Option<PathBuf>,
	mode: WriteMode,
) -> MigrationOptions {
	let root = root_arg
		.or_else(|| loaded.and_then(LoadedConfig::root))
		.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

	MigrationOptions {
		root,
		filter: SourceFilter::default(),
		mode,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn loaded(config: Config, path: &str) -> LoadedConfig {
		LoadedConfig {
			config,
			path: PathBuf::from(path),
		}
	}

	#[test]
	fn test_resolve_defaults() {
		let options = resolve_options(None, None, WriteMode::Write);
		assert_eq!(options.root, PathBuf::from("frontend/src"));
		assert_eq!(options.filter, SourceFilter::default());
	}

	#[test]
	fn test_resolve_config_root_relative_to_config_dir() {
		let config = Config {
			root: Some(PathBuf::from("web/src")),
		};
		let loaded = loaded(config, "/repo/.mui-migrate.toml");
		let options = resolve_options(Some(&loaded), None, WriteMode::DryRun);
		assert_eq!(options.root, PathBuf::from("/repo/web/src"));
		assert_eq!(options.mode, WriteMode::DryRun);
	}

	#[test]
	fn test_resolve_cli_root_wins() {
		let config = Config {
			root: Some(PathBuf::from("web/src")),
		};
		let loaded = loaded(config, "/repo/.mui-migrate.toml");
		let options = resolve_options(Some(&loaded), Some(PathBuf::from("other")), WriteMode::Write);
		assert_eq!(options.root, PathBuf::from("other"));
	}

	#[test]
	fn test_resolve_filter_is_always_js_and_jsx() {
		let config = Config {
			root: Some(PathBuf::from("src")),
		};
		let loaded = loaded(config, ".mui-migrate.toml");
		let options = resolve_options(Some(&loaded), None, WriteMode::Write);
		assert_eq!(options.filter.extensions(), [".js", ".jsx"]);
		assert!(!options.filter.matches(Path::new("App.tsx")));
	}
}
