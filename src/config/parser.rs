use crate::config::types::{CONFIG_FILE_NAME, Config, LoadedConfig};
use crate::error::{MigrateError, Result};
use std::path::{Path, PathBuf};

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<LoadedConfig> {
	let content =
		std::fs::read_to_string(path).map_err(|source| MigrateError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	let config = parse_config_str(&content, path)?;
	Ok(LoadedConfig {
		config,
		path: path.to_path_buf(),
	})
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	toml::from_str(content).map_err(|source| MigrateError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}

/// The config file in `dir`, if there is one.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
	let path = dir.join(CONFIG_FILE_NAME);
	path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert!(config.root.is_none());
	}

	#[test]
	fn test_parse_root() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("root = \"client/src\"\n", &path).unwrap();

		assert_eq!(config.root, Some(PathBuf::from("client/src")));
	}

	#[test]
	fn test_parse_rejects_extensions_key() {
		let content = r#"extensions = [".tsx"]"#;
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);

		assert!(matches!(result, Err(MigrateError::ConfigParseError { .. })));
	}

	#[test]
	fn test_parse_unknown_key() {
		let path = PathBuf::from("test.toml");
		let result = parse_config_str("exclude = [\"node_modules\"]", &path);
		assert!(matches!(result, Err(MigrateError::ConfigParseError { .. })));
	}

	#[test]
	fn test_parse_missing_file() {
		let result = parse_config_file(Path::new("/nonexistent/.mui-migrate.toml"));
		assert!(matches!(result, Err(MigrateError::ConfigReadError { .. })));
	}

	#[test]
	fn test_find_config() {
		let temp_dir = tempfile::tempdir().unwrap();
		assert!(find_config(temp_dir.path()).is_none());

		let path = temp_dir.path().join(CONFIG_FILE_NAME);
		std::fs::write(&path, "root = \"src\"\n").unwrap();
		assert_eq!(find_config(temp_dir.path()), Some(path.clone()));

		let loaded = parse_config_file(&path).unwrap();
		assert_eq!(loaded.root(), Some(temp_dir.path().join("src")));
	}
}
