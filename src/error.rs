use std::path::PathBuf;

/// Library-level structured errors for mui-migrate.
///
/// Per-file read and write failures are not errors at this level: they are
/// reported as a `FileOutcome` so one bad file never stops the run.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
	#[error("Root directory not found: {path}")]
	RootNotFound { path: PathBuf },

	#[error("Root is not a directory: {path}")]
	NotADirectory { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern for import rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using MigrateError.
pub type Result<T> = std::result::Result<T, MigrateError>;
