use crate::rules::{ImportRule, rewrite_source};
use std::fs;
use std::path::Path;

/// Whether changed files are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
	/// Overwrite changed files in place.
	#[default]
	Write,

	/// Report files that would change without touching them.
	DryRun,
}

/// What happened to a single visited file.
#[derive(Debug)]
pub enum FileOutcome {
	/// Imports were rewritten (or would be, in a dry run).
	Updated,

	/// No legacy import was found; the file was not written.
	Unchanged,

	/// The file could not be read as UTF-8 text and was left alone.
	Skipped,

	/// The rewritten content could not be written back.
	WriteFailed,
}

/// Rewrite the legacy imports in one file.
///
/// Never fails: every problem is reported on the console and turned into an
/// outcome, so the caller can carry on with the next file.
pub fn rewrite_file(path: &Path, rules: &[ImportRule], mode: WriteMode) -> FileOutcome {
	let Some(original) = read_text(path) else {
		println!("Skipping binary or unreadable file: {}", path.display());
		return FileOutcome::Skipped;
	};

	let rewritten = rewrite_source(&original, rules);
	if rewritten == original {
		return FileOutcome::Unchanged;
	}

	if mode == WriteMode::DryRun {
		println!("Would update: {}", path.display());
		return FileOutcome::Updated;
	}

	if let Err(e) = fs::write(path, rewritten) {
		eprintln!("Warning: failed to write {}: {}", path.display(), e);
		return FileOutcome::WriteFailed;
	}

	println!("Updated: {}", path.display());
	FileOutcome::Updated
}

/// The file's content, if it can be read and is valid UTF-8.
fn read_text(path: &Path) -> Option<String> {
	let bytes = fs::read(path).ok()?;
	String::from_utf8(bytes).ok()
}
