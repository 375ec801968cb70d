//! Recursive discovery of source files under a root directory.

use crate::error::{MigrateError, Result};
use std::fs;
use std::path::Path;

/// Suffixes of the files the codemod rewrites.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx"];

/// Selects candidate files by the suffix of their file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFilter {
	extensions: &'static [&'static str],
}

impl SourceFilter {
	pub fn extensions(&self) -> &[&'static str] {
		self.extensions
	}

	/// True when the file name ends with one of the suffixes.
	pub fn matches(&self, path: &Path) -> bool {
		let Some(name) = path.file_name() else {
			return false;
		};
		let name = name.to_string_lossy();
		self.extensions.iter().any(|ext| name.ends_with(ext))
	}
}

impl Default for SourceFilter {
	fn default() -> Self {
		SourceFilter {
			extensions: DEFAULT_EXTENSIONS,
		}
	}
}

/// Visit every file under `root` accepted by `filter`, one at a time.
///
/// Entries are visited in file name order. All directories are descended,
/// except symlinked ones, which are never followed. A directory that cannot
/// be read mid-walk is reported on stderr and skipped.
pub fn walk_sources<F>(root: &Path, filter: &SourceFilter, mut visit: F) -> Result<()>
where
	F: FnMut(&Path),
{
	if !root.exists() {
		return Err(MigrateError::RootNotFound {
			path: root.to_path_buf(),
		});
	}
	if !root.is_dir() {
		return Err(MigrateError::NotADirectory {
			path: root.to_path_buf(),
		});
	}

	walk_dir(root, filter, &mut visit);
	Ok(())
}

fn walk_dir<F>(dir: &Path, filter: &SourceFilter, visit: &mut F)
where
	F: FnMut(&Path),
{
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) => {
			eprintln!("Warning: skipping unreadable directory {}: {}", dir.display(), e);
			return;
		}
	};

	let mut entries: Vec<_> = entries
		.filter_map(|entry| match entry {
			Ok(entry) => Some(entry),
			Err(e) => {
				eprintln!("Warning: skipping entry in {}: {}", dir.display(), e);
				None
			}
		})
		.collect();
	entries.sort_by_key(|entry| entry.file_name());

	for entry in entries {
		let path = entry.path();
		let file_type = match entry.file_type() {
			Ok(file_type) => file_type,
			Err(e) => {
				eprintln!("Warning: skipping entry in {}: {}", dir.display(), e);
				continue;
			}
		};

		if file_type.is_dir() {
			walk_dir(&path, filter, visit);
		} else if is_regular_file(file_type, &path) && filter.matches(&path) {
			visit(&path);
		}
	}
}

/// Regular files, or symlinks that resolve to one.
fn is_regular_file(file_type: fs::FileType, path: &Path) -> bool {
	file_type.is_file() || (file_type.is_symlink() && path.is_file())
}
