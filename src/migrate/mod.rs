//! Running the codemod over a directory tree.
//!
//! Files are processed one at a time; each one ends in a [`FileOutcome`]
//! and no state is shared between files.

pub mod file;

pub use file::{FileOutcome, WriteMode, rewrite_file};

use crate::error::Result;
use crate::rules::default_rules;
use crate::walk::{SourceFilter, walk_sources};
use std::path::PathBuf;

/// Directory migrated when no root is given.
pub const DEFAULT_ROOT: &str = "frontend/src";

/// Inputs for one migration run.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
	pub root: PathBuf,
	pub filter: SourceFilter,
	pub mode: WriteMode,
}

impl Default for MigrationOptions {
	fn default() -> Self {
		MigrationOptions {
			root: PathBuf::from(DEFAULT_ROOT),
			filter: SourceFilter::default(),
			mode: WriteMode::Write,
		}
	}
}

/// Tally of per-file outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
	pub updated: usize,
	pub unchanged: usize,
	pub skipped: usize,
	pub failed: usize,
}

impl MigrationReport {
	pub fn record(&mut self, outcome: &FileOutcome) {
		match outcome {
			FileOutcome::Updated => self.updated += 1,
			FileOutcome::Unchanged => self.unchanged += 1,
			FileOutcome::Skipped => self.skipped += 1,
			FileOutcome::WriteFailed => self.failed += 1,
		}
	}

	/// Number of candidate files the walk handed to the rewriter.
	pub fn visited(&self) -> usize {
		self.updated + self.unchanged + self.skipped + self.failed
	}
}

/// Rewrite every candidate file under `options.root`.
///
/// Only an invalid root is an error; per-file problems are counted in the report.
pub fn run_migration(options: &MigrationOptions) -> Result<MigrationReport> {
	let rules = default_rules()?;
	let mut report = MigrationReport::default();

	walk_sources(&options.root, &options.filter, |path| {
		let outcome = rewrite_file(path, &rules, options.mode);
		report.record(&outcome);
	})?;

	Ok(report)
}
