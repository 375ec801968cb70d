//! mui-migrate - codemod that moves JavaScript imports from the legacy
//! `@material-ui/*` packages to their `@mui/*` replacements.
//!
//! This library provides the core functionality for mui-migrate, including:
//! - The package rename table and the import rewriting rules built from it
//! - Recursive discovery of `.js` / `.jsx` files
//! - In-place rewriting of each file, with per-file outcomes
//! - Optional `.mui-migrate.toml` configuration
//!
//! # Example
//!
//! ```no_run
//! use mui_migrate::migrate::{MigrationOptions, run_migration};
//! use std::path::PathBuf;
//!
//! let options = MigrationOptions {
//!     root: PathBuf::from("web/src"),
//!     ..Default::default()
//! };
//! let report = run_migration(&options).unwrap();
//! println!("{} file(s) updated", report.updated);
//! ```

pub mod config;
pub mod error;
pub mod migrate;
pub mod rules;
pub mod walk;

pub use error::{MigrateError, Result};
