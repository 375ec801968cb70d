//! Import rewriting rules for mui-migrate.
//!
//! This module handles:
//! - The fixed table of legacy `@material-ui/*` packages and their `@mui/*` names
//! - Compiling that table into ordered regex substitutions
//! - Applying the substitutions to a file's text

pub mod rewriter;
pub mod table;

pub use rewriter::{ImportRule, compile_rules, default_rules, rewrite_source};
pub use table::{LEGACY_PACKAGES, PackageRename};
