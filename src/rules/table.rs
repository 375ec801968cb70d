/// One row of the package rename table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageRename {
	/// Legacy module path, e.g. `@material-ui/core`.
	pub from: &'static str,

	/// Replacement module path, e.g. `@mui/material`.
	pub to: &'static str,

	/// Whether `<from>/<subpath>` imports are also rewritten to `<to>/<subpath>`.
	pub subpaths: bool,
}

/// Legacy packages in the order their rules are applied.
pub const LEGACY_PACKAGES: &[PackageRename] = &[
	PackageRename {
		from: "@material-ui/core",
		to: "@mui/material",
		subpaths: true,
	},
	PackageRename {
		from: "@material-ui/icons",
		to: "@mui/icons-material",
		subpaths: true,
	},
	PackageRename {
		from: "@material-ui/lab",
		to: "@mui/lab",
		subpaths: true,
	},
	PackageRename {
		from: "@material-ui/data-grid",
		to: "@mui/x-data-grid",
		subpaths: false,
	},
	PackageRename {
		from: "@material-ui/styles",
		to: "@mui/styles",
		subpaths: false,
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_no_replacement_is_itself_legacy() {
		for rename in LEGACY_PACKAGES {
			assert!(rename.from.starts_with("@material-ui/"));
			assert!(rename.to.starts_with("@mui/"));
		}
	}

	#[test]
	fn test_table_expands_to_eight_rules() {
		let count: usize = LEGACY_PACKAGES
			.iter()
			.map(|r| if r.subpaths { 2 } else { 1 })
			.sum();
		assert_eq!(count, 8);
	}
}
