use crate::error::{MigrateError, Result};
use crate::rules::table::{LEGACY_PACKAGES, PackageRename};
use regex::Regex;
use std::borrow::Cow;

/// Everything up to the module specifier: `import <bindings> from `.
/// Bindings stay on one line and never contain quotes or `;`, so two
/// statements on the same line are matched separately.
const STATEMENT_PREFIX: &str = r#"(?P<stmt>import\s+[^'";\n]*?\s+from\s+)(?P<quote>["'])"#;

/// A compiled import substitution.
#[derive(Debug)]
pub struct ImportRule {
	/// The pattern matching a whole import statement for one legacy module form.
	pub pattern: Regex,

	/// The replacement template (regex crate `${name}` syntax).
	pub replacement: String,
}

impl ImportRule {
	/// Rule for `import ... from "<from>"`, with no subpath.
	pub fn exact(from: &str, to: &str) -> Result<Self> {
		let pattern = format!(r#"{STATEMENT_PREFIX}{}["']"#, regex::escape(from));
		let replacement = format!("${{stmt}}${{quote}}{}${{quote}}", escape_replacement(to));
		Self::new(&pattern, replacement)
	}

	/// Rule for `import ... from "<from>/<subpath>"`, keeping the subpath.
	pub fn subpath(from: &str, to: &str) -> Result<Self> {
		let pattern = format!(
			r#"{STATEMENT_PREFIX}{}/(?P<subpath>[^'"\n]+)["']"#,
			regex::escape(from)
		);
		let replacement = format!(
			"${{stmt}}${{quote}}{}/${{subpath}}${{quote}}",
			escape_replacement(to)
		);
		Self::new(&pattern, replacement)
	}

	fn new(pattern: &str, replacement: String) -> Result<Self> {
		let pattern = Regex::new(pattern).map_err(|source| MigrateError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})?;
		Ok(ImportRule {
			pattern,
			replacement,
		})
	}

	/// Rewrite every matching import in `input`.
	pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
		self.pattern.replace_all(input, self.replacement.as_str())
	}
}

/// `$` is special in replacement templates.
fn escape_replacement(literal: &str) -> String {
	literal.replace('$', "$$")
}

/// Compile a rename table into rules: the exact rule for each package,
/// followed by its subpath rule when the package has one.
pub fn compile_rules(renames: &[PackageRename]) -> Result<Vec<ImportRule>> {
	let mut rules = Vec::with_capacity(renames.len() * 2);
	for rename in renames {
		rules.push(ImportRule::exact(rename.from, rename.to)?);
		if rename.subpaths {
			rules.push(ImportRule::subpath(rename.from, rename.to)?);
		}
	}
	Ok(rules)
}

/// Compile the built-in `@material-ui` to `@mui` rules.
pub fn default_rules() -> Result<Vec<ImportRule>> {
	compile_rules(LEGACY_PACKAGES)
}

/// Apply every rule to `content`, in order. Each rule runs regardless of
/// whether an earlier one matched.
pub fn rewrite_source(content: &str, rules: &[ImportRule]) -> String {
	let mut current = content.to_string();
	for rule in rules {
		let rewritten = match rule.apply(&current) {
			Cow::Owned(rewritten) => Some(rewritten),
			Cow::Borrowed(_) => None,
		};
		if let Some(rewritten) = rewritten {
			current = rewritten;
		}
	}
	current
}
