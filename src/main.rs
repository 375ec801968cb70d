use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use mui_migrate::config::{LoadedConfig, find_config, parse_config_file, resolve_options};
use mui_migrate::migrate::{MigrationReport, WriteMode, run_migration};

#[derive(Parser)]
#[command(name = "mui-migrate")]
#[command(
	author,
	version,
	about = "Rewrite @material-ui imports to the @mui packages, in place"
)]
struct Cli {
	/// Directory to migrate [default: frontend/src]
	#[arg(value_name = "ROOT")]
	root: Option<PathBuf>,

	/// Config file to use instead of ./.mui-migrate.toml
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Report the files that would change without writing them
	#[arg(long)]
	dry_run: bool,

	/// Print a tally of outcomes when done
	#[arg(long)]
	summary: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let loaded = load_config(cli.config.as_deref())?;
	let mode = if cli.dry_run {
		WriteMode::DryRun
	} else {
		WriteMode::Write
	};
	let options = resolve_options(loaded.as_ref(), cli.root, mode);

	let report = run_migration(&options)
		.with_context(|| format!("Failed to migrate {}", options.root.display()))?;

	if cli.summary {
		print_summary(&report, mode);
	}

	// Skipped and failed files have already been reported; the run itself succeeded.
	Ok(ExitCode::SUCCESS)
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<Option<LoadedConfig>> {
	let path = match explicit {
		Some(path) => path.to_path_buf(),
		None => {
			let cwd = std::env::current_dir().context("Failed to get current directory")?;
			match find_config(&cwd) {
				Some(path) => path,
				None => return Ok(None),
			}
		}
	};

	let loaded = parse_config_file(&path)
		.with_context(|| format!("Failed to load config {}", path.display()))?;
	Ok(Some(loaded))
}

fn print_summary(report: &MigrationReport, mode: WriteMode) {
	let verb = match mode {
		WriteMode::Write => "updated",
		WriteMode::DryRun => "would update",
	};
	println!(
		"{} file(s) visited: {} {}, {} unchanged, {} skipped, {} failed",
		report.visited(),
		report.updated,
		verb,
		report.unchanged,
		report.skipped,
		report.failed
	);
}
