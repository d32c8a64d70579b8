//! Command-line entry point for the site asset checker.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use site_asset_check::config::{DEFAULT_ASSET_SAMPLE, DEFAULT_LEADING_SLASH_SAMPLE};
use site_asset_check::{AssetChecker, CheckerConfig, ScanReport, report};

#[derive(Debug, Parser)]
#[command(name = "verify-assets")]
#[command(about = "Report broken local asset references and leading-slash paths in a static site")]
struct Cli {
    /// Site root to scan. Defaults to two directories above this executable.
    #[arg(long)]
    root: Option<PathBuf>,
    /// Print the full report as JSON instead of the text summary.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Leading-slash findings listed in the text report.
    #[arg(long, default_value_t = DEFAULT_LEADING_SLASH_SAMPLE)]
    max_leading_slash: usize,
    /// Asset findings listed in the text report.
    #[arg(long, default_value_t = DEFAULT_ASSET_SAMPLE)]
    max_findings: usize,
    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => default_root()?,
    };
    let config = CheckerConfig::default()
        .with_leading_slash_sample(cli.max_leading_slash)
        .with_asset_sample(cli.max_findings);

    let checker = AssetChecker::new(&root, config)?;
    tracing::info!(root = %checker.root().display(), "scanning site");
    let scan = checker.run()?;

    if cli.json {
        println!("{}", report::render_json(&scan)?);
    } else {
        print!("{}", report::render_text(&scan, checker.config()));
    }

    Ok(ExitCode::from(exit_status(&scan)))
}

/// `0` when the scan found nothing, `1` otherwise.
fn exit_status(scan: &ScanReport) -> u8 {
    if scan.is_clean() { 0 } else { 1 }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_root() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to locate the running executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", exe.display()))?;
    root_from_exe(&exe)
        .ok_or_else(|| anyhow!("executable {} has no grandparent directory", exe.display()))
}

/// The executable is expected to live one directory below the site root, e.g. `<root>/bin/`.
fn root_from_exe(exe: &Path) -> Option<PathBuf> {
    exe.ancestors().nth(2).map(PathBuf::from)
}
