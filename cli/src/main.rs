//! hashcheck: verify files against a checksum manifest.
//!
//! Reads a manifest of `<filename> <algorithm> <expected-digest>` lines,
//! checks each file under the target directory, and prints one
//! `<filename> <status>` line per manifest record.
//!
//! Usage:
//!   hashcheck SHASUMS.txt ./downloads
//!   hashcheck SHASUMS.txt ./downloads --legacy-status
//!   hashcheck SHASUMS.txt ./downloads --format json --strict
//!   hashcheck SHASUMS.txt ./downloads --config hashcheck.toml --no-strict

mod config;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hashcheck_contracts::error::HashcheckResult;
use hashcheck_core::Verifier;
use hashcheck_digest::StandardDigestEngine;
use hashcheck_manifest::Manifest;
use hashcheck_report::{sink_for, OutputFormat, StatusStyle};
use hashcheck_resolve::FsResolver;

use crate::config::Config;

/// Exit status when `--strict` is set and some record did not verify.
const EXIT_UNVERIFIED: u8 = 2;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Verify files against a checksum manifest.
#[derive(Parser)]
#[command(
    name = "hashcheck",
    version,
    about = "Verify files against a checksum manifest",
    long_about = "Checks every file listed in MANIFEST, relative to TARGET_DIR, against its\n\
                  recorded md5, sha1 or sha256 digest and prints one status line per record."
)]
struct Cli {
    /// Manifest file with one `<filename> <algorithm> <digest>` record per line.
    manifest: PathBuf,

    /// Directory the manifest filenames are relative to.
    target_dir: PathBuf,

    /// TOML file with default settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format: `text` or `json`.
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Status tokens: `distinct` or `legacy`.
    #[arg(long, value_name = "STYLE", conflicts_with = "legacy_status")]
    status_style: Option<StatusStyle>,

    /// Print `NOT FOUND` for missing files and unsupported algorithms alike.
    /// Same as `--status-style legacy`.
    #[arg(long)]
    legacy_status: bool,

    /// Verify records in parallel. Output order is unchanged.
    #[arg(long, overrides_with = "no_parallel")]
    parallel: bool,

    /// Verify records one at a time.
    #[arg(long, overrides_with = "parallel")]
    no_parallel: bool,

    /// Report unreadable files as ACCESS_DENIED.
    #[arg(long, overrides_with = "no_access_denied")]
    access_denied: bool,

    /// Report unreadable files as NOT_FOUND.
    #[arg(long, overrides_with = "access_denied")]
    no_access_denied: bool,

    /// Exit with status 2 unless every record is OK.
    #[arg(long, overrides_with = "no_strict")]
    strict: bool,

    /// Exit with status 0 whenever the run completes.
    #[arg(long, overrides_with = "strict")]
    no_strict: bool,
}

/// Collapse a `--flag` / `--no-flag` pair. `None` leaves the config value.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

impl Cli {
    /// Load the config file (if any) and layer command-line flags over it.
    fn resolve_config(&self) -> HashcheckResult<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(style) = self.status_style {
            config.report.status_style = style;
        }
        if self.legacy_status {
            config.report.status_style = StatusStyle::Legacy;
        }
        if let Some(parallel) = switch(self.parallel, self.no_parallel) {
            config.verify.parallel = parallel;
        }
        if let Some(access_denied) = switch(self.access_denied, self.no_access_denied) {
            config.verify.access_denied = access_denied;
        }
        if let Some(strict) = switch(self.strict, self.no_strict) {
            config.verify.strict = strict;
        }

        Ok(config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report.  RUST_LOG=debug
    // shows every record.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("hashcheck: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> HashcheckResult<ExitCode> {
    let config = cli.resolve_config()?;
    debug!(?config, "configuration resolved");

    let manifest = Manifest::from_file(&cli.manifest)?;

    let resolver = FsResolver::new().with_access_denied(config.verify.access_denied);
    let verifier = Verifier::new(Box::new(StandardDigestEngine), Box::new(resolver))
        .with_parallel(config.verify.parallel);

    let stdout = io::stdout();
    let mut sink = sink_for(config.report.format, config.report.status_style, stdout.lock());
    let summary = verifier.verify_into(&cli.target_dir, &manifest.records, sink.as_mut())?;

    if config.verify.strict && !summary.all_ok() {
        return Ok(ExitCode::from(EXIT_UNVERIFIED));
    }
    Ok(ExitCode::SUCCESS)
}
