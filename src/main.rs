//! git-find-lfs-extensions — find file extensions worth tracking with Git LFS.
//!
//! Thin binary entry point. All logic lives in the `lfs-ext-core` crate.
//! Scans the current directory (skipping `.git`) and prints one row per
//! extension that has files above the size threshold.

use anyhow::Context;
use clap::Parser;
use lfs_ext_core::{scan, ExtensionAggregator, Report, Threshold};
use std::io::{self, BufWriter, Write};

/// Columns: Extension, LShare (share of files above the threshold),
/// LCount (files above the threshold), Count (all files), Size (total MB),
/// Min and Max (smallest and largest file in MB).
#[derive(Debug, Parser)]
#[command(
    name = "git-find-lfs-extensions",
    version,
    about = "Identify file extensions in a directory tree that could be tracked by Git LFS",
    allow_negative_numbers = true
)]
struct Args {
    /// Size threshold in KB above which a file counts as large [default: 512]
    #[arg(value_name = "THRESHOLD_KB")]
    threshold: Option<Threshold>,

    /// Log scan progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the table.
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let threshold = args.threshold.unwrap_or_default();
    let root = std::env::current_dir().context("cannot determine the current directory")?;
    tracing::info!("Scanning {} with threshold {threshold}", root.display());

    let mut aggregator = ExtensionAggregator::new(threshold);
    let summary = scan(&root, &mut aggregator);
    for err in &summary.errors {
        eprintln!("error: {err}");
    }

    let report = Report::build(&aggregator);
    let mut out = BufWriter::new(io::stdout().lock());
    report
        .write_to(&mut out)
        .and_then(|()| out.flush())
        .context("failed to write report")?;

    Ok(())
}
