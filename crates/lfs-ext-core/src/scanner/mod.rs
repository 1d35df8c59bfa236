/// Scanner module — drives the walk into the aggregator.
///
/// A scan is a single synchronous pass: [`walk::walk_files`] produces files
/// lazily and each one is recorded as soon as it is seen. Per-entry errors
/// are logged, collected in the [`ScanSummary`], and the walk continues.
pub mod walk;

use crate::analysis::ExtensionAggregator;
use crate::error::ScanError;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

pub use walk::{walk_files, FileEntry};

/// Outcome of a completed scan. The statistics themselves live in the
/// aggregator that was passed to [`scan`].
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Files folded into at least the `** all **` record.
    pub files_recorded: u64,
    /// Files seen but skipped (zero bytes, or inside `.git/`).
    pub files_skipped: u64,
    /// Non-fatal errors, in the order they were hit.
    pub errors: Vec<ScanError>,
    /// Wall-clock time of the walk.
    pub duration: Duration,
}

impl ScanSummary {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Walk `root` and record every file into `aggregator`.
///
/// Paths are handed to the aggregator relative to `root`, so extension
/// keys never pick up dots from the directories above the scan root.
pub fn scan(root: &Path, aggregator: &mut ExtensionAggregator) -> ScanSummary {
    let start = Instant::now();
    let mut summary = ScanSummary::default();

    debug!(
        "Scanning {} (threshold {})",
        root.display(),
        aggregator.threshold()
    );

    for entry_result in walk_files(root) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                debug!("Skipping {}: {err}", err.path().display());
                summary.errors.push(err);
                continue;
            }
        };

        let rel_path = entry.path.strip_prefix(root).unwrap_or(&entry.path);
        if aggregator.record(rel_path, entry.size) {
            summary.files_recorded += 1;
        } else {
            summary.files_skipped += 1;
        }
    }

    summary.duration = start.elapsed();
    debug!(
        "Scan complete: {} files recorded, {} skipped, {} errors in {:?}",
        summary.files_recorded,
        summary.files_skipped,
        summary.error_count(),
        summary.duration
    );

    summary
}
