/// lfs-ext-core — scanning, per-extension aggregation and reporting.
///
/// This crate contains all logic with zero CLI dependencies. A run is a
/// single pass: walk the tree, feed every file into an
/// [`analysis::ExtensionAggregator`], then render an [`analysis::Report`].
///
/// # Modules
///
/// - [`model`] — Per-extension statistics record and MB formatting helpers.
/// - [`config`] — The large-file threshold.
/// - [`scanner`] — Serial directory walk that feeds the aggregator.
/// - [`analysis`] — Extension-key derivation, aggregation and the report table.
/// - [`error`] — Configuration and per-entry scan errors.
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod scanner;

pub use analysis::{ExtensionAggregator, Report};
pub use config::Threshold;
pub use error::{ConfigError, ScanError};
pub use scanner::{scan, ScanSummary};
