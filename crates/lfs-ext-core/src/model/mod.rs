/// Data model for per-extension statistics.
///
/// Re-exports the statistics record and the MB/percentage helpers used
/// when rendering it.
pub mod ext_stats;
pub mod size;

pub use ext_stats::ExtensionStats;
pub use size::{bytes_to_mb, format_share, whole_mb};
