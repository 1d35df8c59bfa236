/// The extension report table.
///
/// Only extensions with at least one large file are listed, ordered by the
/// total MB their large files contribute, so the best Git LFS candidates
/// come first.
use crate::analysis::ExtensionAggregator;
use crate::model::{format_share, whole_mb, ExtensionStats};
use compact_str::CompactString;
use std::fmt;
use std::io::{self, Write};

/// Width of the left-justified `Extension` column.
pub const LABEL_WIDTH: usize = 60;

/// Width of each right-justified numeric column.
pub const COLUMN_WIDTH: usize = 10;

const HEADERS: [&str; 7] = [
    "Extension", "LShare", "LCount", "Count", "Size", "Min", "Max",
];

const SEPARATOR: &str = "-------";

/// One rendered line of the report body.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub extension: CompactString,
    pub stats: ExtensionStats,
}

impl ReportRow {
    /// `LShare` column text, e.g. `"50 %"` or `"~ 33.33 %"`.
    pub fn share(&self) -> String {
        format_share(self.stats.count_large, self.stats.count_all)
    }
}

/// Sorted, filtered view over the aggregated records.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Build the report from a finished aggregation.
    ///
    /// Rows are sorted by `size_large_mb` descending; equal sizes fall back
    /// to ascending key order.
    pub fn build(aggregator: &ExtensionAggregator) -> Self {
        let mut rows: Vec<ReportRow> = aggregator
            .records()
            .iter()
            .filter(|(_, stats)| stats.has_large_files())
            .map(|(ext, stats)| ReportRow {
                extension: ext.clone(),
                stats: stats.clone(),
            })
            .collect();

        rows.sort_by(|a, b| {
            b.stats
                .size_large_mb
                .total_cmp(&a.stats.size_large_mb)
                .then_with(|| a.extension.cmp(&b.extension))
        });

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write header, separator and body rows to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, HEADERS)?;
        write_line(f, [SEPARATOR; 7])?;

        for row in &self.rows {
            let s = &row.stats;
            let share = row.share();
            let count_large = s.count_large.to_string();
            let count_all = s.count_all.to_string();
            let size = whole_mb(s.size_all_mb).to_string();
            let min = whole_mb(s.min_mb).to_string();
            let max = whole_mb(s.max_mb).to_string();
            write_line(
                f,
                [
                    row.extension.as_str(),
                    share.as_str(),
                    count_large.as_str(),
                    count_all.as_str(),
                    size.as_str(),
                    min.as_str(),
                    max.as_str(),
                ],
            )?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: [&str; 7]) -> fmt::Result {
    let [label, numbers @ ..] = cells;
    write!(f, "{label:<LABEL_WIDTH$}")?;
    for cell in numbers {
        write!(f, "{cell:>COLUMN_WIDTH$}")?;
    }
    writeln!(f)
}
