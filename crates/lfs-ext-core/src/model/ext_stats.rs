/// Running statistics for one extension key.
///
/// A record is created on the first file seen for its key and only ever
/// grows afterwards. `count_large <= count_all`, `size_large_mb <=
/// size_all_mb` and, once a file is recorded, `min_mb <= max_mb`.
use crate::config::Threshold;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionStats {
    /// Number of files recorded under this key.
    pub count_all: u64,
    /// Sum of all recorded sizes in MB.
    pub size_all_mb: f64,
    /// Number of files strictly above the threshold.
    pub count_large: u64,
    /// Sum of the sizes of the large files in MB.
    pub size_large_mb: f64,
    /// Smallest file size seen in MB. Meaningless while `count_all == 0`.
    pub min_mb: f64,
    /// Largest file size seen in MB. Meaningless while `count_all == 0`.
    pub max_mb: f64,
}

impl ExtensionStats {
    /// Fold one file of `size_mb` megabytes into the record.
    pub fn record(&mut self, size_mb: f64, threshold: Threshold) {
        let first = self.count_all == 0;

        self.count_all += 1;
        self.size_all_mb += size_mb;

        if threshold.is_large(size_mb) {
            self.count_large += 1;
            self.size_large_mb += size_mb;
        }

        if first || size_mb > self.max_mb {
            self.max_mb = size_mb;
        }
        if first || size_mb < self.min_mb {
            self.min_mb = size_mb;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count_all == 0
    }

    /// `true` if at least one recorded file exceeded the threshold.
    pub fn has_large_files(&self) -> bool {
        self.count_large > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_sets_min_and_max() {
        let mut stats = ExtensionStats::default();
        assert!(stats.is_empty());

        stats.record(0.25, Threshold::default());

        assert_eq!(stats.count_all, 1);
        assert_eq!(stats.min_mb, 0.25);
        assert_eq!(stats.max_mb, 0.25);
        assert!(!stats.has_large_files());
    }

    #[test]
    fn large_files_are_counted_separately() {
        let threshold = Threshold::default();
        let mut stats = ExtensionStats::default();
        stats.record(1.0, threshold);
        stats.record(0.1, threshold);
        stats.record(3.0, threshold);

        assert_eq!(stats.count_all, 3);
        assert_eq!(stats.count_large, 2);
        assert!((stats.size_all_mb - 4.1).abs() < 1e-9);
        assert_eq!(stats.size_large_mb, 4.0);
        assert_eq!(stats.min_mb, 0.1);
        assert_eq!(stats.max_mb, 3.0);
    }

    #[test]
    fn large_totals_never_exceed_overall_totals() {
        let threshold = Threshold::from_kb(100.0);
        let mut stats = ExtensionStats::default();
        for size in [0.01, 0.5, 0.09, 2.0, 0.0977, 7.5] {
            stats.record(size, threshold);
            assert!(stats.count_large <= stats.count_all);
            assert!(stats.size_large_mb <= stats.size_all_mb);
            assert!(stats.min_mb <= stats.max_mb);
        }
    }
}
