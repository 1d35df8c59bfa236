/// Extension-key derivation and per-extension aggregation.
///
/// Every recorded file lands in the [`ALL_FILES_KEY`] record plus the
/// record of each extension key derived from its path. Paths without any
/// dot go to [`NO_EXTENSION_KEY`] instead.
use crate::config::Threshold;
use crate::model::{bytes_to_mb, ExtensionStats};
use compact_str::CompactString;
use std::collections::BTreeMap;
use std::path::Path;

/// Sentinel key holding the totals of the whole tree.
pub const ALL_FILES_KEY: &str = "** all **";

/// Sentinel key for files whose path contains no `.` at all.
pub const NO_EXTENSION_KEY: &str = "no ext";

/// Version-control metadata directory excluded from the scan.
pub const VCS_DIR: &str = ".git";

/// Iterator over the extension keys of a path.
///
/// Each step strips everything up to and including the first `.` left in
/// the string. The remainder is yielded whenever it has no further `.`
/// beyond its first character, so `archive.tar.gz` yields `gz`, and
/// `x..gz` yields `.gz` then `gz`.
#[derive(Debug, Clone)]
pub struct ExtensionKeys<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for ExtensionKeys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest = self.rest?;
            let Some(dot) = rest.find('.') else {
                self.rest = None;
                return None;
            };
            let stripped = &rest[dot + 1..];
            self.rest = Some(stripped);
            match stripped.find('.') {
                None | Some(0) => return Some(stripped),
                Some(_) => continue,
            }
        }
    }
}

/// Derive the extension keys of `path`. Case is preserved.
pub fn extension_keys(path: &str) -> ExtensionKeys<'_> {
    ExtensionKeys { rest: Some(path) }
}

/// `true` if `rel_path` lies inside the excluded `.git` directory at the
/// scan root. Matches whole components only, so `.gitignore` and
/// `.github/` are still scanned.
pub fn is_vcs_path(rel_path: &Path) -> bool {
    rel_path.starts_with(VCS_DIR)
}

/// Accumulates [`ExtensionStats`] per extension key for one run.
///
/// Keys are kept in a `BTreeMap` so iteration order, and with it any tie
/// between equally sized report rows, is the same on every run.
#[derive(Debug, Clone)]
pub struct ExtensionAggregator {
    threshold: Threshold,
    records: BTreeMap<CompactString, ExtensionStats>,
}

impl ExtensionAggregator {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            records: BTreeMap::new(),
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Record a file given its path relative to the scan root.
    ///
    /// Returns `false` when the file is skipped: zero-byte files and
    /// anything under `.git/` never reach a record.
    pub fn record(&mut self, rel_path: &Path, size_bytes: u64) -> bool {
        if size_bytes == 0 || is_vcs_path(rel_path) {
            return false;
        }

        let size_mb = bytes_to_mb(size_bytes);
        self.add(ALL_FILES_KEY, size_mb);

        let path = rel_path.to_string_lossy();
        if path.contains('.') {
            for key in extension_keys(&path) {
                self.add(key, size_mb);
            }
        } else {
            self.add(NO_EXTENSION_KEY, size_mb);
        }
        true
    }

    fn add(&mut self, key: &str, size_mb: f64) {
        let threshold = self.threshold;
        self.records
            .entry(CompactString::new(key))
            .or_default()
            .record(size_mb, threshold);
    }

    pub fn get(&self, key: &str) -> Option<&ExtensionStats> {
        self.records.get(key)
    }

    /// All records in key order.
    pub fn records(&self) -> &BTreeMap<CompactString, ExtensionStats> {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ExtensionAggregator {
    fn default() -> Self {
        Self::new(Threshold::default())
    }
}
