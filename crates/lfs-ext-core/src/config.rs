/// Large-file threshold configuration.
///
/// The threshold is entered in kilobytes (matching how Git LFS users tend
/// to think about it) but every comparison happens in megabytes, so both
/// views are kept on the one type.
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Threshold used when the caller does not supply one: 512 KB (0.5 MB).
pub const DEFAULT_THRESHOLD_KB: f64 = 512.0;

/// Size boundary above which a file counts as "large".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    kb: f64,
}

impl Threshold {
    pub fn from_kb(kb: f64) -> Self {
        Self { kb }
    }

    /// Threshold as entered, in kilobytes.
    pub fn kb(self) -> f64 {
        self.kb
    }

    /// Threshold in megabytes. A file is large when its size in MB is
    /// strictly greater than this value.
    pub fn mb(self) -> f64 {
        self.kb / 1024.0
    }

    #[inline]
    pub fn is_large(self, size_mb: f64) -> bool {
        size_mb > self.mb()
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::from_kb(DEFAULT_THRESHOLD_KB)
    }
}

impl FromStr for Threshold {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let kb: f64 = trimmed
            .parse()
            .map_err(|source| ConfigError::InvalidThreshold {
                value: s.to_string(),
                source,
            })?;
        if kb.is_nan() {
            return Err(ConfigError::NotANumber(s.to_string()));
        }
        Ok(Self::from_kb(kb))
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} KB", self.kb)
    }
}
