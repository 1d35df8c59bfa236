/// Error types for the two failure tiers of a run.
///
/// [`ConfigError`] is fatal and stops the program before any scanning.
/// [`ScanError`] is raised per directory entry; the scan records it and
/// carries on with the remaining files.
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid user configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid threshold '{value}': expected a size in kilobytes")]
    InvalidThreshold {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid threshold '{0}': NaN cannot be compared against file sizes")]
    NotANumber(String),
}

/// A non-fatal error hit while walking or sizing a single entry.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The traversal could not read a directory (typically access denied).
    #[error("cannot read {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    /// The file was listed but its metadata could not be read
    /// (permission denied, dangling symlink, transient I/O error).
    #[error("cannot stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Path of the offending entry.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Walk { path, .. } | Self::Stat { path, .. } => path,
        }
    }
}

impl From<jwalk::Error> for ScanError {
    fn from(err: jwalk::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        Self::Walk {
            path,
            message: err.to_string(),
        }
    }
}
