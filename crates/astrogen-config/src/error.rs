//! Error type for config persistence.

use std::path::PathBuf;

/// What went wrong while loading or saving a [`crate::GenConfig`].
///
/// Disk and parse failures carry the offending path so a bad `--config`
/// argument is diagnosable from the message alone.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be written.
    #[error("failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid RON for a `GenConfig`.
    #[error("malformed config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be serialized to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

impl ConfigError {
    /// The file path involved, if the failure came from disk or parsing.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Write { path, .. }
            | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::Serialize(_) => None,
        }
    }
}
