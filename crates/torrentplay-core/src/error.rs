//! Error types for the core crate.
//!
//! - [`SelectionError`] - a selection that would violate the index invariant
//! - [`SourceError`] - failures while loading the torrent list

use thiserror::Error;

/// Rejected attempt to build a [`Selection`](crate::Selection).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("file index {index} out of range for torrent '{torrent}' ({len} files)")]
    FileIndexOutOfRange {
        torrent: String,
        index: usize,
        len: usize,
    },
}

/// Errors raised by a [`TorrentSource`](crate::TorrentSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The embedded catalog could not be parsed.
    #[error("invalid torrent catalog: {0}")]
    Catalog(String),
}

impl From<toml::de::Error> for SourceError {
    fn from(err: toml::de::Error) -> Self {
        Self::Catalog(err.message().to_string())
    }
}
