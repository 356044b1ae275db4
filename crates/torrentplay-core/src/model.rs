//! Torrent catalog data model.

use serde::Deserialize;

/// A single playable item inside a torrent.
///
/// Files have no identifier of their own; a file is addressed by its index
/// in [`Torrent::files`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TorrentFile {
    pub name: String,
    /// Size in bytes, when known.
    #[serde(default)]
    pub size: Option<u64>,
}

impl TorrentFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    pub fn with_size(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
        }
    }
}

/// Download/seed switch of a torrent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TransferState {
    /// Whether the torrent is switched on.
    #[serde(default)]
    pub active: bool,
    /// Whether all pieces are present and the torrent only uploads.
    #[serde(default)]
    pub seeding: bool,
}

/// Human-facing summary of a [`TransferState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferLabel {
    Stopped,
    Downloading,
    Seeding,
}

impl TransferLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Downloading => "Downloading",
            Self::Seeding => "Seeding",
        }
    }
}

impl TransferState {
    pub fn label(&self) -> TransferLabel {
        match (self.active, self.seeding) {
            (false, _) => TransferLabel::Stopped,
            (true, false) => TransferLabel::Downloading,
            (true, true) => TransferLabel::Seeding,
        }
    }
}

/// A downloadable/streamable bundle of files.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Torrent {
    pub name: String,
    /// Info hash as a hex string; unique within a catalog.
    pub info_hash: String,
    #[serde(default)]
    pub files: Vec<TorrentFile>,
    #[serde(default)]
    pub state: TransferState,
    /// Current transfer speed in bytes per second.
    #[serde(default)]
    pub speed: u64,
    /// Unix timestamp (seconds) of when the torrent was added.
    #[serde(default)]
    pub added: Option<u64>,
}

impl Torrent {
    /// Creates a stopped torrent with the given files.
    pub fn new(
        name: impl Into<String>,
        info_hash: impl Into<String>,
        files: Vec<TorrentFile>,
    ) -> Self {
        Self {
            name: name.into(),
            info_hash: info_hash.into(),
            files,
            state: TransferState::default(),
            speed: 0,
            added: None,
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Sum of the known file sizes. Files without a size count as zero.
    pub fn total_size(&self) -> u64 {
        self.files.iter().filter_map(|f| f.size).sum()
    }

    pub fn file(&self, index: usize) -> Option<&TorrentFile> {
        self.files.get(index)
    }
}
