//! Platform-neutral core of the torrent player UI.
//!
//! Everything here runs without a DOM so it can be unit-tested on the host:
//!
//! - [`Torrent`], [`TorrentFile`], [`TransferState`] - catalog data model
//! - [`Selection`] - the `(torrent, file index)` pair chosen for playback
//! - [`TorrentSource`], [`StaticSource`] - where the torrent list comes from
//! - [`ToggleIntent`] - logged description of an on/off toggle
//! - [`PlaybackEngine`], [`PlayerLease`] - scoped ownership of a player handle
//! - [`format`] - display helpers for sizes, speeds and dates

pub mod error;
pub mod format;
mod intent;
mod model;
mod playback;
mod selection;
mod source;

pub use error::{SelectionError, SourceError};
pub use intent::{CommandKind, ToggleIntent};
pub use model::{Torrent, TorrentFile, TransferLabel, TransferState};
pub use playback::{PlaybackEngine, PlayerConfig, PlayerLease, Preload};
pub use selection::Selection;
pub use source::{StaticSource, TorrentSource};
