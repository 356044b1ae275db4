//! Description of what a torrent's on/off toggle would ask a backend to do.
//!
//! The payload uses the same field names as the torrent daemon's command
//! endpoint (`torrentID`, `command`, `fileIndex`). Nothing in this crate sends
//! it; the UI only logs it.

use serde::Serialize;

use crate::model::Torrent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandKind {
    Start,
    Stop,
}

/// A requested transfer state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToggleIntent {
    #[serde(rename = "torrentID")]
    pub torrent_id: String,
    pub command: CommandKind,
    /// Restricts the command to one file; `None` targets the whole torrent.
    #[serde(rename = "fileIndex", skip_serializing_if = "Option::is_none")]
    pub file_index: Option<usize>,
}

impl ToggleIntent {
    /// Intent for switching a whole torrent on (`START`) or off (`STOP`).
    pub fn for_torrent(torrent: &Torrent, on: bool) -> Self {
        Self {
            torrent_id: torrent.info_hash.clone(),
            command: if on {
                CommandKind::Start
            } else {
                CommandKind::Stop
            },
            file_index: None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TorrentFile, TransferState};

    fn torrent() -> Torrent {
        Torrent::new("X", "58", vec![TorrentFile::new("a.mp4")])
    }

    #[test]
    fn test_start_payload() {
        let intent = ToggleIntent::for_torrent(&torrent(), true);
        assert_eq!(intent.command, CommandKind::Start);
        assert_eq!(
            intent.to_json().unwrap(),
            r#"{"torrentID":"58","command":"START"}"#
        );
    }

    #[test]
    fn test_stop_payload() {
        let intent = ToggleIntent::for_torrent(&torrent(), false);
        assert_eq!(
            intent.to_json().unwrap(),
            r#"{"torrentID":"58","command":"STOP"}"#
        );
    }

    #[test]
    fn test_file_scoped_payload() {
        let intent = ToggleIntent {
            file_index: Some(0),
            ..ToggleIntent::for_torrent(&torrent(), true)
        };
        assert_eq!(
            intent.to_json().unwrap(),
            r#"{"torrentID":"58","command":"START","fileIndex":0}"#
        );
    }

    #[test]
    fn test_building_intent_leaves_torrent_untouched() {
        let before = torrent();
        let _ = ToggleIntent::for_torrent(&before, true);
        assert_eq!(before.state, TransferState::default());
        assert_eq!(before, torrent());
    }
}
