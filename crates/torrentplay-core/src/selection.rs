//! The item currently chosen for playback.

use crate::error::SelectionError;
use crate::model::{Torrent, TorrentFile};

/// A `(torrent, file index)` pair.
///
/// Built only through [`Selection::new`], which checks the index, so a
/// `Selection` always points at an existing file. It is never mutated:
/// picking another file produces a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    torrent: Torrent,
    file_index: usize,
}

impl Selection {
    pub fn new(torrent: Torrent, file_index: usize) -> Result<Self, SelectionError> {
        if file_index >= torrent.files.len() {
            return Err(SelectionError::FileIndexOutOfRange {
                torrent: torrent.name.clone(),
                index: file_index,
                len: torrent.files.len(),
            });
        }
        Ok(Self {
            torrent,
            file_index,
        })
    }

    pub fn torrent(&self) -> &Torrent {
        &self.torrent
    }

    pub fn file_index(&self) -> usize {
        self.file_index
    }

    pub fn file(&self) -> &TorrentFile {
        &self.torrent.files[self.file_index]
    }

    pub fn torrent_name(&self) -> &str {
        &self.torrent.name
    }

    pub fn file_name(&self) -> &str {
        &self.file().name
    }

    /// Whether this selection points at the given file of the given torrent.
    pub fn is(&self, info_hash: &str, file_index: usize) -> bool {
        self.torrent.info_hash == info_hash && self.file_index == file_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn torrent_x() -> Torrent {
        Torrent::new(
            "X",
            "58",
            vec![TorrentFile::new("a.mp4"), TorrentFile::new("b.mp4")],
        )
    }

    #[test]
    fn test_select_second_file() {
        let selection = Selection::new(torrent_x(), 1).unwrap();
        assert_eq!(selection.torrent_name(), "X");
        assert_eq!(selection.file_index(), 1);
        assert_eq!(selection.file_name(), "b.mp4");
        assert!(selection.is("58", 1));
        assert!(!selection.is("58", 0));
    }

    #[test]
    fn test_every_valid_index_selects_its_file() {
        let torrent = torrent_x();
        for (index, file) in torrent.files.iter().enumerate() {
            let selection = Selection::new(torrent.clone(), index).unwrap();
            assert_eq!(selection.file_name(), file.name);
            assert_eq!(selection.torrent(), &torrent);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = Selection::new(torrent_x(), 2).unwrap_err();
        assert_eq!(
            err,
            SelectionError::FileIndexOutOfRange {
                torrent: "X".to_string(),
                index: 2,
                len: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "file index 2 out of range for torrent 'X' (2 files)"
        );
    }

    #[test]
    fn test_torrent_without_files_cannot_be_selected() {
        let torrent = Torrent::new("empty", "00", Vec::new());
        assert!(Selection::new(torrent, 0).is_err());
    }

    #[test]
    fn test_reselect_replaces_wholesale() {
        let first = Selection::new(torrent_x(), 0).unwrap();
        let mut other = torrent_x();
        other.name = "Y".to_string();
        other.info_hash = "59".to_string();
        let second = Selection::new(other, 1).unwrap();

        let mut current = Some(first.clone());
        assert!(current.as_ref().is_some_and(|s| s.is("58", 0)));
        current.replace(second);
        assert_eq!(current.as_ref().map(|s| s.torrent_name()), Some("Y"));
        // The earlier value is untouched
        assert_eq!(first.torrent_name(), "X");
        assert_eq!(first.file_name(), "a.mp4");
    }
}
