//! Torrent list providers.
//!
//! The UI never embeds torrent literals; it asks a [`TorrentSource`] for the
//! list. [`StaticSource`] serves a fixed list, typically parsed from a TOML
//! catalog bundled with the app.

use serde::Deserialize;

use crate::error::SourceError;
use crate::model::Torrent;

/// Anything that can hand the UI a list of torrents.
pub trait TorrentSource {
    /// Returns the torrents in display order.
    fn torrents(&self) -> Result<Vec<Torrent>, SourceError>;
}

/// A source backed by an in-memory list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticSource {
    torrents: Vec<Torrent>,
}

/// On-disk catalog layout: a list of `[[torrent]]` tables.
#[derive(Deserialize)]
struct Catalog {
    #[serde(default, rename = "torrent")]
    torrents: Vec<Torrent>,
}

impl StaticSource {
    pub fn new(torrents: Vec<Torrent>) -> Self {
        Self { torrents }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a TOML catalog.
    ///
    /// ```toml
    /// [[torrent]]
    /// name = "X"
    /// info_hash = "58"
    /// files = [{ name = "a.mp4" }, { name = "b.mp4" }]
    /// ```
    pub fn from_toml(input: &str) -> Result<Self, SourceError> {
        let catalog: Catalog = toml::from_str(input)?;

        for (i, torrent) in catalog.torrents.iter().enumerate() {
            if catalog.torrents[..i]
                .iter()
                .any(|t| t.info_hash == torrent.info_hash)
            {
                return Err(SourceError::Catalog(format!(
                    "duplicate info_hash '{}'",
                    torrent.info_hash
                )));
            }
        }

        Ok(Self::new(catalog.torrents))
    }

    pub fn len(&self) -> usize {
        self.torrents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.torrents.is_empty()
    }
}

impl TorrentSource for StaticSource {
    fn torrents(&self) -> Result<Vec<Torrent>, SourceError> {
        Ok(self.torrents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransferLabel;

    const CATALOG: &str = r#"
        [[torrent]]
        name = "torrent1"
        info_hash = "1"
        speed = 1500
        added = 1704067200
        state = { active = true, seeding = false }
        files = [{ name = "file1", size = 1000 }, { name = "file2" }]

        [[torrent]]
        name = "torrent2"
        info_hash = "2"
        files = [{ name = "file3" }, { name = "file4" }]
    "#;

    #[test]
    fn test_parse_catalog_in_order() {
        let source = StaticSource::from_toml(CATALOG).unwrap();
        let torrents = source.torrents().unwrap();
        assert_eq!(torrents.len(), 2);
        assert_eq!(torrents[0].name, "torrent1");
        assert_eq!(torrents[1].name, "torrent2");

        let names: Vec<_> = torrents[1].files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["file3", "file4"]);
    }

    #[test]
    fn test_parse_optional_fields() {
        let torrents = StaticSource::from_toml(CATALOG).unwrap().torrents().unwrap();

        let first = &torrents[0];
        assert_eq!(first.speed, 1500);
        assert_eq!(first.added, Some(1704067200));
        assert_eq!(first.state.label(), TransferLabel::Downloading);
        assert_eq!(first.files[0].size, Some(1000));
        assert_eq!(first.files[1].size, None);

        let second = &torrents[1];
        assert_eq!(second.speed, 0);
        assert_eq!(second.added, None);
        assert_eq!(second.state.label(), TransferLabel::Stopped);
    }

    #[test]
    fn test_empty_catalog() {
        let source = StaticSource::from_toml("").unwrap();
        assert_eq!(source, StaticSource::empty());
        assert!(source.is_empty());
        assert!(source.torrents().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_catalog() {
        let err = StaticSource::from_toml("[[torrent]]\nname = 3").unwrap_err();
        assert!(matches!(err, SourceError::Catalog(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let err = StaticSource::from_toml("[[torrent]]\nname = \"no hash\"").unwrap_err();
        assert!(matches!(err, SourceError::Catalog(_)));
    }

    #[test]
    fn test_duplicate_hash_rejected() {
        let input = r#"
            [[torrent]]
            name = "a"
            info_hash = "ff"

            [[torrent]]
            name = "b"
            info_hash = "ff"
        "#;
        let err = StaticSource::from_toml(input).unwrap_err();
        assert_eq!(
            err,
            SourceError::Catalog("duplicate info_hash 'ff'".to_string())
        );
    }

    #[test]
    fn test_static_source_returns_copy() {
        let source = StaticSource::new(vec![Torrent::new("X", "58", Vec::new())]);
        let mut first = source.torrents().unwrap();
        first.clear();
        assert_eq!(source.len(), 1);
        assert_eq!(source.torrents().unwrap().len(), 1);
    }
}
