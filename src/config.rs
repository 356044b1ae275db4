//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The mock torrent catalog is loaded at compile time using `include_str!`.

use torrentplay_core::{PlayerConfig, Preload, SourceError, StaticSource, Torrent, TorrentSource};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar.
pub const APP_NAME: &str = "torrentplay";

/// Id of the page element the application mounts into.
pub const ROOT_ELEMENT_ID: &str = "root";

/// Navigation bar links as `(label, href)` pairs.
pub const NAV_LINKS: &[(&str, &str)] = &[("Link 1", "#"), ("Link 2", "#"), ("Link 3", "#")];

// =============================================================================
// Player Configuration
// =============================================================================

/// Media query under which the compact player layout is used.
pub const COMPACT_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Player options for desktop layouts.
pub fn player_config() -> PlayerConfig {
    PlayerConfig {
        controls: true,
        autoplay: false,
        preload: Preload::Auto,
        width: 1800,
        height: None,
        fluid: false,
    }
}

/// Player options for narrow screens: scale to the container.
pub fn compact_player_config() -> PlayerConfig {
    PlayerConfig {
        width: 640,
        fluid: true,
        ..player_config()
    }
}

// =============================================================================
// Torrent Data
// =============================================================================

/// Mock torrent catalog bundled with the app.
pub const MOCK_CATALOG: &str = include_str!("../assets/mock/torrents.toml");

/// Get the torrent source the application reads from.
///
/// Currently the bundled mock catalog. A parse failure is reported when the
/// list is requested so it reaches the root error boundary.
pub fn torrent_source() -> Box<dyn TorrentSource> {
    match StaticSource::from_toml(MOCK_CATALOG) {
        Ok(source) => Box::new(source),
        Err(err) => Box::new(BrokenSource(err)),
    }
}

/// Source whose catalog failed to load.
struct BrokenSource(SourceError);

impl TorrentSource for BrokenSource {
    fn torrents(&self) -> Result<Vec<Torrent>, SourceError> {
        Err(self.0.clone())
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_catalog_loads() {
        let torrents = torrent_source().torrents().unwrap();
        assert_eq!(torrents.len(), 2);
        assert_eq!(torrents[0].name, "torrent1");
        assert_eq!(torrents[0].files[1].name, "file2");
        assert_eq!(torrents[1].files[0].name, "file3");
    }

    #[test]
    fn test_compact_config_is_fluid() {
        let compact = compact_player_config();
        assert!(compact.fluid);
        assert_eq!(compact.controls, player_config().controls);
        assert_eq!(player_config(), PlayerConfig::default());
    }
}
