//! UI components built with Leptos.
//!
//! - [`navbar`] - Static navigation bar
//! - [`player`] - Video player wrapping video.js
//! - [`menu`] - Torrent list with per-file selection
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod menu;
pub mod navbar;
pub mod player;

pub use menu::TorrentMenu;
pub use navbar::NavBar;
pub use player::VideoPlayer;
