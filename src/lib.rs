//! Browser UI for a torrent-streaming media player.
//!
//! Built with Leptos (client-side rendering). The domain model lives in
//! `torrentplay-core`; this crate holds the components and the video.js
//! binding.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod utils;

pub use app::App;
