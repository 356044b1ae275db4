//! Browser-side integrations.
//!
//! This module provides:
//! - [`VideoJs`] playback engine bound to the global `videojs` function
//! - [`error`] types for engine failures

pub mod error;
mod videojs;

pub use videojs::VideoJs;
