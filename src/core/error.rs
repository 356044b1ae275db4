//! Custom error types for the application.
//!
//! - [`EngineError`] - video.js lookup and player creation errors

use std::fmt;

/// Playback engine errors for the video.js integration.
#[derive(Debug, Clone)]
pub enum EngineError {
    /// Browser window not available
    NoWindow,
    /// `window.videojs` is missing (script not loaded)
    NotLoaded,
    /// Player options could not be converted to a JS object
    InvalidOptions(String),
    /// video.js threw while creating the player
    InitFailed(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NotLoaded => write!(f, "video.js is not loaded"),
            Self::InvalidOptions(msg) => write!(f, "Invalid player options: {}", msg),
            Self::InitFailed(msg) => write!(f, "Player initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_messages() {
        assert_eq!(EngineError::NotLoaded.to_string(), "video.js is not loaded");
        assert_eq!(
            EngineError::InitFailed("boom".to_string()).to_string(),
            "Player initialization failed: boom"
        );
        assert_eq!(
            EngineError::InvalidOptions("bad".to_string()).to_string(),
            "Invalid player options: bad"
        );
    }
}
