//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as Download, LuArrowUp as Seed, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuFile as File, LuFolder as Torrent, LuPlay as Playing,
        LuVideo as Video,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDown as Download, BsArrowUp as Seed, BsCameraVideo as Video,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsFileEarmarkPlay as File, BsFolderFill as Torrent, BsPlayFill as Playing,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(DOWNLOAD, Download);
themed_icon!(FILE, File);
themed_icon!(PLAYING, Playing);
themed_icon!(SEED, Seed);
themed_icon!(TORRENT, Torrent);
themed_icon!(VIDEO, Video);
