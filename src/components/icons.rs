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
        LuCopy as CopyText, LuCopyCheck as Copied, LuImage as Image, LuPalette as Palette,
        LuSquareX as Remove, LuTrash2 as Trash, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsClipboard as CopyText, BsClipboardCheck as Copied, BsImage as Image, BsPalette as Palette,
        BsTrash as Trash, BsUpload as Upload, BsXLg as Close, BsXSquare as Remove,
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

themed_icon!(PALETTE, Palette);
themed_icon!(IMAGE, Image);
themed_icon!(REMOVE, Remove);
themed_icon!(COPY, CopyText);
themed_icon!(COPIED, Copied);
themed_icon!(UPLOAD, Upload);
themed_icon!(TRASH, Trash);
themed_icon!(CLOSE, Close);
