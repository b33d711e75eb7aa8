//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header and footer.
pub const APP_NAME: &str = "GridForge";

/// Tagline displayed in the footer.
pub const APP_TAGLINE: &str = "Design beautiful grid layouts with ease";

/// Page title above the control panel.
pub const PAGE_TITLE: &str = "Create Your Grid Design";

/// Lead paragraph under the page title.
pub const PAGE_DESCRIPTION: &str = "Design beautiful grid layouts with custom backgrounds and media. \
     Perfect for portfolios, galleries, and presentations.";

// =============================================================================
// Embed Configuration
// =============================================================================

/// Embed snippet settings.
pub mod embed {
    /// Base URL the generated iframe points at.
    pub const BASE_URL: &str = "https://gridforge.app/embed";
    /// Iframe `width` attribute.
    pub const WIDTH: &str = "100%";
    /// Iframe `height` attribute.
    pub const HEIGHT: &str = "500";
}

// =============================================================================
// Color Configuration
// =============================================================================

/// Background color used on first load.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// Preset swatches offered by the color picker.
pub const PRESET_COLORS: &[&str] = &[
    "#FFFFFF", // White
    "#F8F9FA", // Light gray
    "#E9ECEF", // Off-white
    "#DEE2E6", // Light gray
    "#F2E9FF", // Light purple
    "#E5DEFF", // Soft purple
    "#C7BCFF", // Lilac
    "#F1F0FB", // Soft gray
    "#F7F7F7", // Almost white
];

/// Lightness used for every color picked from the hue wheel (percent).
pub const WHEEL_LIGHTNESS: f64 = 50.0;

// =============================================================================
// File Intake
// =============================================================================

/// `accept` attribute for file pickers.
pub const IMAGE_ACCEPT: &str = "image/*,video/gif";

// =============================================================================
// Timing (milliseconds)
// =============================================================================

/// Delay before the "Copied!" indicator reverts.
pub const COPIED_RESET_MS: u32 = 2000;

/// Lifetime of a toast notification.
pub const TOAST_DURATION_MS: u32 = 4000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

/// Which grid editor the page renders.
///
/// - `Grid` - fixed 2×2 / 3×3 cells with per-cell upload (default)
/// - `UploadList` - unbounded drag-and-drop image list with a color preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum EditorVariant {
    #[default]
    Grid,
    UploadList,
}

/// Editor variant rendered by the page shell.
pub const EDITOR_VARIANT: EditorVariant = EditorVariant::Grid;
