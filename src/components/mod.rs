//! UI components built with Leptos.
//!
//! - [`Page`] - Page shell owning the editor state (main entry point)
//! - [`header`], [`footer`] - Page chrome
//! - [`control_panel`] - Grid type, background color and iframe export
//! - [`color_picker`] - Popover color picker (dialog, hex field, wheel, presets)
//! - [`grid_editor`] - Fixed 2×2 / 3×3 grid of image cells
//! - [`upload_list`] - Drag-and-drop image list
//! - [`toaster`] - Toast notifications
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod color_picker;
pub mod control_panel;
pub mod footer;
pub mod grid_editor;
pub mod header;
pub mod icons;
pub mod page;
pub mod toaster;
pub mod upload_list;

pub use page::Page;
