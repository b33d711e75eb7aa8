//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`HexColor`], [`Hsl`] - Background color values
//! - [`GridType`], [`GridCell`] - Fixed grid layout
//! - [`UploadedImage`], [`ImageId`], [`FileInfo`] - Upload-list entries
//! - [`ToastQueue`], [`ToastKind`] - Notifications

mod color;
mod grid;
mod toast;
mod upload;

pub use color::{HexColor, Hsl};
pub use grid::{GridCell, GridType};
pub use toast::{ToastKind, ToastQueue};
pub use upload::{FileInfo, ImageId, UploadView, UploadedImage};
