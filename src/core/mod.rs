//! Core editor logic.
//!
//! This module provides:
//! - [`color`] hex validation, hue-wheel picking and the hex text draft
//! - [`GridCells`] for the fixed grid
//! - [`UploadList`] for the upload-list editor
//! - [`iframe_snippet`] for the embed export

pub mod color;
mod embed;
pub mod error;
mod grid;
mod uploads;

pub use color::{HexDraft, hsl_to_hex, is_valid_hex, wheel_pick};
pub use embed::iframe_snippet;
pub use grid::GridCells;
pub use uploads::{DragDepth, REMOVED_MESSAGE, UploadList, is_accepted_mime, upload_message};
