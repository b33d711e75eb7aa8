//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`ObjectUrl`] - Owned `blob:` URL revoked on drop
//! - [`dom`] - Window, focus, file intake and clipboard helpers

pub mod dom;
pub mod object_url;

pub use object_url::ObjectUrl;
