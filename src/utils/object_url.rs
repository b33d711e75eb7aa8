//! Owned `blob:` URLs.
//!
//! An [`ObjectUrl`] is created from a browser `File` and revoked when the
//! handle is dropped. Whoever holds the handle owns the URL, so removing an
//! image from a collection (or overwriting it) is enough to release it.

use crate::core::error::UploadError;

/// Owned object URL, revoked on drop.
///
/// Not `Clone`: views read the URL through [`ObjectUrl::as_str`] and must not
/// keep it beyond the owning entry.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Create an object URL pointing at the file's contents.
    pub fn for_file(file: &web_sys::File) -> Result<Self, UploadError> {
        web_sys::Url::create_object_url_with_blob(file)
            .map(Self::from_raw)
            .map_err(|_| UploadError::ObjectUrlFailed(file.name()))
    }

    /// Take ownership of an already-created URL.
    pub fn from_raw(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        log::debug!("revoking {}", self.url);
        #[cfg(target_arch = "wasm32")]
        {
            let _ = web_sys::Url::revoke_object_url(&self.url);
        }
        #[cfg(test)]
        revoked::record(&self.url);
    }
}
