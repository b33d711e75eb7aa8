//! Uploaded image types for the upload-list editor.

use crate::utils::ObjectUrl;

/// Identifier of an uploaded image, unique within its list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u64);

/// Metadata kept from the original `File`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileInfo {
    /// Read name, type and size from a browser file.
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
        }
    }
}

/// One entry of the upload list.
#[derive(Debug)]
pub struct UploadedImage {
    pub id: ImageId,
    /// Owned object URL; released when the entry leaves the list.
    pub url: ObjectUrl,
    pub file: FileInfo,
}

/// Render snapshot of an [`UploadedImage`].
///
/// Carries a copy of the URL text, never the owning handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadView {
    pub id: ImageId,
    pub src: String,
    pub name: String,
}

impl From<&UploadedImage> for UploadView {
    fn from(image: &UploadedImage) -> Self {
        Self {
            id: image.id,
            src: image.url.as_str().to_string(),
            name: image.file.name.clone(),
        }
    }
}
