//! Unbounded, insertion-ordered image list.
//!
//! Entries own their object URLs, so every way an entry can leave the list
//! (single removal, clear, dropping the list) revokes its URL.

use crate::models::{FileInfo, ImageId, UploadView, UploadedImage};
use crate::utils::ObjectUrl;

/// Whether a file with this MIME type may be added.
///
/// Drag-and-drop ignores the picker's `accept` attribute, so this is checked
/// for every incoming file.
pub fn is_accepted_mime(mime: &str) -> bool {
    mime.starts_with("image/") || mime == "video/gif"
}

/// Confirmation shown after adding `count` images.
pub fn upload_message(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("Image uploaded successfully!".to_string()),
        n => Some(format!("{n} images uploaded successfully!")),
    }
}

/// Confirmation shown after removing an image.
pub const REMOVED_MESSAGE: &str = "Image removed";

/// Nesting depth of `dragenter`/`dragleave` pairs over a drop zone.
///
/// Moving onto a child fires the child's `dragenter` before the zone's
/// `dragleave`, so the zone is only left once every enter is matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragDepth(u32);

impl DragDepth {
    pub fn enter(&mut self) {
        self.0 += 1;
    }

    pub fn leave(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Drop ends the drag regardless of depth.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn is_active(self) -> bool {
        self.0 > 0
    }
}

#[derive(Debug, Default)]
pub struct UploadList {
    images: Vec<UploadedImage>,
    next_id: u64,
}

impl UploadList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Append an image with a fresh id.
    pub fn push(&mut self, url: ObjectUrl, file: FileInfo) -> ImageId {
        let id = ImageId(self.next_id);
        self.next_id += 1;
        self.images.push(UploadedImage { id, url, file });
        id
    }

    /// Remove the entry with `id`, keeping the others in order.
    ///
    /// Returns `false` if no entry matched.
    pub fn remove(&mut self, id: ImageId) -> bool {
        let before = self.images.len();
        self.images.retain(|image| image.id != id);
        self.images.len() != before
    }

    /// Remove every entry. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.images.len();
        self.images.clear();
        removed
    }

    /// Snapshots for rendering, in insertion order.
    pub fn views(&self) -> Vec<UploadView> {
        self.images.iter().map(UploadView::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::utils::object_url::revoked;

    fn info(name: &str) -> FileInfo {
        FileInfo {
            name: name.to_string(),
            mime: "image/png".to_string(),
            size: 1024,
        }
    }

    fn list_of(names: &[&str]) -> (UploadList, Vec<ImageId>) {
        let mut list = UploadList::new();
        let ids = names
            .iter()
            .map(|name| list.push(ObjectUrl::from_raw(format!("blob:{name}")), info(name)))
            .collect();
        (list, ids)
    }

    fn names(list: &UploadList) -> Vec<String> {
        list.views().into_iter().map(|v| v.name).collect()
    }

    #[test]
    fn test_upload_message() {
        assert_eq!(upload_message(0), None);
        assert_eq!(
            upload_message(1).as_deref(),
            Some("Image uploaded successfully!")
        );
        assert_eq!(
            upload_message(3).as_deref(),
            Some("3 images uploaded successfully!")
        );
    }

    #[test]
    fn test_accepted_mime() {
        assert!(is_accepted_mime("image/png"));
        assert!(is_accepted_mime("image/gif"));
        assert!(is_accepted_mime("video/gif"));
        assert!(!is_accepted_mime("video/mp4"));
        assert!(!is_accepted_mime("text/plain"));
        assert!(!is_accepted_mime(""));
    }

    #[test]
    fn test_push_assigns_unique_ids_in_order() {
        let (list, ids) = list_of(&["a.png", "b.png", "c.png"]);
        assert_eq!(list.len(), 3);
        assert_eq!(names(&list), ["a.png", "b.png", "c.png"]);

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let (mut list, ids) = list_of(&["a.png", "b.png"]);
        list.remove(ids[1]);
        let next = list.push(ObjectUrl::from_raw("blob:c"), info("c.png"));
        assert!(!ids.contains(&next));
    }

    #[test]
    fn test_remove_exactly_one_and_release_it() {
        let (mut list, ids) = list_of(&["a.png", "b.png", "c.png"]);
        revoked::take();

        assert!(list.remove(ids[1]));
        assert_eq!(names(&list), ["a.png", "c.png"]);
        assert_eq!(revoked::take(), ["blob:b.png"]);
    }

    #[test]
    fn test_remove_unknown_id() {
        let (mut list, _) = list_of(&["a.png"]);
        revoked::take();

        assert!(!list.remove(ImageId(99)));
        assert_eq!(list.len(), 1);
        assert!(revoked::take().is_empty());
    }

    #[test]
    fn test_clear_releases_everything() {
        let (mut list, _) = list_of(&["a.png", "b.png"]);
        revoked::take();

        assert_eq!(list.clear(), 2);
        assert!(list.is_empty());
        assert_eq!(revoked::take(), ["blob:a.png", "blob:b.png"]);
    }

    #[test]
    fn test_views_copy_url_text() {
        let (list, ids) = list_of(&["a.png"]);
        let views = list.views();
        assert_eq!(views[0].id, ids[0]);
        assert_eq!(views[0].src, "blob:a.png");
        drop(views);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_drag_depth_survives_child_enter() {
        let mut depth = DragDepth::default();
        assert!(!depth.is_active());

        depth.enter();
        // Pointer moves onto a child: child enter, then zone leave.
        depth.enter();
        depth.leave();
        assert!(depth.is_active());

        depth.leave();
        assert!(!depth.is_active());

        depth.leave();
        assert!(!depth.is_active());
        depth.enter();
        assert!(depth.is_active());
    }

    #[test]
    fn test_drag_depth_reset_on_drop() {
        let mut depth = DragDepth::default();
        depth.enter();
        depth.enter();
        depth.reset();
        assert!(!depth.is_active());
    }
}
