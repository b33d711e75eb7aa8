//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, Window};

use super::ObjectUrl;
use crate::core::error::{ClipboardError, UploadError};
use crate::core::is_accepted_mime;
use crate::models::FileInfo;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

// =============================================================================
// Focus
// =============================================================================

/// Check whether focus moved outside the element the listener is attached to.
///
/// Used by popovers and dropdown menus to close on `focusout`. Focus leaving
/// the document entirely (no related target) also counts as outside.
pub fn focus_left_current_target(event: &web_sys::FocusEvent) -> bool {
    let Some(related) = event.related_target() else {
        return true;
    };
    let Some(current) = event.current_target() else {
        return true;
    };
    match (
        current.dyn_ref::<web_sys::Node>(),
        related.dyn_ref::<web_sys::Node>(),
    ) {
        (Some(wrapper), Some(target)) => !wrapper.contains(Some(target)),
        _ => true,
    }
}

// =============================================================================
// Files
// =============================================================================

/// Collect a `FileList` into owned handles.
pub fn file_list_to_vec(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// Files chosen in an `<input type="file">` change event.
///
/// Clears the input afterwards so choosing the same file again still fires
/// `change`.
pub fn files_from_input_event(event: &web_sys::Event) -> Vec<File> {
    let Some(input) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = input
        .files()
        .map(|list| file_list_to_vec(&list))
        .unwrap_or_default();
    input.set_value("");
    files
}

/// Files carried by a drop event.
pub fn files_from_drop_event(event: &web_sys::DragEvent) -> Vec<File> {
    event
        .data_transfer()
        .and_then(|dt| dt.files())
        .map(|list| file_list_to_vec(&list))
        .unwrap_or_default()
}

/// Validate an incoming file and give it an object URL.
pub fn prepare_image(file: &File) -> Result<(ObjectUrl, FileInfo), UploadError> {
    let info = FileInfo::from_file(file);
    if !is_accepted_mime(&info.mime) {
        return Err(UploadError::UnsupportedType {
            name: info.name,
            mime: info.mime,
        });
    }
    let url = ObjectUrl::for_file(file)?;
    Ok((url, info))
}

// =============================================================================
// Clipboard
// =============================================================================

/// Write text to the system clipboard.
pub async fn write_clipboard_text(text: &str) -> Result<(), ClipboardError> {
    let window = window().ok_or(ClipboardError::NoWindow)?;
    let navigator = window.navigator();

    // Looked up dynamically: `navigator.clipboard` is absent outside secure contexts.
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or(ClipboardError::Unavailable)?
        .unchecked_into::<web_sys::Clipboard>();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| {
            ClipboardError::WriteRejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
        })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    enum FocusTo {
        Wheel,
        Outside,
        Nowhere,
    }

    /// Dispatch a bubbling `focusout` from a picker's trigger and return what a
    /// listener on the picker wrapper decided.
    fn picker_focusout(to: FocusTo) -> Option<bool> {
        let document = window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        let picker = document.create_element("div").unwrap();
        let trigger = document.create_element("button").unwrap();
        let wheel = document.create_element("div").unwrap();
        wheel.set_attribute("role", "button").unwrap();
        wheel.set_attribute("tabindex", "0").unwrap();
        let outside = document.create_element("button").unwrap();
        picker.append_child(&trigger).unwrap();
        picker.append_child(&wheel).unwrap();
        body.append_child(&picker).unwrap();
        body.append_child(&outside).unwrap();

        let seen = Rc::new(Cell::new(None));
        let record = seen.clone();
        let listener = Closure::<dyn FnMut(web_sys::FocusEvent)>::new(
            move |event: web_sys::FocusEvent| record.set(Some(focus_left_current_target(&event))),
        );
        picker
            .add_event_listener_with_callback("focusout", listener.as_ref().unchecked_ref())
            .unwrap();

        let init = web_sys::FocusEventInit::new();
        init.set_bubbles(true);
        match to {
            FocusTo::Wheel => init.set_related_target(Some(wheel.as_ref())),
            FocusTo::Outside => init.set_related_target(Some(outside.as_ref())),
            FocusTo::Nowhere => init.set_related_target(None),
        }
        let event = web_sys::FocusEvent::new_with_focus_event_init_dict("focusout", &init).unwrap();
        trigger.dispatch_event(&event).unwrap();

        picker.remove();
        outside.remove();
        seen.get()
    }

    #[wasm_bindgen_test]
    fn test_focus_moving_to_wheel_stays_inside() {
        assert_eq!(picker_focusout(FocusTo::Wheel), Some(false));
    }

    #[wasm_bindgen_test]
    fn test_focus_moving_outside_leaves() {
        assert_eq!(picker_focusout(FocusTo::Outside), Some(true));
        assert_eq!(picker_focusout(FocusTo::Nowhere), Some(true));
    }
}
