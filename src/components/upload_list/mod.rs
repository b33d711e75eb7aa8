//! Upload-list editor.
//!
//! Files arrive through the picker or by drag-and-drop and are appended to an
//! [`UploadList`]. Entries own their object URLs; removing an entry (or
//! clearing the list) releases them.

use leptos::prelude::*;
use leptos_icons::Icon;
use web_sys::File;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::IMAGE_ACCEPT;
use crate::core::{DragDepth, REMOVED_MESSAGE, UploadList, upload_message};
use crate::models::{HexColor, ImageId};
use crate::utils::dom::{files_from_drop_event, files_from_input_event, prepare_image};

stylance::import_crate_style!(css, "src/components/upload_list/upload_list.module.css");

#[component]
pub fn UploadEditor(#[prop(into)] background: Signal<HexColor>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let images = RwSignal::new(UploadList::new());
    let drag_depth = RwSignal::new(DragDepth::default());
    let dragging = Memo::new(move |_| drag_depth.get().is_active());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let add_files = move |files: Vec<File>| {
        let prepared: Vec<_> = files
            .iter()
            .filter_map(|file| {
                prepare_image(file)
                    .inspect_err(|err| log::warn!("skipping upload: {err}"))
                    .ok()
            })
            .collect();
        let added = prepared.len();
        if added == 0 {
            return;
        }
        images.update(|list| {
            for (url, info) in prepared {
                let id = list.push(url, info);
                log::debug!("uploaded image {id:?}");
            }
        });
        if let Some(message) = upload_message(added) {
            ctx.toasts.success(message);
        }
    };

    let remove = move |id: ImageId| {
        if images.try_update(|list| list.remove(id)).unwrap_or(false) {
            log::debug!("removed image {id:?}");
            ctx.toasts.success(REMOVED_MESSAGE);
        }
    };

    let clear = move |_: leptos::ev::MouseEvent| {
        let removed = images.try_update(UploadList::clear).unwrap_or(0);
        log::debug!("cleared {removed} images");
    };

    let on_drag_enter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_depth.update(DragDepth::enter);
    };
    // Required for the element to accept a drop.
    let on_drag_over = move |ev: leptos::ev::DragEvent| ev.prevent_default();
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_depth.update(DragDepth::leave);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_depth.update(DragDepth::reset);
        add_files(files_from_drop_event(&ev));
    };

    let on_file_change = move |ev: leptos::ev::Event| add_files(files_from_input_event(&ev));

    let browse = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let dropzone_class = move || {
        if dragging.get() {
            format!("{} {}", css::dropzone, css::dropzoneActive)
        } else {
            css::dropzone.to_string()
        }
    };

    view! {
        <div class=css::editor>
            <div
                class=dropzone_class
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <span class=css::dropIcon><Icon icon=ic::UPLOAD /></span>
                <p class=css::dropTitle>
                    {move || if dragging.get() { "Drop images here" } else { "Drag and drop images here" }}
                </p>
                <p class=css::dropHint>"or"</p>
                <button type="button" class=css::browseButton on:click=browse>
                    "Browse files"
                </button>
                <input
                    node_ref=input_ref
                    type="file"
                    class=css::hiddenInput
                    accept=IMAGE_ACCEPT
                    multiple=true
                    on:change=on_file_change
                />
            </div>

            <Show when=move || images.with(|list| !list.is_empty())>
                <div class=css::listHeader>
                    <span>
                        {move || {
                            let count = images.with(UploadList::len);
                            if count == 1 { "1 image".to_string() } else { format!("{count} images") }
                        }}
                    </span>
                    <button type="button" class=css::clearButton on:click=clear>
                        <Icon icon=ic::TRASH />
                        <span>"Clear all"</span>
                    </button>
                </div>
                <ul class=css::list>
                    <For
                        each=move || images.with(UploadList::views)
                        key=|image| image.id
                        children=move |image| {
                            let id = image.id;
                            let label = format!("Remove {}", image.name);
                            let alt = image.name.clone();
                            view! {
                                <li class=css::item>
                                    <img class=css::thumbnail src=image.src alt=alt />
                                    <span class=css::itemName>{image.name}</span>
                                    <button
                                        type="button"
                                        class=css::removeButton
                                        aria-label=label
                                        on:click=move |_| remove(id)
                                    >
                                        <Icon icon=ic::CLOSE />
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <div
                class=css::preview
                style=move || format!("background-color: {}", background.get())
            >
                <span class=css::previewLabel>
                    {move || format!("Background {}", background.get())}
                </span>
            </div>
        </div>
    }
}
