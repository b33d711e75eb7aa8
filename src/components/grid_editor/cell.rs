//! Single grid slot.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::config::IMAGE_ACCEPT;
use crate::utils::ObjectUrl;
use crate::utils::dom::{files_from_input_event, focus_left_current_target, prepare_image};

/// Shows an image or an "Add image" placeholder.
///
/// Hovering a filled cell reveals an Edit menu with Replace and Remove.
/// Remove reports `None`, leaving the slot empty.
#[component]
pub fn Cell(
    #[prop(into)] image: Signal<Option<String>>,
    on_image_change: Callback<Option<ObjectUrl>>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let open_picker = move || {
        set_menu_open.set(false);
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        // Cancelled dialog: nothing selected.
        let Some(file) = files_from_input_event(&ev).into_iter().next() else {
            return;
        };
        match prepare_image(&file) {
            Ok((url, info)) => {
                log::debug!("cell image {} ({} bytes)", info.name, info.size);
                on_image_change.run(Some(url));
            }
            Err(err) => log::warn!("skipping cell image: {err}"),
        }
    };

    let on_remove = move |_: leptos::ev::MouseEvent| {
        set_menu_open.set(false);
        on_image_change.run(None);
    };

    let on_menu_focusout = move |event: web_sys::FocusEvent| {
        if focus_left_current_target(&event) {
            set_menu_open.set(false);
        }
    };

    let has_image = move || image.with(Option::is_some);

    view! {
        <div
            class=css::cell
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| {
                set_hovered.set(false);
                set_menu_open.set(false);
            }
        >
            <Show
                when=has_image
                fallback=move || view! {
                    <button type="button" class=css::emptyCell on:click=move |_| open_picker()>
                        <span class=css::emptyIcon><Icon icon=ic::IMAGE /></span>
                        <span class=css::emptyLabel>"Add image"</span>
                    </button>
                }
            >
                <img
                    class=css::cellImage
                    src=move || image.get().unwrap_or_default()
                    alt="Grid cell content"
                />
                <Show when=move || hovered.get()>
                    <div class=css::overlay on:focusout=on_menu_focusout>
                        <button
                            type="button"
                            class=css::editButton
                            aria-haspopup="menu"
                            on:click=move |_| set_menu_open.update(|v| *v = !*v)
                        >
                            "Edit"
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class=css::menu role="menu">
                                <button
                                    type="button"
                                    role="menuitem"
                                    class=css::menuItem
                                    on:click=move |_| open_picker()
                                >
                                    <Icon icon=ic::IMAGE />
                                    <span>"Replace image"</span>
                                </button>
                                <button
                                    type="button"
                                    role="menuitem"
                                    class=css::menuItem
                                    on:click=on_remove
                                >
                                    <Icon icon=ic::REMOVE />
                                    <span>"Remove image"</span>
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </Show>
            <input
                node_ref=input_ref
                type="file"
                class=css::hiddenInput
                accept=IMAGE_ACCEPT
                on:change=on_file_change
            />
        </div>
    }
}
