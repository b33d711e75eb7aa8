//! Toolbar above the editor: grid type, background color and embed export.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::color_picker::ColorPicker;
use crate::components::icons as ic;
use crate::config::COPIED_RESET_MS;
use crate::models::{GridType, HexColor};
use crate::utils::dom::write_clipboard_text;

stylance::import_crate_style!(css, "src/components/control_panel.module.css");

/// Toast shown after the snippet reaches the clipboard.
pub const COPIED_TOAST: &str = "Iframe code copied to clipboard!";

/// Label of the copy button.
pub fn copy_label(copied: bool) -> &'static str {
    if copied { "Copied!" } else { "Copy iframe" }
}

/// Revert the "Copied!" indicator after `COPIED_RESET_MS`.
///
/// Each copy schedules its own reset; a later click does not postpone an
/// earlier timer.
pub fn schedule_copied_reset(copied: RwSignal<bool>) {
    Timeout::new(COPIED_RESET_MS, move || {
        let _ = copied.try_set(false);
    })
    .forget();
}

#[component]
pub fn ControlPanel(
    #[prop(into)] background: Signal<HexColor>,
    on_background_change: Callback<HexColor>,
    #[prop(into)] grid_type: Signal<GridType>,
    on_grid_type_change: Callback<GridType>,
    /// Produces the embed snippet for the current design.
    on_generate_iframe: Callback<(), String>,
    /// Hidden for the upload-list editor, which has no fixed grid.
    #[prop(default = true)]
    show_grid_toggle: bool,
) -> impl IntoView {
    view! {
        <div class=css::panel>
            {show_grid_toggle.then(|| view! {
                <GridTypeToggle grid_type=grid_type on_change=on_grid_type_change />
            })}
            <ColorPicker color=background on_change=on_background_change />
            <CopyIframeButton on_generate=on_generate_iframe />
        </div>
    }
}

/// Segmented 2×2 / 3×3 switch.
#[component]
fn GridTypeToggle(grid_type: Signal<GridType>, on_change: Callback<GridType>) -> impl IntoView {
    view! {
        <div class=css::toggle role="radiogroup" aria-label="Grid type">
            {GridType::ALL
                .into_iter()
                .map(|option| {
                    let active = move || grid_type.get() == option;
                    view! {
                        <button
                            type="button"
                            role="radio"
                            class=move || {
                                if active() {
                                    format!("{} {}", css::toggleOption, css::toggleOptionActive)
                                } else {
                                    css::toggleOption.to_string()
                                }
                            }
                            aria-checked=move || active().to_string()
                            on:click=move |_| {
                                if !active() {
                                    on_change.run(option);
                                }
                            }
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Copies the embed snippet and briefly shows a confirmation.
#[component]
fn CopyIframeButton(on_generate: Callback<(), String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let copied = RwSignal::new(false);

    let on_click = move |_: leptos::ev::MouseEvent| {
        let snippet = on_generate.run(());
        spawn_local(async move {
            match write_clipboard_text(&snippet).await {
                Ok(()) => {
                    log::info!("copied embed snippet ({} bytes)", snippet.len());
                    let _ = copied.try_set(true);
                    ctx.toasts.success(COPIED_TOAST);
                    schedule_copied_reset(copied);
                }
                Err(err) => {
                    log::warn!("copy failed: {err}");
                    ctx.toasts.error(format!("Could not copy iframe: {err}"));
                }
            }
        });
    };

    view! {
        <button type="button" class=css::copyButton on:click=on_click>
            {move || {
                if copied.get() {
                    view! { <Icon icon=ic::COPIED /> }.into_any()
                } else {
                    view! { <Icon icon=ic::COPY /> }.into_any()
                }
            }}
            <span>{move || copy_label(copied.get())}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_label() {
        assert_eq!(copy_label(false), "Copy iframe");
        assert_eq!(copy_label(true), "Copied!");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_copied_indicator_reverts_after_delay() {
        let copied = RwSignal::new(true);
        schedule_copied_reset(copied);

        TimeoutFuture::new(COPIED_RESET_MS - 200).await;
        assert_eq!(copy_label(copied.get_untracked()), "Copied!");

        TimeoutFuture::new(400).await;
        assert_eq!(copy_label(copied.get_untracked()), "Copy iframe");
    }

    #[wasm_bindgen_test]
    async fn test_each_copy_resets_on_its_own_schedule() {
        let copied = RwSignal::new(true);
        schedule_copied_reset(copied);
        TimeoutFuture::new(1000).await;

        // Second copy inside the window; the first timer still fires at 2000ms.
        copied.set(true);
        schedule_copied_reset(copied);
        TimeoutFuture::new(1200).await;
        assert!(!copied.get_untracked());
    }
}
