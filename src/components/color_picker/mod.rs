//! Background color picker.
//!
//! A trigger button opens a popover offering four ways to pick a color:
//! - the browser's native color dialog
//! - a hex text field with validation ([`HexDraft`])
//! - a [`HueWheel`] click
//! - [`PresetPalette`] swatches
//!
//! Every confirmed pick is reported through `on_change`; the picker never
//! holds the committed color itself.

mod presets;
mod wheel;

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::components::icons as ic;
use crate::core::{HexDraft, is_valid_hex};
use crate::models::HexColor;
use crate::utils::dom::focus_left_current_target;

use presets::PresetPalette;
use wheel::HueWheel;

stylance::import_crate_style!(css, "src/components/color_picker/color_picker.module.css");

fn input_value(ev: &leptos::ev::Event) -> Option<String> {
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    Some(input.value())
}

#[component]
pub fn ColorPicker(
    #[prop(into)] color: Signal<HexColor>,
    on_change: Callback<HexColor>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let on_focusout = move |event: web_sys::FocusEvent| {
        if focus_left_current_target(&event) {
            set_open.set(false);
        }
    };

    view! {
        <div class=css::picker on:focusout=on_focusout>
            <button
                type="button"
                class=css::trigger
                aria-label="Change background color"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                <span
                    class=css::swatch
                    style=move || format!("background-color: {}", color.get())
                ></span>
                <Icon icon=ic::PALETTE />
                <span class=css::triggerLabel>"Background"</span>
            </button>
            <Show when=move || open.get()>
                <div class=css::popover>
                    <div class=css::section>
                        <label class=css::sectionLabel for="color-picker">"Custom Color"</label>
                        <NativeColorInput color=color on_change=on_change />
                        <HexField color=color on_change=on_change />
                    </div>
                    <div class=css::section>
                        <span class=css::sectionLabel>"Color Wheel"</span>
                        <HueWheel on_pick=on_change />
                    </div>
                    <div class=css::section>
                        <span class=css::sectionLabel>"Presets"</span>
                        <PresetPalette color=color on_pick=on_change />
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Browser color dialog. Every change commits.
#[component]
fn NativeColorInput(color: Signal<HexColor>, on_change: Callback<HexColor>) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        let Some(value) = input_value(&ev) else { return };
        match HexColor::parse(&value) {
            Ok(picked) => on_change.run(picked),
            Err(err) => log::warn!("color dialog returned {value:?}: {err}"),
        }
    };

    view! {
        <input
            id="color-picker"
            type="color"
            class=css::nativeInput
            prop:value=move || color.with(HexColor::to_rrggbb)
            on:input=on_input
        />
    }
}

/// Hex text field mirroring the committed color.
///
/// Typing commits as soon as the text is a valid hex color; leaving the field
/// with invalid text restores the committed color.
#[component]
fn HexField(color: Signal<HexColor>, on_change: Callback<HexColor>) -> impl IntoView {
    let draft = RwSignal::new(HexDraft::new(&color.get_untracked()));

    // Follow commits made through the other controls.
    Effect::new(move || {
        let committed = color.get();
        draft.update(|d| d.sync(&committed));
    });

    let on_input = move |ev: leptos::ev::Event| {
        let Some(value) = input_value(&ev) else { return };
        if let Some(committed) = draft.try_update(|d| d.input(value)).flatten() {
            on_change.run(committed);
        }
    };

    let on_blur = move |_: web_sys::FocusEvent| {
        let committed = color.get_untracked();
        draft.update(|d| d.blur(&committed));
    };

    let invalid = Signal::derive(move || draft.with(|d| !is_valid_hex(d.text())));

    view! {
        <input
            type="text"
            class=move || {
                if invalid.get() {
                    format!("{} {}", css::hexInput, css::hexInputInvalid)
                } else {
                    css::hexInput.to_string()
                }
            }
            aria-label="Hex color"
            aria-invalid=move || invalid.get().to_string()
            spellcheck="false"
            autocomplete="off"
            maxlength="7"
            placeholder="#FFFFFF"
            prop:value=move || draft.with(|d| d.text().to_string())
            on:input=on_input
            on:blur=on_blur
        />
    }
}
