//! Clickable hue wheel.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::css;
use crate::core::{hsl_to_hex, wheel_pick};
use crate::models::HexColor;

/// Circular hue/saturation wheel at 50% lightness.
///
/// Hue runs clockwise from the positive x-axis; saturation grows from the
/// center outwards. The gradient itself is drawn in CSS.
///
/// The wheel takes focus on mousedown so the picker's `focusout` sees it as
/// the related target and keeps the popover open until the click lands.
#[component]
pub fn HueWheel(on_pick: Callback<HexColor>) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(wheel) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = wheel.get_bounding_client_rect();
        let hsl = wheel_pick(
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
            rect.width(),
            rect.height(),
        );
        let picked = hsl_to_hex(hsl);
        log::debug!(
            "wheel pick h={:.1} s={:.1} -> {picked}",
            hsl.hue,
            hsl.saturation
        );
        on_pick.run(picked);
    };

    view! {
        <div
            class=css::wheel
            role="button"
            tabindex="0"
            aria-label="Pick a color from the wheel"
            on:click=on_click
        ></div>
    }
}
