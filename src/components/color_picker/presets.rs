//! Preset swatch palette.

use leptos::prelude::*;

use super::css;
use crate::config::PRESET_COLORS;
use crate::models::HexColor;

#[component]
pub fn PresetPalette(color: Signal<HexColor>, on_pick: Callback<HexColor>) -> impl IntoView {
    let presets = PRESET_COLORS
        .iter()
        .filter_map(|preset| HexColor::parse(preset).ok())
        .map(|preset| {
            let style = format!("background-color: {preset}");
            let label = format!("Select color {preset}");
            let selected = {
                let preset = preset.clone();
                move || color.with(|c| c.same_color(&preset))
            };
            view! {
                <button
                    type="button"
                    class=move || {
                        if selected() {
                            format!("{} {}", css::preset, css::presetSelected)
                        } else {
                            css::preset.to_string()
                        }
                    }
                    style=style
                    aria-label=label
                    on:click=move |_| on_pick.run(preset.clone())
                ></button>
            }
        })
        .collect_view();

    view! { <div class=css::presets>{presets}</div> }
}
