//! Page header with brand and navigation buttons.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Top bar: brand on the left, About / Templates / Share on the right.
#[component]
pub fn Header() -> impl IntoView {
    let nav_click = |label: &'static str| {
        move |_: leptos::ev::MouseEvent| log::debug!("{label} clicked")
    };

    view! {
        <header class=css::header>
            <div class=css::brand>
                <span class=css::brandIcon><Icon icon=ic::PALETTE /></span>
                <span class=css::brandName>{APP_NAME}</span>
            </div>
            <nav class=css::actions>
                <button type="button" class=css::button on:click=nav_click("About")>
                    "About"
                </button>
                <button type="button" class=css::button on:click=nav_click("Templates")>
                    "Templates"
                </button>
                <button
                    type="button"
                    class=format!("{} {}", css::button, css::buttonPrimary)
                    on:click=nav_click("Share")
                >
                    "Share"
                </button>
            </nav>
        </header>
    }
}
