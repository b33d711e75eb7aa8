//! Page footer.

use leptos::prelude::*;

use crate::config::{APP_NAME, APP_TAGLINE};
use crate::utils::dom::current_year;

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class=css::footer>
            <p class=css::tagline>{format!("{APP_NAME} — {APP_TAGLINE}")}</p>
            <p class=css::copyright>{format!("© {year} {APP_NAME}")}</p>
        </footer>
    }
}
