//! Page shell.
//!
//! Owns the canonical editor state (background color and grid type) and wires
//! it through the control panel and the editor selected by `EDITOR_VARIANT`.

use leptos::prelude::*;

use crate::components::control_panel::ControlPanel;
use crate::components::footer::Footer;
use crate::components::grid_editor::GridEditor;
use crate::components::header::Header;
use crate::components::toaster::Toaster;
use crate::components::upload_list::UploadEditor;
use crate::config::{EDITOR_VARIANT, EditorVariant, PAGE_DESCRIPTION, PAGE_TITLE};
use crate::core::iframe_snippet;
use crate::models::{GridType, HexColor};

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn Page() -> impl IntoView {
    let background = RwSignal::new(HexColor::default());
    let grid_type = RwSignal::new(GridType::default());

    let on_background_change = Callback::new(move |color: HexColor| {
        log::debug!("background color -> {color}");
        background.set(color);
    });
    let on_grid_type_change = Callback::new(move |next: GridType| {
        log::debug!("grid type -> {next}");
        grid_type.set(next);
    });
    let generate_iframe = Callback::new(move |()| background.with_untracked(iframe_snippet));
    let show_grid_toggle = EDITOR_VARIANT == EditorVariant::Grid;

    let editor = match EDITOR_VARIANT {
        EditorVariant::Grid => {
            view! { <GridEditor grid_type=grid_type background=background /> }.into_any()
        }
        EditorVariant::UploadList => view! { <UploadEditor background=background /> }.into_any(),
    };

    view! {
        <div class=css::page>
            <Toaster />
            <Header />
            <main class=css::main>
                <div class=css::content>
                    <h1 class=css::title>{PAGE_TITLE}</h1>
                    <p class=css::description>{PAGE_DESCRIPTION}</p>
                    <ControlPanel
                        background=background
                        on_background_change=on_background_change
                        grid_type=grid_type
                        on_grid_type_change=on_grid_type_change
                        on_generate_iframe=generate_iframe
                        show_grid_toggle=show_grid_toggle
                    />
                    {editor}
                </div>
            </main>
            <Footer />
        </div>
    }
}
