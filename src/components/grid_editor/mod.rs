//! Fixed-grid editor.
//!
//! Holds one [`GridCells`] list sized by the grid type. The list is resized
//! only through [`GridCells::resize_for`], once per grid-type change; cells
//! report image changes by index.

mod cell;

use leptos::prelude::*;

use crate::core::GridCells;
use crate::models::{GridType, HexColor};
use crate::utils::ObjectUrl;

use cell::Cell;

stylance::import_crate_style!(css, "src/components/grid_editor/grid_editor.module.css");

fn grid_class(grid_type: GridType) -> String {
    let columns = match grid_type {
        GridType::TwoByTwo => css::grid2x2,
        GridType::ThreeByThree => css::grid3x3,
    };
    format!("{} {}", css::grid, columns)
}

#[component]
pub fn GridEditor(
    #[prop(into)] grid_type: Signal<GridType>,
    #[prop(into)] background: Signal<HexColor>,
) -> impl IntoView {
    let cells = RwSignal::new(GridCells::new(grid_type.get_untracked()));

    Effect::new(move || {
        let target = grid_type.get();
        if cells.with_untracked(|c| c.len()) != target.cell_count() {
            cells.update(|c| {
                c.resize_for(target);
            });
            log::debug!(
                "grid resized to {target} ({} of {} cells filled)",
                cells.with_untracked(GridCells::filled),
                target.cell_count()
            );
        }
    });

    view! {
        <div class=css::editor>
            <div
                class=move || grid_class(grid_type.get())
                style=move || format!("background-color: {}", background.get())
            >
                <For
                    each=move || cells.with(GridCells::keys)
                    key=|(_, id)| id.clone()
                    children=move |(index, _)| {
                        let image = Signal::derive(move || cells.with(|c| c.image_src(index)));
                        let on_image_change = Callback::new(move |url: Option<ObjectUrl>| {
                            let removed = url.is_none();
                            cells.update(|c| {
                                c.set_image(index, url);
                            });
                            log::debug!(
                                "cell {index} {}",
                                if removed { "cleared" } else { "updated" }
                            );
                        });
                        view! { <Cell image=image on_image_change=on_image_change /> }
                    }
                />
            </div>
        </div>
    }
}
