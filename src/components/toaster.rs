//! Toast notification stack.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::ToastKind;

stylance::import_crate_style!(css, "src/components/toaster.module.css");

fn toast_class(kind: ToastKind) -> String {
    let variant = match kind {
        ToastKind::Success => css::success,
        ToastKind::Error => css::error,
    };
    format!("{} {}", css::toast, variant)
}

/// Renders the toasts in [`AppContext`] at the top center of the viewport.
#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toasts = ctx.toasts;

    view! {
        <div class=css::toaster role="status" aria-live="polite">
            <For
                each=move || toasts.queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast_class(toast.kind)
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
