//! Root application module.
//!
//! Contains the main App component, AppContext definition, ToastState,
//! and application-level setup logic following Leptos conventions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::Page;
use crate::config::TOAST_DURATION_MS;
use crate::models::{ToastKind, ToastQueue};

// ============================================================================
// ToastState
// ============================================================================

/// Toast notifications managed with Leptos signals.
///
/// Every toast schedules its own dismissal after `TOAST_DURATION_MS`; clicking
/// a toast dismisses it early.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct ToastState {
    /// Visible toasts, newest last.
    pub queue: RwSignal<ToastQueue>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Show a success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    /// Show an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    /// Remove a toast before its timer fires.
    pub fn dismiss(&self, id: u64) {
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    fn show(&self, kind: ToastKind, message: String) {
        // `try_*`: toasts may be raised from async tasks that outlive the page.
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let state = *self;
        Timeout::new(TOAST_DURATION_MS, move || state.dismiss(id)).forget();
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`. Editor state (background
/// color, grid type) is owned by the page shell and passed down as props;
/// only cross-cutting services live here.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Toast notifications.
    pub toasts: ToastState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            toasts: ToastState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Provides the global [`AppContext`] and renders the page shell.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! { <Page /> }
}
