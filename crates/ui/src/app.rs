//! Main Application Component for Entity Console
//!
//! Root Dioxus component: toolbar, the entity form and a status bar.

use console_client::HttpBackend;
use dioxus::prelude::*;

use crate::pages::EntityFormPage;
use crate::state::use_form;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Entity Console UI initialized");
    });

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col bg-slate-900 text-slate-100",

            Toolbar {}

            main {
                class: "flex-1 overflow-auto",
                EntityFormPage {}
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Toolbar Component
// ============================================================================

/// Top bar with the application title and the backend address
#[component]
fn Toolbar() -> Element {
    let backend = use_context::<HttpBackend>();
    let base_url = backend.base_url().to_string();

    rsx! {
        header {
            class: "toolbar h-12 bg-slate-800 border-b border-slate-700 flex items-center px-4 gap-2 shrink-0",

            span { class: "font-semibold text-sm", "Entity Console" }
            span { class: "flex-1" }
            span {
                class: "text-xs text-slate-400",
                title: "Backend base URL",
                "{base_url}"
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom bar with field count and request activity
#[component]
fn StatusBar() -> Element {
    let (field_count, busy) = use_form(|state| (state.registry.len(), state.progress_visible()));

    let activity = if busy { "Request in progress…" } else { "Ready" };

    rsx! {
        footer {
            class: "status-bar h-6 bg-slate-800 border-t border-slate-700 flex items-center justify-between px-4 text-xs text-slate-400",
            span { "{activity}" }
            span { "{field_count} field(s)" }
        }
    }
}
