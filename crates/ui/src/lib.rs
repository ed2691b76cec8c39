//! # Console UI
//!
//! Dioxus Desktop UI for Entity Console.
//!
//! ## Features
//!
//! - Field editor with an ordered field list
//! - Create-entity, insert-demo-data and create-index submissions
//! - Alert banner and progress indicator driven by the form state
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use console_client;
pub use console_form;

pub use app::App;
pub use components::{
    ActionButton, AlertBanner, Checkbox, FieldList, ProgressBar, Select, SelectOption, TextInput,
};
pub use pages::EntityFormPage;
pub use state::{FORM_STATE, GlobalFormStore, UiController, controller};

use console_client::HttpBackend;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Entity Console";

/// Application display title
pub const TITLE: &str = "Entity Console - Entity Definition";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the desktop application against the given backend
///
/// # Example
///
/// ```rust,ignore
/// let backend = HttpBackend::new(ClientConfig::from_env()?)?;
/// console_ui::launch(backend);
/// ```
pub fn launch(backend: HttpBackend) {
    launch_with_config(TITLE, 1100.0, 760.0, backend);
}

/// Launch with a custom window title and size
pub fn launch_with_config(title: &str, width: f64, height: f64, backend: HttpBackend) {
    tracing::info!(
        "Starting {} v{} (backend {})",
        NAME,
        VERSION,
        backend.base_url()
    );

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 520.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(backend)
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".btn.disabled"));
        assert!(STYLES.contains(".progress"));
    }
}
