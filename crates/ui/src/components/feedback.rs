//! # Feedback Components
//!
//! Alert banner and progress indicator.

use chrono::Local;
use console_form::{Alert, AlertLevel};
use dioxus::prelude::*;

// ============================================================================
// Alert Banner
// ============================================================================

/// Properties for AlertBanner component
#[derive(Props, Clone, PartialEq)]
pub struct AlertBannerProps {
    /// Alert to show; nothing renders without one
    pub alert: Option<Alert>,

    /// Dismiss handler
    #[props(default)]
    pub on_dismiss: EventHandler<()>,
}

/// Banner with the most recent alert
#[component]
pub fn AlertBanner(props: AlertBannerProps) -> Element {
    let Some(alert) = props.alert.as_ref() else {
        return rsx! {};
    };

    let class = alert_class(alert.level);
    let time = alert_time(alert);

    rsx! {
        div {
            id: "alert",
            class: "{class}",
            role: "alert",

            span { class: "flex-1", "{alert.text}" }
            span { class: "text-xs opacity-60 mx-3", "{time}" }
            button {
                class: "text-lg leading-none opacity-70 hover:opacity-100",
                onclick: move |_| props.on_dismiss.call(()),
                "×"
            }
        }
    }
}

/// Time the alert was raised, in local time
fn alert_time(alert: &Alert) -> String {
    alert.raised_at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

fn alert_class(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Info => "alert flex items-center px-4 py-2 rounded-lg bg-slate-700 text-slate-100",
        AlertLevel::Success => "alert flex items-center px-4 py-2 rounded-lg bg-emerald-700 text-white",
        AlertLevel::Warning => "alert flex items-center px-4 py-2 rounded-lg bg-amber-600 text-white",
        AlertLevel::Error => "alert flex items-center px-4 py-2 rounded-lg bg-rose-700 text-white",
    }
}

// ============================================================================
// Progress Indicator
// ============================================================================

/// Indeterminate progress bar
#[component]
pub fn ProgressBar(visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            id: "progress",
            class: "progress h-1 w-full overflow-hidden rounded bg-slate-700",
            div { class: "progress-bar h-full w-1/3 bg-indigo-500 animate-pulse" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_class_per_level() {
        assert!(alert_class(AlertLevel::Success).contains("emerald"));
        assert!(alert_class(AlertLevel::Error).contains("rose"));
        assert!(alert_class(AlertLevel::Warning).contains("amber"));
        assert!(alert_class(AlertLevel::Info).starts_with("alert"));
    }

    #[test]
    fn test_alert_time_is_local_clock() {
        let alert = Alert::success("features created");
        let expected = alert.raised_at.with_timezone(&Local).format("%H:%M:%S").to_string();
        let time = alert_time(&alert);
        assert_eq!(time, expected);
        assert_eq!(time.len(), 8);
    }
}
