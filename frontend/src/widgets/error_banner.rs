use dioxus::prelude::*;
use crate::theme::AppColors;

/// Inline error line; renders nothing without a message.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    rsx! {
        if let Some(msg) = message {
            p { style: "color: {AppColors::ERROR}; font-size: 0.875rem; margin: 12px 0;", "{msg}" }
        }
    }
}
