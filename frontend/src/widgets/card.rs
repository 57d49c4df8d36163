use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Card(#[props(default, into)] style: String, children: Element) -> Element {
    rsx! {
        div {
            style: "background-color: {AppColors::SURFACE}; border-radius: 15px; padding: {spacing::CARD_PADDING}; margin-bottom: {spacing::LG}; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1); {style}",
            {children}
        }
    }
}
