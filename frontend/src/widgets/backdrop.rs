use dioxus::prelude::*;
use crate::theme::AppColors;

/// Centers its children on the app background (auth and setup screens).
#[component]
pub fn Backdrop(children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 100vh; background-color: {AppColors::BACKGROUND};",
            {children}
        }
    }
}
