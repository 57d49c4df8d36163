use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn StatCard(
    #[props(into)] icon: String,
    #[props(into)] icon_color: String,
    #[props(into)] value: String,
    #[props(into)] label: String,
) -> Element {
    rsx! {
        div {
            style: "background-color: {AppColors::SURFACE}; border-radius: 15px; padding: {spacing::MD}; display: flex; flex-direction: column; align-items: center; gap: {spacing::XS};",
            div { style: "font-size: 24px; color: {icon_color};", "{icon}" }
            span { style: "font-size: 24px; font-weight: bold;", "{value}" }
            span { style: "color: {AppColors::MUTED}; font-size: 14px; text-align: center;", "{label}" }
        }
    }
}
