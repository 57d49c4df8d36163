use dioxus::prelude::*;
use bikeshare_client_core::AppState;
use crate::theme::{spacing, title_style, AppColors};
use crate::widgets::{Card, ErrorBanner};

#[component]
pub fn ProfileScreen(state: Signal<AppState>) -> Element {
    let s = state.read();
    let profile = s.profile.data.clone();
    let loading = s.profile.loading;
    let error = s.profile.error.clone();
    drop(s);
    let title = title_style();

    rsx! {
        h1 { style: "{title}", "User Profile" }
        ErrorBanner { message: error }
        Card { style: "max-width: 400px; text-align: center;",
            {match profile {
                Some(p) => rsx! {
                    div { style: "font-size: 64px; color: {AppColors::PRIMARY};", "👤" }
                    h2 { style: "margin: {spacing::SM} 0 {spacing::XS};", "{p.username}" }
                    p { style: "margin: 0; color: {AppColors::MUTED};", "Role: {p.role}" }
                    p { style: "margin: {spacing::XS} 0 0; color: {AppColors::MUTED};", "Member Since: {p.member_since}" }
                },
                None if loading => rsx! { p { style: "color: {AppColors::MUTED};", "Loading profile..." } },
                None => rsx! { p { style: "color: {AppColors::MUTED};", "Profile unavailable" } },
            }}
        }
    }
}
