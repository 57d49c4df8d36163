use dioxus::prelude::*;
use bikeshare_client_core::{AppState, ClientConfig, Tab};
use crate::actions::{dispatch, Action};
use crate::screens::{DashboardScreen, EventsScreen, PredictScreen, ProfileScreen};
use crate::theme::{spacing, AppColors};

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Dashboard => "🏠",
        Tab::Predict => "📈",
        Tab::Events => "📅",
        Tab::Profile => "👤",
    }
}

/// Signed-in shell: sidebar navigation and the active tab.
#[component]
pub fn HomeScreen(state: Signal<AppState>, config: Signal<ClientConfig>) -> Element {
    let active = state.read().tab();
    // (tab, label, icon, background)
    let tabs: Vec<(Tab, &str, &str, &str)> = Tab::ALL
        .into_iter()
        .map(|t| {
            let bg = if t == active { AppColors::ACTIVE } else { "transparent" };
            (t, t.label(), tab_icon(t), bg)
        })
        .collect();

    rsx! {
        div { style: "display: flex; height: 100vh; background-color: {AppColors::BACKGROUND};",
            div {
                style: "width: 250px; flex-shrink: 0; background-color: {AppColors::SURFACE}; padding: {spacing::MD}; display: flex; flex-direction: column;",
                h2 { style: "color: {AppColors::PRIMARY}; margin: 0 0 40px;", "🚲 BikeShare" }
                for (tab, label, icon, bg) in tabs {
                    button {
                        key: "{label}",
                        onclick: move |_| dispatch(state, config, Action::SelectTab(tab)),
                        style: "display: flex; align-items: center; gap: {spacing::SM}; width: 100%; padding: 12px; margin-bottom: {spacing::XS}; border: none; border-radius: 8px; cursor: pointer; text-align: left; font-size: 1rem; background: {bg}; color: {AppColors::ON_SURFACE};",
                        span { "{icon}" }
                        "{label}"
                    }
                }
                div { style: "flex: 1;" }
                button {
                    onclick: move |_| dispatch(state, config, Action::Logout),
                    style: "padding: 12px; border-radius: 8px; border: none; background: {AppColors::ERROR}; color: {AppColors::ON_SURFACE}; cursor: pointer; font-weight: bold;",
                    "Logout"
                }
            }
            div { style: "flex: 1; overflow: auto; padding: {spacing::SCREEN_PADDING}; color: {AppColors::ON_SURFACE};",
                {match active {
                    Tab::Dashboard => rsx! { DashboardScreen { state, config } },
                    Tab::Predict => rsx! { PredictScreen { state, config } },
                    Tab::Events => rsx! { EventsScreen { state, config } },
                    Tab::Profile => rsx! { ProfileScreen { state } },
                }}
            }
        }
    }
}
