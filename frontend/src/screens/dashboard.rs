use dioxus::prelude::*;
use bikeshare_client_core::{weather_description, AppState, ClientConfig};
use crate::actions::{dispatch, Action};
use crate::theme::{spacing, title_style, AppColors};
use crate::widgets::{Card, DemandChart, StatCard};

/// Stat card values; `--` and `Unknown` until a weather cycle succeeds.
#[derive(Clone, Debug, PartialEq)]
pub struct Readings {
    pub temperature: String,
    pub wind: String,
    pub condition: String,
    pub location_status: &'static str,
}

pub fn readings(state: &AppState) -> Readings {
    let current = state.weather.data;
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "--".to_string());
    Readings {
        temperature: or_dash(current.map(|w| format!("{}°C", w.temperature))),
        wind: or_dash(current.map(|w| format!("{} km/h", w.windspeed))),
        condition: or_dash(current.map(|w| weather_description(w.weathercode).to_string())),
        location_status: if current.is_some() { "Found" } else { "Unknown" },
    }
}

#[component]
pub fn DashboardScreen(state: Signal<AppState>, config: Signal<ClientConfig>) -> Element {
    let s = state.read();
    let Readings {
        temperature,
        wind,
        condition,
        location_status,
    } = readings(&s);
    let refreshing = s.weather.loading;
    let location = s.location_label.clone();
    drop(s);

    let title = title_style();

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; {title}",
            h1 { style: "font-size: 24px; margin: 0;", "Live City Dashboard" }
            button {
                disabled: refreshing,
                onclick: move |_| dispatch(state, config, Action::RefreshWeather),
                style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {AppColors::PRIMARY}; color: {AppColors::ON_PRIMARY}; font-weight: bold;",
                if refreshing { "Refreshing…" } else { "↻ Refresh Location" }
            }
        }
        div { style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: {spacing::MD}; margin-bottom: {spacing::LG};",
            StatCard {
                icon: "🌡",
                icon_color: AppColors::TEMPERATURE,
                value: temperature,
                label: "Current Temp",
            }
            StatCard {
                icon: "💨",
                icon_color: AppColors::WIND,
                value: wind,
                label: "Wind Speed",
            }
            StatCard {
                icon: "☁",
                icon_color: AppColors::CONDITION,
                value: condition,
                label: "Condition",
            }
            StatCard {
                icon: "📍",
                icon_color: AppColors::LOCATION,
                value: location_status,
                label: location,
            }
        }
        Card {
            h3 { style: "margin-top: 0;", "Weekly Demand Trend" }
            DemandChart {}
        }
    }
}
