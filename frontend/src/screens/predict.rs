use dioxus::prelude::*;
use bikeshare_client_core::{AppState, ClientConfig, PredictionField};
use crate::actions::{dispatch, Action};
use crate::theme::{button_style, input_style, spacing, title_style, AppColors};
use crate::widgets::{Card, ErrorBanner};

pub type Choices = &'static [(&'static str, &'static str)];

const SEASONS: Choices = &[("1", "Spring"), ("2", "Summer"), ("3", "Fall"), ("4", "Winter")];
const YES_NO: Choices = &[("0", "No"), ("1", "Yes")];
const WEATHER: Choices = &[
    ("1", "1 - Clear"),
    ("2", "2 - Mist / Cloudy"),
    ("3", "3 - Light Rain / Snow"),
    ("4", "4 - Heavy Rain / Storm"),
];

/// Select options for enumerated fields; `None` means a number input.
pub fn choices(field: PredictionField) -> Option<Choices> {
    match field {
        PredictionField::Season => Some(SEASONS),
        PredictionField::Holiday | PredictionField::Workingday => Some(YES_NO),
        PredictionField::Weather => Some(WEATHER),
        PredictionField::Temperature | PredictionField::Humidity | PredictionField::Windspeed => None,
    }
}

/// Header line of the form: where the values came from.
pub fn source_notice(state: &AppState) -> String {
    if state.weather.data.is_some() {
        format!("✨ Auto-filled data from your location ({})", state.location_label)
    } else {
        "Enter values manually below.".to_string()
    }
}

#[component]
pub fn PredictScreen(state: Signal<AppState>, config: Signal<ClientConfig>) -> Element {
    let mut state = state;
    let s = state.read();
    let fields: Vec<(PredictionField, &str, String, Option<Choices>)> = PredictionField::ALL
        .into_iter()
        .map(|f| (f, f.label(), s.prediction_form.get(f).to_string(), choices(f)))
        .collect();
    let notice = source_notice(&s);
    let can_undo = s.prediction_form.can_undo_autofill();
    let pending = s.prediction.loading;
    let error = s.prediction.error.clone();
    let bikes = s.predicted_bikes();
    drop(s);

    let input = input_style();
    let button = button_style();
    let title = title_style();

    rsx! {
        h1 { style: "{title}", "Demand Prediction" }
        Card { style: "max-width: 700px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: {spacing::SM}; margin-bottom: {spacing::MD}; border-radius: 8px; background-color: {AppColors::SURFACE_RAISED}; color: {AppColors::MUTED}; font-size: 0.9rem;",
                span { "{notice}" }
                if can_undo {
                    button {
                        onclick: move |_| {
                            state.write().undo_autofill();
                        },
                        style: "background: none; border: 1px solid {AppColors::BORDER}; border-radius: 6px; padding: 4px 12px; color: {AppColors::ON_SURFACE}; cursor: pointer;",
                        "Undo"
                    }
                }
            }
            form {
                onsubmit: move |ev: FormEvent| {
                    ev.prevent_default();
                    dispatch(state, config, Action::Predict);
                },
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: {spacing::MD};",
                    for (field, label, value, options) in fields {
                        div { key: "{label}",
                            label { style: "color: {AppColors::MUTED}; font-size: 0.875rem;", "{label}" }
                            if let Some(options) = options {
                                select {
                                    style: "{input}",
                                    onchange: move |ev| state.write().edit_prediction(field, ev.value()),
                                    for (code, text) in options.iter().copied() {
                                        option { value: code, selected: code == value, "{text}" }
                                    }
                                }
                            } else {
                                input {
                                    r#type: "number",
                                    step: "any",
                                    value: "{value}",
                                    oninput: move |ev| state.write().edit_prediction(field, ev.value()),
                                    style: "{input}",
                                }
                            }
                        }
                    }
                }
                button { r#type: "submit", disabled: pending, style: "{button}",
                    if pending { "Predicting…" } else { "Run Prediction" }
                }
            }
            ErrorBanner { message: error }
            if let Some(n) = bikes {
                div {
                    style: "margin-top: {spacing::MD}; padding: {spacing::MD}; border-radius: 10px; text-align: center; background-color: {AppColors::SUCCESS_SURFACE}; color: {AppColors::SUCCESS};",
                    h2 { style: "margin: 0;", "Predicted Demand: {n} Bikes" }
                }
            }
        }
    }
}
