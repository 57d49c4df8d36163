use dioxus::prelude::*;
use bikeshare_client_core::{AppState, ClientConfig, Event};
use crate::actions::{dispatch, Action};
use crate::theme::{button_style, input_style, spacing, title_style, AppColors};
use crate::widgets::{Card, ErrorBanner};

#[component]
pub fn EventsScreen(state: Signal<AppState>, config: Signal<ClientConfig>) -> Element {
    let mut state = state;
    let s = state.read();
    // keyed by server id, falling back to list position
    let events: Vec<(String, Event)> = s
        .events
        .data
        .clone()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, e)| (e.id.clone().unwrap_or_else(|| i.to_string()), e))
        .collect();
    let loading = s.events.loading;
    let show_empty = events.is_empty() && !loading;
    let list_error = s.events.error.clone();
    let submit_error = s.event_submit.error.clone();
    let submitting = s.event_submit.loading;
    let draft = s.new_event.clone();
    drop(s);

    let input = input_style();
    let button = button_style();
    let title = title_style();

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; {title}",
            h1 { style: "font-size: 24px; margin: 0;", "Community Events" }
            button {
                disabled: loading,
                onclick: move |_| dispatch(state, config, Action::ReloadEvents),
                style: "padding: 8px 16px; border-radius: 8px; border: 1px solid {AppColors::BORDER}; background: none; color: {AppColors::ON_SURFACE}; cursor: pointer;",
                if loading { "Loading…" } else { "↻ Reload" }
            }
        }
        div { style: "display: grid; grid-template-columns: 2fr 1fr; gap: {spacing::LG}; align-items: start;",
            div {
                ErrorBanner { message: list_error }
                if show_empty {
                    p { style: "color: {AppColors::MUTED};", "No events yet." }
                }
                for (key, event) in events {
                    Card { key: "{key}",
                        h3 { style: "margin: 0 0 {spacing::XS}; color: {AppColors::PRIMARY};", "{event.name}" }
                        p { style: "margin: 0; color: {AppColors::MUTED};", "📅 {event.date}" }
                        p { style: "margin: {spacing::XS} 0 0; color: {AppColors::MUTED};", "📍 {event.location}" }
                    }
                }
            }
            Card {
                h3 { style: "margin-top: 0;", "Add Event" }
                form {
                    onsubmit: move |ev: FormEvent| {
                        ev.prevent_default();
                        dispatch(state, config, Action::CreateEvent);
                    },
                    input {
                        r#type: "text",
                        placeholder: "Event Name",
                        value: "{draft.name}",
                        oninput: move |ev| state.write().new_event.name = ev.value(),
                        style: "{input}",
                    }
                    input {
                        r#type: "date",
                        value: "{draft.date}",
                        oninput: move |ev| state.write().new_event.date = ev.value(),
                        style: "{input}",
                    }
                    input {
                        r#type: "text",
                        placeholder: "Location",
                        value: "{draft.location}",
                        oninput: move |ev| state.write().new_event.location = ev.value(),
                        style: "{input}",
                    }
                    ErrorBanner { message: submit_error }
                    button { r#type: "submit", disabled: submitting, style: "{button}",
                        if submitting { "Adding…" } else { "Add Event" }
                    }
                }
            }
        }
    }
}
