use dioxus::prelude::*;
use bikeshare_client_core::{ApiClient, AppState, AuthView, ClientConfig};
use crate::theme::{input_style, spacing, AppColors};
use crate::widgets::{Backdrop, Card, ErrorBanner};

#[component]
pub fn BackendSetupScreen(state: Signal<AppState>, config: Signal<ClientConfig>) -> Element {
    let mut state = state;
    let mut config = config;
    let (initial_host, initial_port) = config.read().backend_address();
    let mut host = use_signal(move || initial_host);
    let mut port = use_signal(move || initial_port);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut testing = use_signal(|| false);

    let input = input_style();
    let button_base = "padding: 12px 24px; border-radius: 8px; border: none; cursor: pointer;";

    rsx! {
        Backdrop {
            Card { style: "width: 420px; margin-bottom: 0;",
                h2 { style: "margin: 0 0 {spacing::XS};", "Backend setup" }
                p { style: "color: {AppColors::MUTED}; margin-bottom: {spacing::MD}; font-size: 0.9rem;",
                    "Set the host and port of your BikeShare API server."
                }
                label { style: "display: block; color: {AppColors::MUTED}; font-size: 0.875rem;", "Host" }
                input {
                    r#type: "text",
                    placeholder: "127.0.0.1",
                    value: "{host}",
                    oninput: move |ev| host.set(ev.value()),
                    style: "{input} margin-bottom: {spacing::SM};",
                }
                label { style: "display: block; color: {AppColors::MUTED}; font-size: 0.875rem;", "Port" }
                input {
                    r#type: "text",
                    placeholder: "8000",
                    value: "{port}",
                    oninput: move |ev| port.set(ev.value()),
                    style: "{input} margin-bottom: {spacing::SM};",
                }
                ErrorBanner { message: error() }
                if let Some(msg) = success() {
                    p { style: "color: {AppColors::SUCCESS}; font-size: 0.875rem; margin: 12px 0;", "{msg}" }
                }
                div { style: "display: flex; gap: 12px; margin-top: {spacing::SM};",
                    button {
                        disabled: testing(),
                        onclick: move |_| {
                            error.set(None);
                            success.set(None);
                            let candidate = match config.read().with_backend(&host(), &port()) {
                                Ok(c) => c,
                                Err(e) => {
                                    error.set(Some(e.to_string()));
                                    return;
                                }
                            };
                            testing.set(true);
                            spawn(async move {
                                let res = ApiClient::new(candidate).ping().await;
                                testing.set(false);
                                match res {
                                    Ok(message) => success.set(Some(format!("Connected: {}", message))),
                                    Err(e) => error.set(Some(e.to_string())),
                                }
                            });
                        },
                        style: "{button_base} background: {AppColors::SURFACE_RAISED}; color: {AppColors::ON_SURFACE};",
                        if testing() { "Testing…" } else { "Test connection" }
                    }
                    button {
                        onclick: move |_| {
                            let saved = config.read().with_backend(&host(), &port());
                            match saved {
                                Ok(c) => {
                                    dioxus_logger::tracing::info!("backend set to {}", c.api_base_url);
                                    config.set(c);
                                    state.write().show_auth_view(AuthView::Login);
                                }
                                Err(e) => error.set(Some(e.to_string())),
                            }
                        },
                        style: "{button_base} background: {AppColors::PRIMARY}; color: {AppColors::ON_PRIMARY}; font-weight: 600;",
                        "Save"
                    }
                    button {
                        onclick: move |_| state.write().show_auth_view(AuthView::Login),
                        style: "{button_base} background: none; color: {AppColors::MUTED};",
                        "Back"
                    }
                }
            }
        }
    }
}
