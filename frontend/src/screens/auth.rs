use dioxus::prelude::*;
use bikeshare_client_core::{AppState, AuthView, ClientConfig};
use crate::actions::{dispatch, Action};
use crate::theme::{button_style, input_style, spacing, AppColors};
use crate::widgets::{Backdrop, Card, ErrorBanner};

/// Login and register share one card; `auth_view` picks the mode.
#[component]
pub fn AuthScreen(state: Signal<AppState>, config: Signal<ClientConfig>) -> Element {
    let mut state = state;
    let is_login = state.read().auth_view != AuthView::Register;
    let username = state.read().credentials.username.clone();
    let password = state.read().credentials.password.clone();
    let pending = state.read().auth_pending;
    let error = state.read().auth_error.clone();
    let notice = state.read().auth_notice.clone();

    let title = if is_login { "Welcome Back" } else { "Create Account" };
    let submit_label = match (is_login, pending) {
        (_, true) => "Please wait…",
        (true, false) => "Login",
        (false, false) => "Register",
    };
    let toggle_label = if is_login {
        "Need an account? Register"
    } else {
        "Have an account? Login"
    };
    let input = input_style();
    let button = button_style();

    rsx! {
        Backdrop {
            Card { style: "width: 350px; margin-bottom: 0;",
                div { style: "text-align: center; margin-bottom: {spacing::MD};",
                    div { style: "font-size: 40px; color: {AppColors::PRIMARY};", "🚲" }
                    h2 { style: "margin: {spacing::SM} 0 0;", "{title}" }
                }
                if let Some(msg) = notice {
                    p {
                        style: "color: {AppColors::SUCCESS}; background-color: {AppColors::SUCCESS_SURFACE}; padding: {spacing::SM}; border-radius: 8px; font-size: 0.875rem;",
                        "{msg}"
                    }
                }
                form {
                    onsubmit: move |ev: FormEvent| {
                        ev.prevent_default();
                        let action = if is_login { Action::Login } else { Action::Register };
                        dispatch(state, config, action);
                    },
                    input {
                        r#type: "text",
                        placeholder: "Username",
                        value: "{username}",
                        oninput: move |ev| state.write().credentials.username = ev.value(),
                        style: "{input}",
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |ev| state.write().credentials.password = ev.value(),
                        style: "{input}",
                    }
                    ErrorBanner { message: error }
                    button { r#type: "submit", disabled: pending, style: "{button}", "{submit_label}" }
                }
                p {
                    style: "text-align: center; margin-top: {spacing::MD}; color: {AppColors::PRIMARY}; cursor: pointer; font-size: 0.9rem;",
                    onclick: move |_| {
                        let next = if is_login { AuthView::Register } else { AuthView::Login };
                        state.write().show_auth_view(next);
                    },
                    "{toggle_label}"
                }
                button {
                    onclick: move |_| state.write().show_auth_view(AuthView::Setup),
                    style: "display: block; margin: {spacing::SM} auto 0; background: none; border: none; color: {AppColors::MUTED}; cursor: pointer; font-size: 0.85rem;",
                    "Configure backend"
                }
            }
        }
    }
}
