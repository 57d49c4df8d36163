use dioxus::prelude::*;
use bikeshare_client_core::{AppState, AuthView, ClientConfig};
use crate::screens::{AuthScreen, BackendSetupScreen, HomeScreen};
use crate::theme::AppColors;

/// Root component. Owns the application state and the endpoint config;
/// screens get both as signals and commit through the controller.
#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::new);
    let config = use_signal(ClientConfig::from_build_env);

    let authenticated = state.read().is_authenticated();
    let auth_view = state.read().auth_view;

    rsx! {
        div {
            style: "font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; color: {AppColors::ON_SURFACE}; background-color: {AppColors::BACKGROUND}; min-height: 100vh; margin: 0;",
            if authenticated {
                HomeScreen { state, config }
            } else if auth_view == AuthView::Setup {
                BackendSetupScreen { state, config }
            } else {
                AuthScreen { state, config }
            }
        }
    }
}
