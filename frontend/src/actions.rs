//! Bridges UI events to the core controller. Each action reads the current
//! config, then runs in a root-scoped task that commits into the state signal.
//! Tasks outlive the screen that started them: login swaps the auth screen out
//! mid-action, and tab switches unmount the screen of an in-flight request.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use bikeshare_client_core::{
    ApiClient, AppState, ClientConfig, Controller, StateStore, Tab, WeatherClient,
};
use crate::geolocation::BrowserGeolocator;

pub type AppController = Controller<ApiClient, WeatherClient, BrowserGeolocator>;

/// The top-level state signal as a controller store.
pub struct SignalStore(pub Signal<AppState>);

impl StateStore for SignalStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.0.write())
    }
}

pub fn controller(config: &ClientConfig) -> AppController {
    Controller::new(
        ApiClient::new(config.clone()),
        WeatherClient::new(config),
        BrowserGeolocator,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Login,
    Register,
    Logout,
    SelectTab(Tab),
    RefreshWeather,
    ReloadEvents,
    CreateEvent,
    Predict,
}

pub fn dispatch(state: Signal<AppState>, config: Signal<ClientConfig>, action: Action) {
    let controller = controller(&config.read());
    let mut store = SignalStore(state);
    debug!("dispatch {:?}", action);
    if action == Action::Logout {
        controller.logout(&mut store);
        return;
    }
    spawn_forever(async move {
        match action {
            Action::Login => controller.login(&mut store).await,
            Action::Register => controller.register(&mut store).await,
            Action::SelectTab(tab) => controller.select_tab(&mut store, tab).await,
            Action::RefreshWeather => controller.refresh_weather(&mut store).await,
            Action::ReloadEvents => controller.fetch_events(&mut store).await,
            Action::CreateEvent => controller.create_event(&mut store).await,
            Action::Predict => controller.predict(&mut store).await,
            Action::Logout => controller.logout(&mut store),
        }
    });
}
