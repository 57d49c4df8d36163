//! Request orchestration: each user action reads what it needs from the state,
//! awaits the remote call without holding the state, then commits the outcome.

use crate::api::BikeShareApi;
use crate::geolocation::Geolocator;
use crate::state::{AppState, Tab, TabEffect};
use crate::weather::WeatherSource;

/// Write access to the [`AppState`] owned by the view. Closures must not await.
pub trait StateStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateStore for AppState {
    fn update<R>(&mut self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(self)
    }
}

pub struct Controller<A, W, G> {
    api: A,
    weather: W,
    geo: G,
}

impl<A, W, G> Controller<A, W, G>
where
    A: BikeShareApi,
    W: WeatherSource,
    G: Geolocator,
{
    pub fn new(api: A, weather: W, geo: G) -> Self {
        Self { api, weather, geo }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn weather_source(&self) -> &W {
        &self.weather
    }

    pub fn geolocator(&self) -> &G {
        &self.geo
    }

    /// Signs in, then loads the events list and the dashboard weather.
    pub async fn login<S: StateStore>(&self, store: &mut S) {
        let Some(credentials) = store.update(|s| s.begin_auth()) else {
            return;
        };
        match self.api.login(&credentials).await {
            Ok(token) => {
                if store.update(|s| s.complete_login(token)) {
                    self.fetch_events(store).await;
                    self.refresh_weather(store).await;
                }
            }
            Err(e) => store.update(|s| s.fail_auth(&e)),
        }
    }

    pub async fn register<S: StateStore>(&self, store: &mut S) {
        let Some(credentials) = store.update(|s| s.begin_auth()) else {
            return;
        };
        match self.api.register(&credentials).await {
            Ok(()) => store.update(|s| s.complete_registration()),
            Err(e) => store.update(|s| s.fail_auth(&e)),
        }
    }

    pub fn logout<S: StateStore>(&self, store: &mut S) {
        store.update(|s| s.logout());
    }

    pub async fn select_tab<S: StateStore>(&self, store: &mut S, tab: Tab) {
        match store.update(|s| s.select_tab(tab)) {
            TabEffect::RefreshWeather => self.refresh_weather(store).await,
            TabEffect::LoadProfile => self.load_profile(store).await,
            TabEffect::None => {}
        }
    }

    pub async fn fetch_events<S: StateStore>(&self, store: &mut S) {
        let Some(ticket) = store.update(|s| s.begin_events()) else {
            return;
        };
        let result = self.api.events(&ticket.token).await;
        store.update(|s| s.finish_events(ticket.id, result));
    }

    /// Posts the form, clears it, and reloads the list from the server.
    pub async fn create_event<S: StateStore>(&self, store: &mut S) {
        let Some((ticket, event)) = store.update(|s| s.begin_create_event()) else {
            return;
        };
        let result = self.api.create_event(&ticket.token, &event).await;
        if store.update(|s| s.finish_create_event(ticket.id, result)) {
            self.fetch_events(store).await;
        }
    }

    pub async fn predict<S: StateStore>(&self, store: &mut S) {
        let Some((ticket, input)) = store.update(|s| s.begin_prediction()) else {
            return;
        };
        let result = self.api.predict(&ticket.token, &input).await;
        store.update(|s| s.finish_prediction(ticket.id, result));
    }

    pub async fn load_profile<S: StateStore>(&self, store: &mut S) {
        let Some(ticket) = store.update(|s| s.begin_profile()) else {
            return;
        };
        let result = self.api.profile(&ticket.token).await;
        store.update(|s| s.finish_profile(ticket.id, result));
    }

    /// Locate the device, look up current conditions, auto-fill the prediction form.
    pub async fn refresh_weather<S: StateStore>(&self, store: &mut S) {
        let Some(id) = store.update(|s| s.begin_weather_refresh()) else {
            return;
        };
        let position = self.geo.current_position().await;
        let Some(coords) = store.update(|s| s.position_resolved(id, position)) else {
            return;
        };
        let result = self.weather.current_weather(coords).await;
        store.update(|s| s.finish_weather(id, result));
    }
}
