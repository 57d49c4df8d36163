//! Shared setup: a controller over fakes and a signed-in state.

use bikeshare_client_core::{AppState, Controller, CurrentWeather};

use super::fakes::{FakeBackend, FakeGeo, FakeWeather};

pub type TestController = Controller<FakeBackend, FakeWeather, FakeGeo>;

pub const USER: &str = "rider";
pub const PASSWORD: &str = "pedal123";

/// New York, partly cloudy (weather code 2).
pub fn nyc_weather() -> CurrentWeather {
    CurrentWeather {
        temperature: 15.0,
        windspeed: 10.0,
        weathercode: 2,
    }
}

pub fn controller_with(weather: FakeWeather, geo: FakeGeo) -> TestController {
    Controller::new(FakeBackend::new().with_user(USER, PASSWORD), weather, geo)
}

pub fn controller() -> TestController {
    controller_with(FakeWeather::reporting(nyc_weather()), FakeGeo::at(40.71, -74.00))
}

pub fn state_with_credentials(username: &str, password: &str) -> AppState {
    let mut state = AppState::new();
    state.credentials.username = username.to_string();
    state.credentials.password = password.to_string();
    state
}

pub async fn logged_in(controller: &TestController) -> AppState {
    let mut state = state_with_credentials(USER, PASSWORD);
    controller.login(&mut state).await;
    assert!(state.is_authenticated(), "login failed: {:?}", state.auth_error);
    state
}
