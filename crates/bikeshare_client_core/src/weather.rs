//! Open-Meteo current-weather lookup and the two weather-code classifiers.
//!
//! `map_weather_code` feeds the prediction model's 1-4 `weather` input and
//! `weather_description` is the dashboard label. Breakpoints differ
//! (3/48/77 versus 1/3/48/65/82); do not merge them.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{Coordinates, CurrentWeather};
use serde::Deserialize;

pub const LOCATING_LABEL: &str = "Locating you...";
pub const DENIED_LABEL: &str = "Location Denied";
pub const UNAVAILABLE_LABEL: &str = "Weather unavailable";
pub const UNSUPPORTED_LABEL: &str = "GPS not supported";

/// Open-Meteo weather code to the prediction model's ordinal bucket.
///
/// * `..=3`  -> `"1"` clear / cloudy
/// * `..=48` -> `"2"` fog / mist
/// * `..=77` -> `"3"` rain / snow
/// * else    -> `"4"` severe
pub fn map_weather_code(code: i32) -> &'static str {
    if code <= 3 {
        "1"
    } else if code <= 48 {
        "2"
    } else if code <= 77 {
        "3"
    } else {
        "4"
    }
}

/// Open-Meteo weather code to a dashboard label.
pub fn weather_description(code: i32) -> &'static str {
    if code <= 1 {
        "Clear Sky"
    } else if code <= 3 {
        "Partly Cloudy"
    } else if code <= 48 {
        "Foggy"
    } else if code <= 65 {
        "Rainy"
    } else if code <= 82 {
        "Heavy Rain"
    } else {
        "Snow/Storm"
    }
}

/// Label shown once a position is known, e.g. `Lat: 40.71, Lon: -74.00`.
pub fn location_label(coords: Coordinates) -> String {
    format!("Lat: {:.2}, Lon: {:.2}", coords.latitude, coords.longitude)
}

/// A reading as the form stores it: `15.0` becomes `"15"`, `12.5` stays `"12.5"`.
pub fn format_reading(value: f64) -> String {
    value.to_string()
}

#[allow(async_fn_in_trait)]
pub trait WeatherSource {
    async fn current_weather(&self, coords: Coordinates) -> Result<CurrentWeather, ClientError>;
}

#[derive(Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    url: String,
}

impl WeatherClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.weather_url.clone(),
        }
    }
}

impl WeatherSource for WeatherClient {
    /// GET {weather_url}?latitude=..&longitude=..&current_weather=true
    async fn current_weather(&self, coords: Coordinates) -> Result<CurrentWeather, ClientError> {
        let query = [
            ("latitude", coords.latitude.to_string()),
            ("longitude", coords.longitude.to_string()),
            ("current_weather", "true".to_string()),
        ];
        let resp = self.http.get(&self.url).query(&query).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        let forecast: ForecastResponse = serde_json::from_str(&text)?;
        Ok(forecast.current_weather)
    }
}
