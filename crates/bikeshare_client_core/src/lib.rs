//! BikeShare client core: everything the dashboard does that is not rendering.
//!
//! The Dioxus frontend owns one [`AppState`] and drives it through a [`Controller`];
//! tests drive the same controller with in-memory fakes.

pub mod api;
pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod geolocation;
pub mod models;
pub mod state;
pub mod weather;

pub use api::{ApiClient, BikeShareApi};
pub use config::{ClientConfig, ConfigError};
pub use controller::{Controller, StateStore};
pub use error::{ClientError, GeoError};
pub use geolocation::Geolocator;
pub use models::{
    Coordinates, Credentials, CurrentWeather, Event, NewEvent, PredictionField, PredictionInput,
    Profile,
};
pub use state::{AppState, AuthView, RequestId, Resource, Tab, TabEffect};
pub use weather::{map_weather_code, weather_description, WeatherClient, WeatherSource};
