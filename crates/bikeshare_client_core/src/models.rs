//! Wire and form types shared by the client, the state and the UI.
//! Prediction inputs travel as strings; the backend coerces them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// POST /auth/login response.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

/// POST /predict response.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PredictionResponse {
    pub predicted_demand: f64,
}

/// GET / response; the backend reports that it is running.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RootMessage {
    pub message: String,
}

/// A community ride event as listed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub date: String,
    pub location: String,
}

/// The add-event form; also the POST /events body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub location: String,
}

impl NewEvent {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.date, &self.location]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub role: String,
    pub member_since: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// `current_weather` block of an Open-Meteo forecast.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredictionField {
    Temperature,
    Humidity,
    Windspeed,
    Season,
    Holiday,
    Workingday,
    Weather,
}

impl PredictionField {
    pub const ALL: [PredictionField; 7] = [
        PredictionField::Temperature,
        PredictionField::Humidity,
        PredictionField::Windspeed,
        PredictionField::Season,
        PredictionField::Holiday,
        PredictionField::Workingday,
        PredictionField::Weather,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PredictionField::Temperature => "Temperature",
            PredictionField::Humidity => "Humidity",
            PredictionField::Windspeed => "Windspeed",
            PredictionField::Season => "Season",
            PredictionField::Holiday => "Holiday",
            PredictionField::Workingday => "Working day",
            PredictionField::Weather => "Weather",
        }
    }
}

/// POST /predict body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub temperature: String,
    pub humidity: String,
    pub windspeed: String,
    pub season: String,
    pub holiday: String,
    pub workingday: String,
    pub weather: String,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            temperature: "28".to_string(),
            humidity: "52".to_string(),
            windspeed: "17".to_string(),
            season: "1".to_string(),
            holiday: "0".to_string(),
            workingday: "1".to_string(),
            weather: "1".to_string(),
        }
    }
}

impl PredictionInput {
    pub fn get(&self, field: PredictionField) -> &str {
        match field {
            PredictionField::Temperature => &self.temperature,
            PredictionField::Humidity => &self.humidity,
            PredictionField::Windspeed => &self.windspeed,
            PredictionField::Season => &self.season,
            PredictionField::Holiday => &self.holiday,
            PredictionField::Workingday => &self.workingday,
            PredictionField::Weather => &self.weather,
        }
    }

    pub fn set(&mut self, field: PredictionField, value: String) {
        let slot = match field {
            PredictionField::Temperature => &mut self.temperature,
            PredictionField::Humidity => &mut self.humidity,
            PredictionField::Windspeed => &mut self.windspeed,
            PredictionField::Season => &mut self.season,
            PredictionField::Holiday => &mut self.holiday,
            PredictionField::Workingday => &mut self.workingday,
            PredictionField::Weather => &mut self.weather,
        };
        *slot = value;
    }
}
