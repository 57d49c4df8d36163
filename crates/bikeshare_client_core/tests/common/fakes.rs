//! Fakes mirror the backend contract: the token is the username, `/events`
//! starts with two seeded events, `/profile` reports a standard user.

use bikeshare_client_core::{
    BikeShareApi, ClientError, Coordinates, Credentials, CurrentWeather, Event, GeoError,
    Geolocator, NewEvent, PredictionInput, Profile, WeatherSource,
};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

fn status(code: u16, detail: &str) -> ClientError {
    ClientError::Status {
        status: code,
        body: format!(r#"{{"detail":"{}"}}"#, detail),
    }
}

pub fn seeded_events() -> Vec<Event> {
    vec![
        Event {
            id: Some("1".into()),
            name: "City Marathon".into(),
            date: "2025-05-20".into(),
            location: "Central Park".into(),
        },
        Event {
            id: Some("2".into()),
            name: "Midnight Ride".into(),
            date: "2025-06-15".into(),
            location: "Downtown".into(),
        },
    ]
}

#[derive(Default)]
pub struct FakeBackend {
    users: RefCell<HashMap<String, String>>,
    events: RefCell<Vec<Event>>,
    /// Endpoint names that answer 500.
    failing: RefCell<HashSet<&'static str>>,
    /// Every call as `name` or `name token`.
    calls: RefCell<Vec<String>>,
    pub last_prediction_input: RefCell<Option<PredictionInput>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        *backend.events.borrow_mut() = seeded_events();
        backend
    }

    pub fn with_user(self, username: &str, password: &str) -> Self {
        self.users
            .borrow_mut()
            .insert(username.to_string(), password.to_string());
        self
    }

    pub fn fail(&self, endpoint: &'static str) {
        self.failing.borrow_mut().insert(endpoint);
    }

    pub fn recover(&self, endpoint: &'static str) {
        self.failing.borrow_mut().remove(endpoint);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.split(' ').next() == Some(endpoint))
            .count()
    }

    pub fn stored_events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn record(&self, endpoint: &'static str, token: Option<&str>) -> Result<(), ClientError> {
        let entry = match token {
            Some(t) => format!("{} {}", endpoint, t),
            None => endpoint.to_string(),
        };
        self.calls.borrow_mut().push(entry);
        if self.failing.borrow().contains(endpoint) {
            return Err(status(500, "Internal Server Error"));
        }
        Ok(())
    }

    fn authorize(&self, token: &str) -> Result<String, ClientError> {
        if self.users.borrow().contains_key(token) {
            Ok(token.to_string())
        } else {
            Err(status(401, "Invalid token"))
        }
    }
}

impl BikeShareApi for FakeBackend {
    async fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        self.record("login", None)?;
        match self.users.borrow().get(&credentials.username) {
            Some(p) if *p == credentials.password => Ok(credentials.username.clone()),
            _ => Err(status(401, "Invalid credentials")),
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        self.record("register", None)?;
        let mut users = self.users.borrow_mut();
        if users.contains_key(&credentials.username) {
            return Err(status(400, "User already exists"));
        }
        users.insert(credentials.username.clone(), credentials.password.clone());
        Ok(())
    }

    async fn events(&self, token: &str) -> Result<Vec<Event>, ClientError> {
        self.record("events", Some(token))?;
        self.authorize(token)?;
        Ok(self.events.borrow().clone())
    }

    async fn create_event(&self, token: &str, event: &NewEvent) -> Result<(), ClientError> {
        self.record("create_event", Some(token))?;
        self.authorize(token)?;
        let mut events = self.events.borrow_mut();
        let id = (events.len() + 1).to_string();
        events.push(Event {
            id: Some(id),
            name: event.name.clone(),
            date: event.date.clone(),
            location: event.location.clone(),
        });
        Ok(())
    }

    /// Backend scoring without its random jitter.
    async fn predict(&self, token: &str, input: &PredictionInput) -> Result<f64, ClientError> {
        self.record("predict", Some(token))?;
        self.authorize(token)?;
        *self.last_prediction_input.borrow_mut() = Some(input.clone());
        let temperature: f64 = input
            .temperature
            .parse()
            .map_err(|_| status(422, "temperature"))?;
        let mut demand = 50.0;
        if input.season == "3" {
            demand += 40.0;
        }
        if input.weather == "1" {
            demand += 30.0;
        }
        if temperature > 20.0 && temperature < 30.0 {
            demand += 50.0;
        }
        Ok(demand + 0.25)
    }

    async fn profile(&self, token: &str) -> Result<Profile, ClientError> {
        self.record("profile", Some(token))?;
        let username = self.authorize(token)?;
        Ok(Profile {
            username,
            role: "Standard User".into(),
            member_since: "2025".into(),
        })
    }
}

pub struct FakeWeather {
    reading: Option<CurrentWeather>,
    pub calls: Cell<usize>,
    pub last_coords: Cell<Option<Coordinates>>,
}

impl FakeWeather {
    pub fn reporting(reading: CurrentWeather) -> Self {
        Self {
            reading: Some(reading),
            calls: Cell::new(0),
            last_coords: Cell::new(None),
        }
    }

    pub fn down() -> Self {
        Self {
            reading: None,
            calls: Cell::new(0),
            last_coords: Cell::new(None),
        }
    }
}

impl WeatherSource for FakeWeather {
    async fn current_weather(&self, coords: Coordinates) -> Result<CurrentWeather, ClientError> {
        self.calls.set(self.calls.get() + 1);
        self.last_coords.set(Some(coords));
        self.reading.ok_or_else(|| status(503, "Service Unavailable"))
    }
}

pub struct FakeGeo {
    position: Result<Coordinates, GeoError>,
    pub calls: Cell<usize>,
}

impl FakeGeo {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Ok(Coordinates {
                latitude,
                longitude,
            }),
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: GeoError) -> Self {
        Self {
            position: Err(error),
            calls: Cell::new(0),
        }
    }
}

impl Geolocator for FakeGeo {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        self.calls.set(self.calls.get() + 1);
        self.position.clone()
    }
}
