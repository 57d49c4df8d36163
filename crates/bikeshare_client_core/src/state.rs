//! Application state owned by the top-level view.
//!
//! Every remote slice is a [`Resource`]. Starting a request hands out a
//! [`RequestId`]; only the most recent id of the current session may commit,
//! so overlapping fetches and responses that land after logout are dropped.

use crate::error::{ClientError, GeoError};
use crate::models::{
    Coordinates, Credentials, CurrentWeather, Event, NewEvent, PredictionField, PredictionInput,
    Profile,
};
use crate::weather::{
    format_reading, location_label, map_weather_code, DENIED_LABEL, LOCATING_LABEL,
    UNAVAILABLE_LABEL, UNSUPPORTED_LABEL,
};

pub const INITIAL_LOCATION_LABEL: &str = "Locating...";
pub const REGISTERED_NOTICE: &str = "Registered! Please login.";
pub const INCOMPLETE_EVENT_ERROR: &str = "Name, date and location are required";

/// Pre-auth screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthView {
    Setup,
    #[default]
    Login,
    Register,
}

/// Authenticated tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Predict,
    Events,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Predict, Tab::Events, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Predict => "Predict",
            Tab::Events => "Events",
            Tab::Profile => "Profile",
        }
    }
}

/// Fetch to run after a tab change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabEffect {
    None,
    RefreshWeather,
    LoadProfile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId {
    session: u64,
    seq: u64,
}

/// Token plus request id for a protected call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub id: RequestId,
    pub token: String,
}

/// One remote state slice with its own loading flag, last error and in-flight request.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
    seq: u64,
    latest: Option<RequestId>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            seq: 0,
            latest: None,
        }
    }
}

impl<T> Resource<T> {
    fn begin(&mut self, session: u64) -> RequestId {
        self.seq += 1;
        let id = RequestId {
            session,
            seq: self.seq,
        };
        self.latest = Some(id);
        self.loading = true;
        id
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest == Some(id)
    }

    /// Closes the request if `id` is still the latest one.
    fn settle(&mut self, id: RequestId) -> bool {
        if !self.is_current(id) {
            return false;
        }
        self.latest = None;
        self.loading = false;
        true
    }

    /// Commits `result`. An error keeps the previous data.
    fn finish(&mut self, id: RequestId, result: Result<T, ClientError>) -> bool {
        if !self.settle(id) {
            tracing::debug!("dropping stale response {:?}", id);
            return false;
        }
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("request failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
        true
    }
}

/// Prediction inputs. Weather auto-fill is tracked separately from manual edits
/// so it can be undone until the user types.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionForm {
    input: PredictionInput,
    before_autofill: Option<PredictionInput>,
}

impl PredictionForm {
    pub fn input(&self) -> &PredictionInput {
        &self.input
    }

    pub fn get(&self, field: PredictionField) -> &str {
        self.input.get(field)
    }

    /// Manual edit; forgets the auto-fill snapshot.
    pub fn edit(&mut self, field: PredictionField, value: String) {
        self.input.set(field, value);
        self.before_autofill = None;
    }

    /// Overwrites temperature, windspeed and weather from live conditions.
    pub fn autofill(&mut self, weather: &CurrentWeather) {
        if self.before_autofill.is_none() {
            self.before_autofill = Some(self.input.clone());
        }
        self.input.temperature = format_reading(weather.temperature);
        self.input.windspeed = format_reading(weather.windspeed);
        self.input.weather = map_weather_code(weather.weathercode).to_string();
    }

    pub fn can_undo_autofill(&self) -> bool {
        self.before_autofill.is_some()
    }

    pub fn undo_autofill(&mut self) -> bool {
        match self.before_autofill.take() {
            Some(prev) => {
                self.input = prev;
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    session: u64,
    token: Option<String>,
    pub auth_view: AuthView,
    tab: Tab,

    pub credentials: Credentials,
    pub auth_pending: bool,
    pub auth_error: Option<String>,
    pub auth_notice: Option<String>,

    pub prediction_form: PredictionForm,
    pub prediction: Resource<f64>,

    pub new_event: NewEvent,
    pub events: Resource<Vec<Event>>,
    pub event_submit: Resource<()>,

    pub profile: Resource<Profile>,

    pub weather: Resource<CurrentWeather>,
    pub location_label: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: 0,
            token: None,
            auth_view: AuthView::default(),
            tab: Tab::default(),
            credentials: Credentials::default(),
            auth_pending: false,
            auth_error: None,
            auth_notice: None,
            prediction_form: PredictionForm::default(),
            prediction: Resource::default(),
            new_event: NewEvent::default(),
            events: Resource::default(),
            event_submit: Resource::default(),
            profile: Resource::default(),
            weather: Resource::default(),
            location_label: INITIAL_LOCATION_LABEL.to_string(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Session ---

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn show_auth_view(&mut self, view: AuthView) {
        if self.auth_view != view {
            self.auth_view = view;
            self.auth_error = None;
        }
    }

    /// Starts a login or register submission; `None` while one is pending or when
    /// already signed in.
    pub fn begin_auth(&mut self) -> Option<Credentials> {
        if self.auth_pending || self.is_authenticated() {
            return None;
        }
        self.auth_pending = true;
        self.auth_error = None;
        self.auth_notice = None;
        Some(self.credentials.clone())
    }

    pub fn fail_auth(&mut self, error: &ClientError) {
        tracing::warn!("auth failed: {}", error);
        self.auth_pending = false;
        self.auth_error = Some(format!("Error: {}", error));
    }

    /// Stores the token and lands on the dashboard with fresh session data.
    pub fn complete_login(&mut self, token: String) -> bool {
        self.auth_pending = false;
        if token.is_empty() {
            self.auth_error = Some("Error: server returned an empty token".to_string());
            return false;
        }
        self.reset_session_data();
        self.token = Some(token);
        self.tab = Tab::Dashboard;
        self.credentials.password.clear();
        tracing::info!("logged in as {}", self.credentials.username);
        true
    }

    /// Registration does not sign in; it sends the user to the login view.
    pub fn complete_registration(&mut self) {
        self.auth_pending = false;
        self.auth_view = AuthView::Login;
        self.auth_notice = Some(REGISTERED_NOTICE.to_string());
    }

    /// Drops the token and everything fetched with it. In-flight responses are
    /// discarded when they arrive.
    pub fn logout(&mut self) -> bool {
        if self.token.take().is_none() {
            return false;
        }
        self.reset_session_data();
        self.auth_view = AuthView::Login;
        self.credentials.password.clear();
        tracing::info!("logged out");
        true
    }

    fn reset_session_data(&mut self) {
        self.session += 1;
        self.tab = Tab::Dashboard;
        self.prediction_form = PredictionForm::default();
        self.prediction = Resource::default();
        self.new_event = NewEvent::default();
        self.events = Resource::default();
        self.event_submit = Resource::default();
        self.profile = Resource::default();
        self.weather = Resource::default();
        self.location_label = INITIAL_LOCATION_LABEL.to_string();
    }

    fn ticket(&self, id: RequestId) -> Option<Ticket> {
        self.token.clone().map(|token| Ticket { id, token })
    }

    // --- Tabs ---

    /// Switches tab. Re-selecting the active tab does nothing; entering the
    /// dashboard or profile asks for a fresh fetch every time.
    pub fn select_tab(&mut self, tab: Tab) -> TabEffect {
        if !self.is_authenticated() || self.tab == tab {
            return TabEffect::None;
        }
        self.tab = tab;
        match tab {
            Tab::Dashboard => TabEffect::RefreshWeather,
            Tab::Profile => TabEffect::LoadProfile,
            Tab::Predict | Tab::Events => TabEffect::None,
        }
    }

    // --- Events ---

    pub fn begin_events(&mut self) -> Option<Ticket> {
        if !self.is_authenticated() {
            return None;
        }
        let id = self.events.begin(self.session);
        self.ticket(id)
    }

    pub fn finish_events(&mut self, id: RequestId, result: Result<Vec<Event>, ClientError>) -> bool {
        self.events.finish(id, result)
    }

    /// Validates the add-event form and starts the POST.
    pub fn begin_create_event(&mut self) -> Option<(Ticket, NewEvent)> {
        if !self.is_authenticated() {
            return None;
        }
        if !self.new_event.is_complete() {
            self.event_submit.error = Some(INCOMPLETE_EVENT_ERROR.to_string());
            return None;
        }
        let id = self.event_submit.begin(self.session);
        let ticket = self.ticket(id)?;
        Some((ticket, self.new_event.clone()))
    }

    /// The form is cleared whatever the outcome; the caller re-fetches the list.
    pub fn finish_create_event(&mut self, id: RequestId, result: Result<(), ClientError>) -> bool {
        if !self.event_submit.finish(id, result) {
            return false;
        }
        self.new_event = NewEvent::default();
        true
    }

    // --- Profile ---

    pub fn begin_profile(&mut self) -> Option<Ticket> {
        if !self.is_authenticated() {
            return None;
        }
        let id = self.profile.begin(self.session);
        self.ticket(id)
    }

    pub fn finish_profile(&mut self, id: RequestId, result: Result<Profile, ClientError>) -> bool {
        self.profile.finish(id, result)
    }

    // --- Prediction ---

    pub fn edit_prediction(&mut self, field: PredictionField, value: String) {
        self.prediction_form.edit(field, value);
    }

    pub fn undo_autofill(&mut self) -> bool {
        self.prediction_form.undo_autofill()
    }

    pub fn begin_prediction(&mut self) -> Option<(Ticket, PredictionInput)> {
        if !self.is_authenticated() {
            return None;
        }
        let id = self.prediction.begin(self.session);
        let ticket = self.ticket(id)?;
        Some((ticket, self.prediction_form.input().clone()))
    }

    pub fn finish_prediction(&mut self, id: RequestId, result: Result<f64, ClientError>) -> bool {
        self.prediction.finish(id, result)
    }

    /// Predicted demand in whole bikes.
    pub fn predicted_bikes(&self) -> Option<i64> {
        self.prediction.data.map(|d| d.round() as i64)
    }

    // --- Weather ---

    pub fn begin_weather_refresh(&mut self) -> Option<RequestId> {
        if !self.is_authenticated() {
            return None;
        }
        let id = self.weather.begin(self.session);
        self.location_label = LOCATING_LABEL.to_string();
        Some(id)
    }

    /// Records the geolocation outcome. Returns the coordinates to look up, or
    /// `None` when the refresh ended here (failure or stale request).
    pub fn position_resolved(
        &mut self,
        id: RequestId,
        position: Result<Coordinates, GeoError>,
    ) -> Option<Coordinates> {
        if !self.weather.is_current(id) {
            return None;
        }
        match position {
            Ok(coords) => {
                self.location_label = location_label(coords);
                Some(coords)
            }
            Err(e) => {
                tracing::warn!("geolocation failed: {}", e);
                self.location_label = match e {
                    GeoError::Unsupported => UNSUPPORTED_LABEL,
                    GeoError::Denied | GeoError::Unavailable(_) => DENIED_LABEL,
                }
                .to_string();
                self.weather.settle(id);
                None
            }
        }
    }

    /// Stores the snapshot and auto-fills the prediction form. A failed lookup
    /// only changes the location label.
    pub fn finish_weather(&mut self, id: RequestId, result: Result<CurrentWeather, ClientError>) -> bool {
        if !self.weather.settle(id) {
            return false;
        }
        match result {
            Ok(current) => {
                self.prediction_form.autofill(&current);
                self.weather.data = Some(current);
            }
            Err(e) => {
                tracing::warn!("weather lookup failed: {}", e);
                self.location_label = UNAVAILABLE_LABEL.to_string();
            }
        }
        true
    }
}
