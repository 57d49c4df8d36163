mod auth;
mod backend_setup;
mod dashboard;
mod events;
mod home;
mod predict;
mod profile;

pub use auth::AuthScreen;
pub use backend_setup::BackendSetupScreen;
pub use dashboard::{readings, DashboardScreen, Readings};
pub use events::EventsScreen;
pub use home::HomeScreen;
pub use predict::{choices as prediction_choices, source_notice, Choices, PredictScreen};
pub use profile::ProfileScreen;
