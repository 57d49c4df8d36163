//! In-memory stand-ins for the backend, the weather API and the device position.

pub mod fakes;
pub mod test_helpers;
