use crate::error::GeoError;
use crate::models::Coordinates;

/// Single-shot device position lookup. The browser implementation lives in the
/// frontend; tests use fixed positions.
#[allow(async_fn_in_trait)]
pub trait Geolocator {
    async fn current_position(&self) -> Result<Coordinates, GeoError>;
}
