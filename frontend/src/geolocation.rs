//! Device position from `navigator.geolocation`. Outside the browser there is no
//! position source and every request reports `Unsupported`.

use bikeshare_client_core::{Coordinates, GeoError, Geolocator};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserGeolocator;

impl Geolocator for BrowserGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        locate().await
    }
}

#[cfg(target_arch = "wasm32")]
async fn locate() -> Result<Coordinates, GeoError> {
    browser::current_position().await
}

#[cfg(not(target_arch = "wasm32"))]
async fn locate() -> Result<Coordinates, GeoError> {
    Err(GeoError::Unsupported)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use bikeshare_client_core::{Coordinates, GeoError};
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{GeolocationPosition, GeolocationPositionError};

    /// `PositionError.PERMISSION_DENIED`
    const PERMISSION_DENIED: u16 = 1;

    type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coordinates, GeoError>>>>>;

    fn send(reply: &Reply, result: Result<Coordinates, GeoError>) {
        if let Some(tx) = reply.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }

    /// Single-shot `getCurrentPosition`, bridged to a future.
    pub async fn current_position() -> Result<Coordinates, GeoError> {
        let window = web_sys::window().ok_or(GeoError::Unsupported)?;
        let geolocation = window
            .navigator()
            .geolocation()
            .map_err(|_| GeoError::Unsupported)?;

        let (tx, rx) = oneshot::channel();
        let reply: Reply = Rc::new(RefCell::new(Some(tx)));

        let ok_reply = reply.clone();
        let on_success: Closure<dyn FnMut(GeolocationPosition)> =
            Closure::once(move |position: GeolocationPosition| {
                let coords = position.coords();
                send(
                    &ok_reply,
                    Ok(Coordinates {
                        latitude: coords.latitude(),
                        longitude: coords.longitude(),
                    }),
                );
            });
        let err_reply = reply.clone();
        let on_error: Closure<dyn FnMut(GeolocationPositionError)> =
            Closure::once(move |error: GeolocationPositionError| {
                let reason = if error.code() == PERMISSION_DENIED {
                    GeoError::Denied
                } else {
                    GeoError::Unavailable(error.message())
                };
                send(&err_reply, Err(reason));
            });

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref::<js_sys::Function>(),
                Some(on_error.as_ref().unchecked_ref::<js_sys::Function>()),
            )
            .map_err(|_| GeoError::Unsupported)?;

        // Callbacks must outlive the request.
        let result = rx
            .await
            .unwrap_or_else(|_| Err(GeoError::Unavailable("position request dropped".into())));
        drop(on_success);
        drop(on_error);
        result
    }
}
