//! Actions keep running after the screen that dispatched them unmounts.
//! Each test mounts a root that drops the dispatching child as soon as the
//! action starts committing, then drives the VirtualDom against a stub backend.

use axum::routing::{get, post};
use axum::{Json, Router};
use bikeshare_client_core::{AppState, ClientConfig};
use bikeshare_frontend::actions::{dispatch, Action};
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Last state the root rendered.
#[derive(Clone, Default)]
struct Snapshot(Rc<RefCell<Option<AppState>>>);

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Snapshot {
    fn record(&self, state: &AppState) {
        *self.0.borrow_mut() = Some(state.clone());
    }

    fn latest(&self) -> Option<AppState> {
        self.0.borrow().clone()
    }
}

async fn spawn_stub() -> ClientConfig {
    let app = Router::new()
        .route(
            "/auth/login",
            post(|| async { Json(json!({ "access_token": "rider", "token_type": "bearer" })) }),
        )
        .route(
            "/events",
            get(|| async {
                Json(json!([{ "id": "1", "name": "Ride", "date": "2024-05-01", "location": "Park" }]))
            }),
        )
        .route("/predict", post(|| async { Json(json!({ "predicted_demand": 142 })) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    ClientConfig {
        api_base_url: format!("http://{}", addr),
        weather_url: format!("http://{}/v1/forecast", addr),
    }
}

/// Dispatches `action` once, on mount.
#[component]
fn Trigger(state: Signal<AppState>, config: Signal<ClientConfig>, action: Action) -> Element {
    use_hook(move || dispatch(state, config, action));
    rsx! { "working" }
}

/// Auth screen stand-in: replaced by the home shell once a token lands.
#[component]
fn SignInRoot(snapshot: Snapshot, base: ClientConfig) -> Element {
    let state = use_signal(|| {
        let mut s = AppState::new();
        s.credentials.username = "rider".into();
        s.credentials.password = "pedal123".into();
        s
    });
    let config = use_signal(move || base);
    snapshot.record(&state.read());
    let authenticated = state.read().is_authenticated();

    rsx! {
        if authenticated {
            "home"
        } else {
            Trigger { state, config, action: Action::Login }
        }
    }
}

/// Predict tab stand-in: unmounted as soon as the request is in flight.
#[component]
fn PredictRoot(snapshot: Snapshot, base: ClientConfig) -> Element {
    let state = use_signal(|| {
        let mut s = AppState::new();
        s.complete_login("rider".into());
        s
    });
    let config = use_signal(move || base);
    snapshot.record(&state.read());
    let idle = {
        let s = state.read();
        !s.prediction.loading && s.prediction.data.is_none()
    };

    rsx! {
        if idle {
            Trigger { state, config, action: Action::Predict }
        } else {
            "switched tab"
        }
    }
}

async fn drive(dom: &mut VirtualDom, snapshot: &Snapshot, done: fn(&AppState) -> bool) -> AppState {
    dom.rebuild_in_place();
    let settled = tokio::time::timeout(Duration::from_secs(10), async {
        while !snapshot.latest().is_some_and(|s| done(&s)) {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
    })
    .await;
    let state = snapshot.latest().expect("root rendered");
    assert!(settled.is_ok(), "actions stalled: {:?}", state);
    state
}

#[tokio::test]
async fn login_finishes_events_and_weather_after_auth_screen_unmounts() {
    let base = spawn_stub().await;
    let snapshot = Snapshot::default();
    let mut dom = VirtualDom::new_with_props(
        SignInRoot,
        SignInRootProps {
            snapshot: snapshot.clone(),
            base,
        },
    );

    let state = drive(&mut dom, &snapshot, |s| {
        s.is_authenticated() && !s.events.loading && !s.weather.loading
    })
    .await;

    assert!(state.is_authenticated());
    let names: Vec<String> = state
        .events
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Ride".to_string()]);
    // Off the browser there is no position source.
    assert_eq!(state.location_label, "GPS not supported");
}

#[tokio::test]
async fn prediction_commits_after_its_screen_unmounts() {
    let base = spawn_stub().await;
    let snapshot = Snapshot::default();
    let mut dom = VirtualDom::new_with_props(
        PredictRoot,
        PredictRootProps {
            snapshot: snapshot.clone(),
            base,
        },
    );

    let state = drive(&mut dom, &snapshot, |s| s.prediction.data.is_some()).await;

    assert!(!state.prediction.loading);
    assert_eq!(state.predicted_bikes(), Some(142));
}
