//! Events list and the add-event form.

use crate::common::fakes::seeded_events;
use crate::common::test_helpers::{controller, logged_in};
use bikeshare_client_core::state::INCOMPLETE_EVENT_ERROR;
use bikeshare_client_core::{ClientError, NewEvent};
use pretty_assertions::assert_eq;

fn ride() -> NewEvent {
    NewEvent {
        name: "Ride".into(),
        date: "2024-05-01".into(),
        location: "Park".into(),
    }
}

#[tokio::test]
async fn create_event_resets_form_and_reloads_list() {
    let c = controller();
    let mut state = logged_in(&c).await;
    state.new_event = ride();

    c.create_event(&mut state).await;

    assert_eq!(state.new_event, NewEvent::default());
    assert_eq!(state.events.data, Some(c.api().stored_events()));
    let last = state.events.data.as_ref().and_then(|e| e.last()).cloned().expect("event");
    assert_eq!(
        (last.name.as_str(), last.date.as_str(), last.location.as_str()),
        ("Ride", "2024-05-01", "Park")
    );
    assert_eq!(c.api().count("create_event"), 1);
    assert_eq!(c.api().count("events"), 2);
}

#[tokio::test]
async fn incomplete_event_is_not_posted() {
    let c = controller();
    let mut state = logged_in(&c).await;
    state.new_event = NewEvent {
        location: String::new(),
        ..ride()
    };

    c.create_event(&mut state).await;

    assert_eq!(c.api().count("create_event"), 0);
    assert_eq!(state.event_submit.error.as_deref(), Some(INCOMPLETE_EVENT_ERROR));
    assert_eq!(state.new_event.name, "Ride");
}

#[tokio::test]
async fn failed_create_still_clears_form_and_reloads() {
    let c = controller();
    let mut state = logged_in(&c).await;
    c.api().fail("create_event");
    state.new_event = ride();

    c.create_event(&mut state).await;

    assert_eq!(state.new_event, NewEvent::default());
    assert!(state.event_submit.error.is_some());
    assert_eq!(state.events.data, Some(seeded_events()));
    assert_eq!(c.api().count("events"), 2);
}

#[tokio::test]
async fn failed_list_fetch_keeps_previous_events() {
    let c = controller();
    let mut state = logged_in(&c).await;
    c.api().fail("events");

    c.fetch_events(&mut state).await;

    assert_eq!(state.events.data, Some(seeded_events()));
    assert!(state.events.error.is_some());

    c.api().recover("events");
    c.fetch_events(&mut state).await;
    assert!(state.events.error.is_none());
}

#[tokio::test]
async fn events_request_carries_session_token() {
    let c = controller();
    let _state = logged_in(&c).await;
    assert!(c.api().calls().contains(&"events rider".to_string()));
}

#[tokio::test]
async fn response_after_logout_is_dropped() {
    let c = controller();
    let mut state = logged_in(&c).await;
    let ticket = state.begin_events().expect("ticket");
    state.logout();

    assert!(!state.finish_events(ticket.id, Ok(seeded_events())));
    assert!(state.events.data.is_none());
}

#[tokio::test]
async fn response_from_previous_session_is_dropped_after_relogin() {
    let c = controller();
    let mut state = logged_in(&c).await;
    let stale = state.begin_events().expect("ticket");
    state.logout();
    state.begin_auth();
    state.complete_login("rider".into());
    let fresh = state.begin_events().expect("ticket");

    assert!(!state.finish_events(
        stale.id,
        Err(ClientError::Status {
            status: 500,
            body: String::new()
        })
    ));
    assert!(state.events.error.is_none());
    assert!(state.finish_events(fresh.id, Ok(vec![])));
}
