mod utils;

use std::cell::Cell;
use std::rc::Rc;

use opcrab_client::ClientError;
use opcrab_stack::{ChannelState, SessionState};
use opcrab_types::StatusCode;
use utils::{connected_client, sim_client, ENDPOINT};

fn activation_counter(client: &mut opcrab_client::Client) -> Rc<Cell<u32>> {
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    client.on_session_activated(move || counter.set(counter.get() + 1));
    fired
}

#[test]
fn connect_activates_across_cycles() {
    let (mut client, _handle) = sim_client();
    let fired = activation_counter(&mut client);

    client.connect(ENDPOINT).unwrap();
    assert_eq!(fired.get(), 0);
    assert_eq!(client.session_state(), SessionState::CreateRequested);

    client.run_cycle();
    assert_eq!(fired.get(), 1);
    assert_eq!(
        client.state(),
        (ChannelState::Open, SessionState::Activated)
    );
}

#[test]
fn activation_fires_once_per_transition_into_activated() {
    let (mut client, handle) = sim_client();
    let fired = activation_counter(&mut client);

    for session in [
        SessionState::Created,
        SessionState::ActivateRequested,
        SessionState::Activated,
        SessionState::Activated,
        SessionState::Closing,
        SessionState::Activated,
    ] {
        handle.inject_state(ChannelState::Open, session);
    }
    client.run_cycle();

    assert_eq!(fired.get(), 2);
}

#[test]
fn repeated_activated_reports_do_not_refire_across_cycles() {
    let (mut client, handle) = sim_client();
    let fired = activation_counter(&mut client);

    handle.inject_state(ChannelState::Open, SessionState::Activated);
    client.run_cycle();
    handle.inject_state(ChannelState::Open, SessionState::Activated);
    client.run_cycle();

    assert_eq!(fired.get(), 1);
}

#[test]
fn failed_connect_leaves_the_handle_usable() {
    let (mut client, handle) = sim_client();
    handle.fail_next(StatusCode::BAD_CONNECTION_REJECTED);

    let err = client.connect(ENDPOINT).unwrap_err();
    match err {
        ClientError::Status(status) => {
            assert_eq!(status.code, StatusCode::BAD_CONNECTION_REJECTED)
        }
        other => panic!("expected a status error, got {other:?}"),
    }

    client.connect(ENDPOINT).unwrap();
    client.run_cycle();
    assert_eq!(client.session_state(), SessionState::Activated);
}

#[test]
fn disconnect_is_idempotent() {
    let (mut client, _handle) = connected_client();
    assert!(client.disconnect().is_good());
    assert!(client.disconnect().is_good());
    assert_eq!(
        client.state(),
        (ChannelState::Closed, SessionState::Closed)
    );
}

#[test]
fn reconnect_after_disconnect_fires_the_observer_again() {
    let (mut client, _handle) = sim_client();
    let fired = activation_counter(&mut client);

    client.connect(ENDPOINT).unwrap();
    client.run_cycle();
    client.disconnect();
    client.connect(ENDPOINT).unwrap();
    client.run_cycle();

    assert_eq!(fired.get(), 2);
}
