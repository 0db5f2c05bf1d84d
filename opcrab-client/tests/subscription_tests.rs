mod utils;

use std::cell::RefCell;
use std::rc::Rc;

use opcrab_client::{Client, DataChangeEvent};
use opcrab_stack::StackEvent;
use opcrab_types::{Scalar, StatusCode};
use utils::{connected_client, sim_client};

fn event_recorder(client: &mut Client) -> Rc<RefCell<Vec<DataChangeEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    client.on_data_change(move |event| sink.borrow_mut().push(event));
    events
}

#[test]
fn one_change_delivers_one_event() {
    let (mut client, handle) = connected_client();
    handle.insert(5, "counter", 0i32);
    let events = event_recorder(&mut client);

    let sub = client.create_subscription().unwrap();
    let item = client.add_monitored_item(sub, 5, "counter").unwrap();

    handle.update(5, "counter", 41i32);
    assert!(client.run_cycle().is_good());

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].subscription_id, sub);
    assert_eq!(events[0].monitored_item_id, item);
    assert_eq!(events[0].value, Some(Scalar::Int32(41)));
    assert!(events[0].server_time.is_some());
    assert!(events[0].source_time.is_some());
}

#[test]
fn kinds_outside_the_notification_set_deliver_without_a_value() {
    let (mut client, handle) = connected_client();
    handle.insert(5, "uint32b", 1000u32);
    let events = event_recorder(&mut client);

    let sub = client.create_subscription().unwrap();
    let item = client.add_monitored_item(sub, 5, "uint32b").unwrap();

    handle.update(5, "uint32b", 2000u32);
    client.run_cycle();

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].monitored_item_id, item);
    assert_eq!(events[0].value, None);
}

#[test]
fn events_arrive_in_stack_order_within_a_cycle() {
    let (mut client, handle) = connected_client();
    handle.insert(5, "first", 0i16);
    handle.insert(5, "second", 0i16);
    let events = event_recorder(&mut client);

    let sub = client.create_subscription().unwrap();
    let first = client.add_monitored_item(sub, 5, "first").unwrap();
    let second = client.add_monitored_item(sub, 5, "second").unwrap();

    handle.update(5, "first", 1i16);
    handle.update(5, "second", 2i16);
    client.run_cycle();

    let order: Vec<u32> = events
        .borrow()
        .iter()
        .map(|event| event.monitored_item_id)
        .collect();
    assert_eq!(order, vec![first, second]);
}

#[test]
fn events_without_an_observer_are_dropped_not_buffered() {
    let (mut client, handle) = connected_client();
    handle.insert(5, "counter", 0i32);

    let sub = client.create_subscription().unwrap();
    client.add_monitored_item(sub, 5, "counter").unwrap();

    /* no observer yet: this change must vanish */
    handle.update(5, "counter", 1i32);
    client.run_cycle();

    let events = event_recorder(&mut client);
    handle.update(5, "counter", 2i32);
    client.run_cycle();

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].value, Some(Scalar::Int32(2)));
}

#[test]
fn create_subscription_is_none_when_rejected() {
    let (mut client, _handle) = sim_client();
    assert_eq!(client.create_subscription(), None);
}

#[test]
fn add_monitored_item_is_none_for_unknown_nodes() {
    let (mut client, _handle) = connected_client();
    let sub = client.create_subscription().unwrap();
    assert_eq!(client.add_monitored_item(sub, 5, "missing"), None);
}

#[test]
fn add_monitored_item_is_none_for_unknown_subscriptions() {
    let (mut client, handle) = connected_client();
    handle.insert(5, "counter", 0i32);
    assert_eq!(client.add_monitored_item(9999, 5, "counter"), None);
}

#[test]
fn server_side_subscription_deletion_is_inert() {
    let (mut client, handle) = connected_client();
    let events = event_recorder(&mut client);

    let sub = client.create_subscription().unwrap();
    handle.inject_event(StackEvent::SubscriptionDeleted {
        subscription_id: sub,
    });
    assert!(client.run_cycle().is_good());
    assert!(events.borrow().is_empty());
}

#[test]
fn try_run_cycle_raises_on_bad_status() {
    let (mut client, handle) = connected_client();
    handle.fail_next(StatusCode::BAD_SHUTDOWN);

    let err = client.try_run_cycle().unwrap_err();
    assert_eq!(
        err,
        opcrab_client::ClientError::Status(opcrab_client::StatusError {
            code: StatusCode::BAD_SHUTDOWN,
        })
    );
    assert!(client.try_run_cycle().is_ok());
}

#[test]
fn cycles_are_independent_across_calls() {
    let (mut client, handle) = connected_client();
    handle.insert(5, "counter", 0i32);
    let events = event_recorder(&mut client);

    let sub = client.create_subscription().unwrap();
    client.add_monitored_item(sub, 5, "counter").unwrap();

    handle.update(5, "counter", 1i32);
    client.run_cycle();
    handle.update(5, "counter", 2i32);
    client.run_cycle();

    let values: Vec<Option<Scalar>> = events.borrow().iter().map(|e| e.value.clone()).collect();
    assert_eq!(
        values,
        vec![Some(Scalar::Int32(1)), Some(Scalar::Int32(2))]
    );
}
