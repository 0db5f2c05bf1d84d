//! Subscribe to a variable and print the data-change events the observer
//! receives while the host drives the monitoring cycle.

use opcrab::client::ClientBuilder;
use opcrab::stack::sim::SimStack;

fn main() {
    let (stack, server) = SimStack::new();
    server.insert(5, "counter", 0i32);

    let mut client = ClientBuilder::new(stack).build();
    client.on_session_activated(|| println!("session is up"));
    client.on_data_change(|event| {
        println!(
            "sub={} item={} value={:?} source={:?}",
            event.subscription_id, event.monitored_item_id, event.value, event.source_time
        );
    });

    client.connect("opc.tcp://localhost:4840").unwrap();
    client.run_cycle();

    let sub = client.create_subscription().expect("subscription rejected");
    client
        .add_monitored_item(sub, 5, "counter")
        .expect("monitored item rejected");

    for i in 1i32..=3 {
        server.update(5, "counter", i);
        client.run_cycle();
    }

    client.disconnect();
}
