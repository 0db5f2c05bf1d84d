#![allow(dead_code)]

use opcrab_client::{Client, ClientBuilder};
use opcrab_stack::sim::{SimHandle, SimStack};

pub const ENDPOINT: &str = "opc.tcp://localhost:4840";

pub fn sim_client() -> (Client, SimHandle) {
    let (stack, handle) = SimStack::new();
    (ClientBuilder::new(stack).build(), handle)
}

/// A client connected and driven until its session is active.
pub fn connected_client() -> (Client, SimHandle) {
    let (mut client, handle) = sim_client();
    client.connect(ENDPOINT).unwrap();
    client.run_cycle();
    (client, handle)
}
