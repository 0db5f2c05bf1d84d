//! Connect, read, write and batch-read a handful of variables against the
//! in-memory simulator stack. Swap [SimStack] for a real stack binding to
//! talk to an actual server.

use opcrab::client::ClientBuilder;
use opcrab::stack::sim::SimStack;

fn main() {
    let (stack, server) = SimStack::new();
    server.insert(5, "uint32b", 1000u32);
    server.insert(5, "uint16a", 0u16);

    let mut client = ClientBuilder::new(stack).build();
    client.connect("opc.tcp://localhost:4840").unwrap();
    client.run_cycle();

    let before: u32 = client.read_uint32(5, "uint32b").unwrap();
    println!("uint32b = {before}");

    client.write_uint32(5, "uint32b", 4242).unwrap();
    println!("uint32b = {}", client.read_uint32(5, "uint32b").unwrap());

    let values = client.multi_read(5, &["uint32b", "uint16a"]).unwrap();
    println!("batch   = {values:?}");

    client.disconnect();
}
