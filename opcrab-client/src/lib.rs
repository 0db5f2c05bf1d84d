//! Part of [opcrab](https://crates.io/crates/opcrab), an OPC UA client
//! library.
//!
//! Client SDK over any [opcrab_stack::UaStack] implementation: the
//! connection and session lifecycle, subscriptions with data-change
//! dispatch, and the typed single and batched read/write surface.
//!
//! The model is single-threaded and cooperative. There is no background I/O
//! task; all network progress happens inside the blocking calls the host
//! makes, and subscription notifications are only delivered while the host
//! drives [Client::run_cycle].

mod accessors;
mod builder;
mod config;
mod error;
mod event;
mod session;
mod subscription;

pub use builder::ClientBuilder;
pub use config::ClientConfig;
pub use error::{ClientError, StatusError};
pub use event::DataChangeEvent;
pub use session::Client;
