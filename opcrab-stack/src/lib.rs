//! Part of [opcrab](https://crates.io/crates/opcrab), an OPC UA client
//! library.
//!
//! This crate defines the trait boundary to the underlying OPC UA network
//! stack along with the state and event types the stack reports through it.
//! Connection establishment, secure channel and session negotiation and the
//! wire encoding of every request all live on the far side of [UaStack]; the
//! client crate only drives implementations of it.
//!
//! # Feature Flags
//!
//! - `sim-stack`: Enables the in-memory [sim] stack implementation. Disabled
//!   by default.

mod traits;
mod types;

pub use traits::{DynStack, UaStack};
pub use types::*;

/// A basic [UaStack] implementation backed by an in-memory node store
///
/// Useful for writing tests where it is not appropriate to be running a real
/// OPC UA server
#[cfg(any(feature = "sim-stack", doc))]
pub mod sim;
