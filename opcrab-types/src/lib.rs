//! Part of [opcrab](https://crates.io/crates/opcrab), an OPC UA client
//! library.
//!
//! Core value model shared by the opcrab crates: node identifiers, protocol
//! status codes, the tagged [Variant] wire container and the typed codec
//! between Rust values and variants. Everything in this crate is pure; no
//! networking happens here.

mod node_id;
mod status;
mod time;
mod value;
mod variant;

pub mod traits;

pub use node_id::NodeId;
pub use status::{status_name, StatusCode};
pub use time::UaDateTime;
pub use value::{Shape, ValueError};
pub use variant::{Array, DataKind, Scalar, Variant};
