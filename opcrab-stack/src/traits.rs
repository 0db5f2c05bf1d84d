use opcrab_types::{NodeId, StatusCode, Variant};

use crate::{ChannelState, Outcome, ReadResult, ServiceResponse, SessionState};

/// The boundary to the underlying OPC UA network stack.
///
/// Every call is synchronous and drives network progress on the caller's
/// thread; implementations must not spawn background work. Calls that can
/// advance the connection ([connect](UaStack::connect),
/// [disconnect](UaStack::disconnect), [iterate](UaStack::iterate)) return the
/// state changes and notifications they observed as part of their [Outcome].
pub trait UaStack {
    /// Begin connecting to the server at `endpoint`.
    ///
    /// A good status only means the stack accepted the request; session
    /// activation completes across subsequent [iterate](UaStack::iterate)
    /// calls.
    fn connect(&mut self, endpoint: &str) -> Outcome;

    /// Tear the session and channel down.
    ///
    /// Disconnecting an already closed handle is not an error.
    fn disconnect(&mut self) -> Outcome;

    /// The most recent channel and session state.
    fn state(&self) -> (ChannelState, SessionState);

    /// Read the value attribute of one node.
    fn read_value(&mut self, node: &NodeId) -> ReadResult;

    /// Write the value attribute of one node.
    fn write_value(&mut self, node: &NodeId, value: Variant) -> StatusCode;

    /// Batched read service over the value attribute of `nodes`.
    fn read_service(&mut self, nodes: &[NodeId]) -> ServiceResponse<ReadResult>;

    /// Batched write service over the value attribute.
    fn write_service(&mut self, writes: Vec<(NodeId, Variant)>) -> ServiceResponse<StatusCode>;

    /// Create a subscription with the stack's default parameters.
    fn create_subscription(&mut self) -> (StatusCode, u32);

    /// Register a data-change monitored item for `node` under
    /// `subscription_id`, requesting both server and source timestamps.
    fn create_monitored_item(&mut self, subscription_id: u32, node: &NodeId) -> (StatusCode, u32);

    /// Drive network I/O for at most `timeout_ms` milliseconds, surfacing
    /// whatever state changes and notifications arrive in the meantime.
    fn iterate(&mut self, timeout_ms: u32) -> Outcome;
}

pub type DynStack = dyn UaStack + Send;
