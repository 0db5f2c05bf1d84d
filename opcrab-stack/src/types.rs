use std::fmt;

use opcrab_types::{StatusCode, UaDateTime, Variant};

/// Application-session states reported by the stack.
///
/// The session is the authenticated application-level context nested inside
/// the secure channel. The stack pushes a new pair of states on every
/// transition; this layer never infers states on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    CreateRequested,
    Created,
    ActivateRequested,
    Activated,
    Closing,
}

/// Transport-level secure channel states reported by the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Closed,
    Open,
    Closing,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One data-change notification as surfaced by the stack, still in wire form.
#[derive(Debug, Clone, PartialEq)]
pub struct DataChangeNotification {
    pub subscription_id: u32,
    pub monitored_item_id: u32,
    pub server_timestamp: Option<UaDateTime>,
    pub source_timestamp: Option<UaDateTime>,
    pub value: Variant,
}

/// Occurrences a stack reports while one of its calls drives the connection.
///
/// Native stacks deliver these through registered callbacks; this boundary
/// returns the same occurrences as values from the call that observed them.
#[derive(Debug, Clone, PartialEq)]
pub enum StackEvent {
    StateChange {
        channel: ChannelState,
        session: SessionState,
    },
    DataChange(DataChangeNotification),
    SubscriptionDeleted {
        subscription_id: u32,
    },
    SubscriptionInactive {
        subscription_id: u32,
    },
}

/// Status of a driving call plus everything the stack observed while it ran.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: StatusCode,
    pub events: Vec<StackEvent>,
}

impl Outcome {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            events: Vec::new(),
        }
    }

    pub fn with_events(status: StatusCode, events: Vec<StackEvent>) -> Self {
        Self { status, events }
    }
}

/// Result of reading one value attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadResult {
    pub status: StatusCode,
    pub value: Option<Variant>,
}

impl ReadResult {
    pub fn good(value: Variant) -> Self {
        Self {
            status: StatusCode::GOOD,
            value: Some(value),
        }
    }

    pub fn bad(status: StatusCode) -> Self {
        Self {
            status,
            value: None,
        }
    }
}

/// Response of a batched service call: the service-level result plus one
/// entry per requested item, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse<T> {
    pub service_result: StatusCode,
    pub results: Vec<T>,
}

impl<T> ServiceResponse<T> {
    pub fn failed(service_result: StatusCode) -> Self {
        Self {
            service_result,
            results: Vec::new(),
        }
    }
}
