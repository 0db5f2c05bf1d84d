use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use opcrab_types::{NodeId, StatusCode, UaDateTime, Variant};

use crate::{
    ChannelState, DataChangeNotification, Outcome, ReadResult, ServiceResponse, SessionState,
    StackEvent, UaStack,
};

/* 2020-01-01T00:00:00Z in protocol ticks; the simulated clock starts here */
const SIM_EPOCH_TICKS: i64 = 132_223_104_000_000_000;
/* the clock advances one second per iterate call */
const TICKS_PER_CYCLE: i64 = 10_000_000;

struct MonitoredItem {
    id: u32,
    subscription_id: u32,
    node: NodeId,
}

struct SimState {
    connected: bool,
    channel: ChannelState,
    session: SessionState,
    activation_pending: bool,
    nodes: HashMap<NodeId, Variant>,
    item_status: HashMap<NodeId, StatusCode>,
    subscriptions: Vec<u32>,
    monitored: Vec<MonitoredItem>,
    next_subscription_id: u32,
    next_monitored_item_id: u32,
    /* notifications queued for the next iterate, timestamps filled at delivery */
    pending: Vec<DataChangeNotification>,
    injected: Vec<StackEvent>,
    forced: Option<StatusCode>,
    clock: UaDateTime,
}

impl SimState {
    fn transition(&mut self, channel: ChannelState, session: SessionState) -> StackEvent {
        self.channel = channel;
        self.session = session;
        StackEvent::StateChange { channel, session }
    }

    fn mark_dirty(&mut self, node: &NodeId, value: &Variant) {
        for item in &self.monitored {
            if item.node == *node {
                self.pending.push(DataChangeNotification {
                    subscription_id: item.subscription_id,
                    monitored_item_id: item.id,
                    server_timestamp: None,
                    source_timestamp: None,
                    value: value.clone(),
                });
            }
        }
    }

    fn item_read(&self, node: &NodeId) -> ReadResult {
        if let Some(status) = self.item_status.get(node) {
            if status.is_bad() {
                return ReadResult::bad(*status);
            }
        }
        match self.nodes.get(node) {
            Some(value) => ReadResult::good(value.clone()),
            None => ReadResult::bad(StatusCode::BAD_NODE_ID_UNKNOWN),
        }
    }

    fn item_write(&mut self, node: &NodeId, value: Variant) -> StatusCode {
        if let Some(status) = self.item_status.get(node) {
            if status.is_bad() {
                return *status;
            }
        }
        let compatible = match self.nodes.get(node) {
            Some(existing) => {
                existing.kind() == value.kind() && existing.is_scalar() == value.is_scalar()
            }
            None => return StatusCode::BAD_NODE_ID_UNKNOWN,
        };
        if !compatible {
            return StatusCode::BAD_TYPE_MISMATCH;
        }
        self.mark_dirty(node, &value);
        self.nodes.insert(node.clone(), value);
        StatusCode::GOOD
    }
}

/// Control surface for a [SimStack].
///
/// Tests keep the handle and use it to seed the simulated namespace, change
/// values "server-side", inject state transitions and force failures, while
/// the stack half is owned by the client under test.
#[derive(Clone)]
pub struct SimHandle {
    state: Arc<Mutex<SimState>>,
}

impl SimHandle {
    /// Seed or replace a node without notifying monitored items.
    pub fn insert<V: Into<Variant>>(&self, ns: u16, identifier: &str, value: V) {
        let mut state = self.state.lock().unwrap();
        state.nodes.insert(NodeId::new(ns, identifier), value.into());
    }

    /// Change a node value server-side, queueing a notification for every
    /// monitored item watching it.
    pub fn update<V: Into<Variant>>(&self, ns: u16, identifier: &str, value: V) {
        let mut state = self.state.lock().unwrap();
        let node = NodeId::new(ns, identifier);
        let value = value.into();
        state.mark_dirty(&node, &value);
        state.nodes.insert(node, value);
    }

    /// Last stored value of a node.
    pub fn value(&self, ns: u16, identifier: &str) -> Option<Variant> {
        let state = self.state.lock().unwrap();
        state.nodes.get(&NodeId::new(ns, identifier)).cloned()
    }

    /// Force the next stack call to report `status` and do nothing else.
    pub fn fail_next(&self, status: StatusCode) {
        self.state.lock().unwrap().forced = Some(status);
    }

    /// Give one node a fixed per-item status, honoured by single and batched
    /// operations alike.
    pub fn set_item_status(&self, ns: u16, identifier: &str, status: StatusCode) {
        let mut state = self.state.lock().unwrap();
        state.item_status.insert(NodeId::new(ns, identifier), status);
    }

    /// Apply a raw state transition, surfaced on the next iterate.
    pub fn inject_state(&self, channel: ChannelState, session: SessionState) {
        let mut state = self.state.lock().unwrap();
        let event = state.transition(channel, session);
        state.injected.push(event);
    }

    /// Queue an arbitrary stack event, surfaced on the next iterate.
    pub fn inject_event(&self, event: StackEvent) {
        self.state.lock().unwrap().injected.push(event);
    }
}

/// In-memory [UaStack] over a scriptable node store.
pub struct SimStack {
    state: Arc<Mutex<SimState>>,
}

impl SimStack {
    /// Create a simulator plus the handle used to script it.
    pub fn new() -> (Self, SimHandle) {
        let state = Arc::new(Mutex::new(SimState {
            connected: false,
            channel: ChannelState::Closed,
            session: SessionState::Closed,
            activation_pending: false,
            nodes: HashMap::new(),
            item_status: HashMap::new(),
            subscriptions: Vec::new(),
            monitored: Vec::new(),
            next_subscription_id: 1,
            next_monitored_item_id: 1,
            pending: Vec::new(),
            injected: Vec::new(),
            forced: None,
            clock: UaDateTime::new(SIM_EPOCH_TICKS),
        }));
        (
            Self {
                state: state.clone(),
            },
            SimHandle { state },
        )
    }
}

impl UaStack for SimStack {
    fn connect(&mut self, _endpoint: &str) -> Outcome {
        let mut state = self.state.lock().unwrap();
        if let Some(status) = state.forced.take() {
            return Outcome::new(status);
        }
        state.connected = true;
        state.activation_pending = true;
        let event = state.transition(ChannelState::Open, SessionState::CreateRequested);
        Outcome::with_events(StatusCode::GOOD, vec![event])
    }

    fn disconnect(&mut self) -> Outcome {
        let mut state = self.state.lock().unwrap();
        let mut events = Vec::new();
        if state.connected {
            state.connected = false;
            state.activation_pending = false;
            events.push(state.transition(ChannelState::Closing, SessionState::Closing));
            events.push(state.transition(ChannelState::Closed, SessionState::Closed));
        }
        state.pending.clear();
        Outcome::with_events(StatusCode::GOOD, events)
    }

    fn state(&self) -> (ChannelState, SessionState) {
        let state = self.state.lock().unwrap();
        (state.channel, state.session)
    }

    fn read_value(&mut self, node: &NodeId) -> ReadResult {
        let mut state = self.state.lock().unwrap();
        if let Some(status) = state.forced.take() {
            return ReadResult::bad(status);
        }
        if !state.connected {
            return ReadResult::bad(StatusCode::BAD_SERVER_NOT_CONNECTED);
        }
        state.item_read(node)
    }

    fn write_value(&mut self, node: &NodeId, value: Variant) -> StatusCode {
        let mut state = self.state.lock().unwrap();
        if let Some(status) = state.forced.take() {
            return status;
        }
        if !state.connected {
            return StatusCode::BAD_SERVER_NOT_CONNECTED;
        }
        state.item_write(node, value)
    }

    fn read_service(&mut self, nodes: &[NodeId]) -> ServiceResponse<ReadResult> {
        let mut state = self.state.lock().unwrap();
        if let Some(status) = state.forced.take() {
            return ServiceResponse::failed(status);
        }
        if !state.connected {
            return ServiceResponse::failed(StatusCode::BAD_SERVER_NOT_CONNECTED);
        }
        ServiceResponse {
            service_result: StatusCode::GOOD,
            results: nodes.iter().map(|node| state.item_read(node)).collect(),
        }
    }

    fn write_service(&mut self, writes: Vec<(NodeId, Variant)>) -> ServiceResponse<StatusCode> {
        let mut state = self.state.lock().unwrap();
        if let Some(status) = state.forced.take() {
            return ServiceResponse::failed(status);
        }
        if !state.connected {
            return ServiceResponse::failed(StatusCode::BAD_SERVER_NOT_CONNECTED);
        }
        ServiceResponse {
            service_result: StatusCode::GOOD,
            results: writes
                .into_iter()
                .map(|(node, value)| state.item_write(&node, value))
                .collect(),
        }
    }

    fn create_subscription(&mut self) -> (StatusCode, u32) {
        let mut state = self.state.lock().unwrap();
        if let Some(status) = state.forced.take() {
            return (status, 0);
        }
        if !state.connected {
            return (StatusCode::BAD_SERVER_NOT_CONNECTED, 0);
        }
        let id = state.next_subscription_id;
        state.next_subscription_id += 1;
        state.subscriptions.push(id);
        (StatusCode::GOOD, id)
    }

    fn create_monitored_item(&mut self, subscription_id: u32, node: &NodeId) -> (StatusCode, u32) {
        let mut state = self.state.lock().unwrap();
        if let Some(status) = state.forced.take() {
            return (status, 0);
        }
        if !state.connected {
            return (StatusCode::BAD_SERVER_NOT_CONNECTED, 0);
        }
        if !state.subscriptions.contains(&subscription_id) {
            return (StatusCode::BAD_SUBSCRIPTION_ID_INVALID, 0);
        }
        if !state.nodes.contains_key(node) {
            return (StatusCode::BAD_NODE_ID_UNKNOWN, 0);
        }
        let id = state.next_monitored_item_id;
        state.next_monitored_item_id += 1;
        state.monitored.push(MonitoredItem {
            id,
            subscription_id,
            node: node.clone(),
        });
        (StatusCode::GOOD, id)
    }

    fn iterate(&mut self, _timeout_ms: u32) -> Outcome {
        let mut state = self.state.lock().unwrap();
        if let Some(status) = state.forced.take() {
            return Outcome::new(status);
        }
        let mut events = Vec::new();
        if state.activation_pending {
            state.activation_pending = false;
            events.push(state.transition(ChannelState::Open, SessionState::Created));
            events.push(state.transition(ChannelState::Open, SessionState::ActivateRequested));
            events.push(state.transition(ChannelState::Open, SessionState::Activated));
        }
        events.extend(state.injected.drain(..));
        state.clock = UaDateTime::new(state.clock.ticks() + TICKS_PER_CYCLE);
        let stamp = Some(state.clock);
        let pending: Vec<DataChangeNotification> = state.pending.drain(..).collect();
        for mut notification in pending {
            notification.server_timestamp = stamp;
            notification.source_timestamp = stamp;
            events.push(StackEvent::DataChange(notification));
        }
        Outcome::with_events(StatusCode::GOOD, events)
    }
}
