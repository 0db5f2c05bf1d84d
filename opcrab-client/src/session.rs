use log::{debug, info};
use opcrab_stack::{ChannelState, DynStack, SessionState, StackEvent};
use opcrab_types::StatusCode;

use crate::{
    builder::ClientBuilder, error::StatusError, event::DataChangeEvent, ClientConfig, ClientError,
};

type SessionObserver = Box<dyn FnMut()>;
type DataChangeObserver = Box<dyn FnMut(DataChangeEvent)>;

/// Handle owning one connection to an OPC UA server.
///
/// A `Client` owns its stack handle and observer set as one unit; dropping it
/// releases both together. It is built for single-threaded ownership: every
/// operation takes `&mut self`, there is no internal locking, and all network
/// progress happens on the calling thread inside the operation's own bound.
///
/// After a successful [connect](Client::connect) the session activates
/// asynchronously; drive [run_cycle](Client::run_cycle) until the
/// session-activated observer fires or [session_state](Client::session_state)
/// reports [SessionState::Activated].
pub struct Client {
    pub(crate) stack: Box<DynStack>,
    pub(crate) config: ClientConfig,
    last_session_state: SessionState,
    session_observer: Option<SessionObserver>,
    data_change_observer: Option<DataChangeObserver>,
}

impl Client {
    pub(crate) fn new_from_builder(builder: ClientBuilder) -> Self {
        Self {
            stack: builder.stack,
            config: builder.config,
            last_session_state: SessionState::Closed,
            session_observer: None,
            data_change_observer: None,
        }
    }

    /// Register the observer invoked when a session becomes active.
    ///
    /// Fired exactly once per transition into [SessionState::Activated]; a
    /// repeated Activated report without an intervening non-Activated state
    /// does not re-fire it.
    pub fn on_session_activated<F>(&mut self, observer: F)
    where
        F: FnMut() + 'static,
    {
        self.session_observer = Some(Box::new(observer));
    }

    /// Register the observer invoked for every data-change notification.
    pub fn on_data_change<F>(&mut self, observer: F)
    where
        F: FnMut(DataChangeEvent) + 'static,
    {
        self.data_change_observer = Some(Box::new(observer));
    }

    /// Connect to the server at `endpoint`.
    ///
    /// Returns once the stack has accepted the request; activation completes
    /// across subsequent cycles. On failure the handle remains usable for
    /// another attempt.
    pub fn connect(&mut self, endpoint: &str) -> Result<(), ClientError> {
        info!("connecting to {endpoint}");
        let outcome = self.stack.connect(endpoint);
        self.pump(outcome.events);
        StatusError::check(outcome.status)?;
        Ok(())
    }

    /// Disconnect from the server.
    ///
    /// Idempotent at this layer. Disconnecting an already closed handle is
    /// not an error condition, so the stack's status is returned rather than
    /// raised.
    pub fn disconnect(&mut self) -> StatusCode {
        info!("disconnecting");
        let outcome = self.stack.disconnect();
        self.pump(outcome.events);
        outcome.status
    }

    /// Latest channel and session state reported by the stack.
    pub fn state(&self) -> (ChannelState, SessionState) {
        self.stack.state()
    }

    /// Latest session state, the primary indicator for simple callers.
    pub fn session_state(&self) -> SessionState {
        self.state().1
    }

    /// Route everything a stack call observed to its handler, in order.
    pub(crate) fn pump(&mut self, events: Vec<StackEvent>) {
        for event in events {
            match event {
                StackEvent::StateChange { channel, session } => {
                    self.on_state_change(channel, session)
                }
                StackEvent::DataChange(notification) => {
                    let observer = match self.data_change_observer.as_mut() {
                        Some(observer) => observer,
                        /* nothing registered, drop rather than buffer */
                        None => continue,
                    };
                    observer(DataChangeEvent::from_notification(notification));
                }
                StackEvent::SubscriptionDeleted { subscription_id } => {
                    debug!("subscription {subscription_id} deleted by server");
                }
                StackEvent::SubscriptionInactive { subscription_id } => {
                    debug!("subscription {subscription_id} inactive");
                }
            }
        }
    }

    fn on_state_change(&mut self, channel: ChannelState, session: SessionState) {
        debug!("state change: channel={channel} session={session}");
        let was_activated = self.last_session_state == SessionState::Activated;
        self.last_session_state = session;
        if session == SessionState::Activated && !was_activated {
            info!("session activated");
            if let Some(observer) = self.session_observer.as_mut() {
                observer();
            }
        }
    }
}
