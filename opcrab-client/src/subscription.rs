use log::{debug, warn};
use opcrab_types::{NodeId, StatusCode};

use crate::{error::StatusError, Client, ClientError};

impl Client {
    /// Create a subscription with the stack's default parameters.
    ///
    /// Returns `None` when the server rejects the request. A failed attempt
    /// is an ordinary retryable outcome, not an error.
    pub fn create_subscription(&mut self) -> Option<u32> {
        let (status, subscription_id) = self.stack.create_subscription();
        if status.is_good() {
            debug!("created subscription {subscription_id}");
            Some(subscription_id)
        } else {
            warn!("create subscription failed: {}", status.name());
            None
        }
    }

    /// Register a data-change monitored item on one node under
    /// `subscription_id`, requesting both server and source timestamps.
    ///
    /// Returns `None` when the server rejects the request.
    pub fn add_monitored_item(&mut self, subscription_id: u32, ns: u16, name: &str) -> Option<u32> {
        let node = NodeId::new(ns, name);
        let (status, monitored_item_id) = self.stack.create_monitored_item(subscription_id, &node);
        if status.is_good() {
            debug!("monitoring {node} as item {monitored_item_id}");
            Some(monitored_item_id)
        } else {
            warn!("monitor request for {node} failed: {}", status.name());
            None
        }
    }

    /// Drive one monitoring cycle with the configured timeout.
    ///
    /// See [run_cycle_with](Client::run_cycle_with).
    pub fn run_cycle(&mut self) -> StatusCode {
        self.run_cycle_with(self.config.cycle_timeout_ms)
    }

    /// Drive one monitoring cycle bounded by `timeout_ms` milliseconds.
    ///
    /// The single integration point with the stack's event machinery: one
    /// invocation delivers zero or more data-change events to the observers
    /// synchronously, in the order the stack surfaces them, before returning.
    /// Cycles are independent; nothing is reordered or coalesced across
    /// calls. There is no internal thread, so notifications only flow while
    /// the host keeps cycling.
    pub fn run_cycle_with(&mut self, timeout_ms: u32) -> StatusCode {
        let outcome = self.stack.iterate(timeout_ms);
        self.pump(outcome.events);
        outcome.status
    }

    /// [run_cycle](Client::run_cycle), but a non-good status is an error.
    pub fn try_run_cycle(&mut self) -> Result<(), ClientError> {
        StatusError::check(self.run_cycle())?;
        Ok(())
    }

    /// [run_cycle_with](Client::run_cycle_with), but a non-good status is an
    /// error.
    pub fn try_run_cycle_with(&mut self, timeout_ms: u32) -> Result<(), ClientError> {
        StatusError::check(self.run_cycle_with(timeout_ms))?;
        Ok(())
    }
}
