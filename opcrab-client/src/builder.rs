use opcrab_stack::{DynStack, UaStack};

use crate::{Client, ClientConfig};

/// A builder for creating and configuring [Client] instances.
pub struct ClientBuilder {
    pub(crate) stack: Box<DynStack>,
    pub(crate) config: ClientConfig,
}

impl ClientBuilder {
    /// Creates a builder over the given stack with default configuration.
    pub fn new<S: UaStack + Send + 'static>(stack: S) -> Self {
        Self {
            stack: Box::new(stack),
            config: ClientConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default monitoring-cycle timeout.
    pub fn with_cycle_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.config.cycle_timeout_ms = timeout_ms;
        self
    }

    /// Build the client.
    pub fn build(self) -> Client {
        Client::new_from_builder(self)
    }
}
