use serde::{Deserialize, Serialize};

/// Client behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Upper bound, in milliseconds, on how long one
    /// [run_cycle](crate::Client::run_cycle) blocks waiting for network
    /// activity.
    pub cycle_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cycle_timeout_ms: 1000,
        }
    }
}
