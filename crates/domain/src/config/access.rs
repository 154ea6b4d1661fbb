use serde::{Deserialize, Serialize};

/// Policy knobs for the denylist and access checks.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct AccessConfig {
    /// Treat an address as allowed when the denylist cannot be read.
    #[serde(default = "default_true")]
    pub fail_open_on_error: bool,

    /// Skip the denylist entirely for private and loopback callers.
    #[serde(default = "default_true")]
    pub trust_private_networks: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            fail_open_on_error: true,
            trust_private_networks: true,
        }
    }
}

fn default_true() -> bool {
    true
}
