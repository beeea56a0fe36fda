/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed panel configuration
[POS]:    Configuration layer - panel setup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};

/// Top-level configuration for the quote panel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PanelConfig {
    /// WebSocket endpoint of the quote feed
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Depth of the inbound snapshot channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_endpoint() -> String {
    "ws://127.0.0.1:8080/ws".to_string()
}

fn default_channel_capacity() -> usize {
    100
}

impl PanelConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
