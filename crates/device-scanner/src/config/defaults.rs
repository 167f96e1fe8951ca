use super::constants::DEFAULT_REFRESH_INTERVAL_SECS;
use super::types::{ScannerConfig, ToolConfig};

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            pretty: false,
            tools: ToolConfig::default(),
        }
    }
}
