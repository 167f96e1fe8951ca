use std::time::Duration;

/// Runtime settings for the scanner host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    pub refresh_interval_secs: u64,
    pub pretty: bool,
    pub tools: ToolConfig,
}

impl ScannerConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

/// Executable overrides. `None` keeps the platform default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolConfig {
    pub lsusb: Option<String>,
    pub ip: Option<String>,
    pub powershell: Option<String>,
    pub system_profiler: Option<String>,
    pub networksetup: Option<String>,
    pub ifconfig: Option<String>,
}
