/// Refresh period of the polling host when nothing else is configured.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

pub const CONFIG_PATH_ENV: &str = "DEVICE_SCANNER_CONFIG";

pub(super) const ENV_REFRESH_SECS: &str = "DEVICE_SCANNER_REFRESH_SECS";
pub(super) const ENV_PRETTY: &str = "DEVICE_SCANNER_PRETTY";
pub(super) const ENV_LSUSB: &str = "DEVICE_SCANNER_LSUSB";
pub(super) const ENV_IP: &str = "DEVICE_SCANNER_IP";
pub(super) const ENV_POWERSHELL: &str = "DEVICE_SCANNER_POWERSHELL";
pub(super) const ENV_SYSTEM_PROFILER: &str = "DEVICE_SCANNER_SYSTEM_PROFILER";
pub(super) const ENV_NETWORKSETUP: &str = "DEVICE_SCANNER_NETWORKSETUP";
pub(super) const ENV_IFCONFIG: &str = "DEVICE_SCANNER_IFCONFIG";
