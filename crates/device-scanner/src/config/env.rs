use super::constants::{
    ENV_IFCONFIG, ENV_IP, ENV_LSUSB, ENV_NETWORKSETUP, ENV_POWERSHELL, ENV_PRETTY,
    ENV_REFRESH_SECS, ENV_SYSTEM_PROFILER,
};
use super::types::ScannerConfig;
use super::util::{env_non_empty, parse_bool, refresh_secs_or_default};

impl ScannerConfig {
    pub(super) fn apply_env_overrides(&mut self) {
        self.apply_env_scan();
        self.apply_env_output();
        self.apply_env_tools();
    }

    fn apply_env_scan(&mut self) {
        if let Some(v) = env_non_empty(ENV_REFRESH_SECS) {
            match v.parse::<u64>() {
                Ok(parsed) => self.refresh_interval_secs = refresh_secs_or_default(parsed),
                Err(_) => tracing::warn!(value = %v, "ignoring invalid {}", ENV_REFRESH_SECS),
            }
        }
    }

    fn apply_env_output(&mut self) {
        if let Some(v) = env_non_empty(ENV_PRETTY) {
            self.pretty = parse_bool(&v);
        }
    }

    fn apply_env_tools(&mut self) {
        let slots = [
            (&mut self.tools.lsusb, ENV_LSUSB),
            (&mut self.tools.ip, ENV_IP),
            (&mut self.tools.powershell, ENV_POWERSHELL),
            (&mut self.tools.system_profiler, ENV_SYSTEM_PROFILER),
            (&mut self.tools.networksetup, ENV_NETWORKSETUP),
            (&mut self.tools.ifconfig, ENV_IFCONFIG),
        ];
        for (slot, name) in slots {
            if let Some(v) = env_non_empty(name) {
                *slot = Some(v);
            }
        }
    }
}
