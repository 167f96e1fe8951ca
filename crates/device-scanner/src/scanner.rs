use std::fmt::Display;

use inventory_core::{
    DeviceRecord, InventorySource, NetworkAdapterRecord, Platform, SystemCommandRunner,
    UnsupportedSource,
};
use platform_linux::{LinuxInventory, LinuxTools};
use platform_macos::{MacOsInventory, MacOsTools};
use platform_windows::{WindowsInventory, WindowsTools};
use tracing::{debug, warn};

use crate::config::{ScannerConfig, ToolConfig};
use crate::snapshot::InventorySnapshot;

/// Which categories a scan pass collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanScope {
    #[default]
    All,
    Devices,
    NetworkAdapters,
}

impl ScanScope {
    fn includes_devices(self) -> bool {
        matches!(self, Self::All | Self::Devices)
    }

    fn includes_adapters(self) -> bool {
        matches!(self, Self::All | Self::NetworkAdapters)
    }
}

pub struct DeviceScanner {
    source: Box<dyn InventorySource>,
}

impl Default for DeviceScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceScanner {
    /// Scanner for the host platform with default tool locations.
    pub fn new() -> Self {
        Self::for_platform(Platform::detect(), &ToolConfig::default())
    }

    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::for_platform(Platform::detect(), &config.tools)
    }

    pub fn for_platform(platform: Platform, tools: &ToolConfig) -> Self {
        let runner = SystemCommandRunner;
        let source: Box<dyn InventorySource> = match platform {
            Platform::Windows => Box::new(WindowsInventory::new(runner, windows_tools(tools))),
            Platform::MacOs => Box::new(MacOsInventory::new(runner, macos_tools(tools))),
            Platform::Linux => Box::new(LinuxInventory::new(runner, linux_tools(tools))),
            Platform::Other => Box::new(UnsupportedSource),
        };
        Self { source }
    }

    pub fn with_source(source: impl InventorySource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn platform(&self) -> Platform {
        self.source.platform()
    }

    /// Attached USB devices in tool order. Empty when the scan fails.
    pub fn list_devices(&self) -> Vec<DeviceRecord> {
        self.contain("devices", self.source.list_devices())
    }

    /// Network adapters in tool order. Empty when the scan fails.
    pub fn list_network_adapters(&self) -> Vec<NetworkAdapterRecord> {
        self.contain("network_adapters", self.source.list_network_adapters())
    }

    pub fn scan(&self) -> InventorySnapshot {
        self.scan_scope(ScanScope::All)
    }

    /// Run the requested categories one after the other. A failure in one
    /// category never prevents the other from being collected.
    pub fn scan_scope(&self, scope: ScanScope) -> InventorySnapshot {
        let devices = if scope.includes_devices() {
            self.list_devices()
        } else {
            Vec::new()
        };
        let network_adapters = if scope.includes_adapters() {
            self.list_network_adapters()
        } else {
            Vec::new()
        };

        InventorySnapshot::new(self.platform(), devices, network_adapters)
    }

    fn contain<T, E: Display>(&self, category: &str, result: Result<Vec<T>, E>) -> Vec<T> {
        match result {
            Ok(records) => {
                debug!(
                    platform = %self.platform(),
                    category,
                    count = records.len(),
                    "inventory scan finished"
                );
                records
            }
            Err(err) => {
                warn!(
                    platform = %self.platform(),
                    category,
                    error = %err,
                    "inventory scan failed; reporting no records"
                );
                Vec::new()
            }
        }
    }
}

fn linux_tools(tools: &ToolConfig) -> LinuxTools {
    let defaults = LinuxTools::default();
    LinuxTools {
        lsusb: tools.lsusb.clone().unwrap_or(defaults.lsusb),
        ip: tools.ip.clone().unwrap_or(defaults.ip),
    }
}

fn macos_tools(tools: &ToolConfig) -> MacOsTools {
    let defaults = MacOsTools::default();
    MacOsTools {
        system_profiler: tools
            .system_profiler
            .clone()
            .unwrap_or(defaults.system_profiler),
        networksetup: tools.networksetup.clone().unwrap_or(defaults.networksetup),
        ifconfig: tools.ifconfig.clone().unwrap_or(defaults.ifconfig),
    }
}

fn windows_tools(tools: &ToolConfig) -> WindowsTools {
    let defaults = WindowsTools::default();
    WindowsTools {
        powershell: tools.powershell.clone().unwrap_or(defaults.powershell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_overrides_replace_only_named_entries() {
        let tools = ToolConfig {
            lsusb: Some("/opt/usbutils/lsusb".to_string()),
            ifconfig: Some("/usr/local/bin/ifconfig".to_string()),
            ..ToolConfig::default()
        };

        let linux = linux_tools(&tools);
        assert_eq!(linux.lsusb, "/opt/usbutils/lsusb");
        assert_eq!(linux.ip, "ip");

        let macos = macos_tools(&tools);
        assert_eq!(macos.ifconfig, "/usr/local/bin/ifconfig");
        assert_eq!(macos.system_profiler, "/usr/sbin/system_profiler");

        assert_eq!(
            windows_tools(&tools).powershell,
            platform_windows::POWERSHELL_EXE
        );
    }

    #[test]
    fn unsupported_platform_scans_empty() {
        let scanner = DeviceScanner::for_platform(Platform::Other, &ToolConfig::default());
        let snapshot = scanner.scan();

        assert_eq!(snapshot.platform, Platform::Other);
        assert!(snapshot.devices.is_empty());
        assert!(snapshot.network_adapters.is_empty());
    }

    #[test]
    fn scanner_can_move_to_a_blocking_worker() {
        fn check<T: Send + Sync + 'static>() {}
        check::<DeviceScanner>();
    }

    #[test]
    fn each_platform_gets_its_own_strategy() {
        for platform in [Platform::Windows, Platform::MacOs, Platform::Linux] {
            let scanner = DeviceScanner::for_platform(platform, &ToolConfig::default());
            assert_eq!(scanner.platform(), platform);
        }
    }
}
