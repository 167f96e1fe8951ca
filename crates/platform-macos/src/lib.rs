//! Platform-macos crate: device inventory from `system_profiler`,
//! `networksetup` and `ifconfig`.

mod network;
mod usb;

use inventory_core::{
    CommandRunner, DeviceRecord, ExitMode, InventorySource, NetworkAdapterRecord, Platform,
    ScanResult, SystemCommandRunner,
};
use tracing::debug;

pub use network::{interface_is_active, parse_hardware_ports};
pub use usb::parse_usb_profile;

/// Executables invoked by [`MacOsInventory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacOsTools {
    pub system_profiler: String,
    pub networksetup: String,
    pub ifconfig: String,
}

impl Default for MacOsTools {
    fn default() -> Self {
        Self {
            system_profiler: "/usr/sbin/system_profiler".to_string(),
            networksetup: "/usr/sbin/networksetup".to_string(),
            ifconfig: "/sbin/ifconfig".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MacOsInventory<R = SystemCommandRunner> {
    runner: R,
    tools: MacOsTools,
}

impl<R: CommandRunner> MacOsInventory<R> {
    pub fn new(runner: R, tools: MacOsTools) -> Self {
        Self { runner, tools }
    }

    pub fn tools(&self) -> &MacOsTools {
        &self.tools
    }

    /// Ask `ifconfig` whether `device` reports an active link.
    ///
    /// `ifconfig` exits nonzero for unknown interfaces while still printing
    /// useful output, so the exit status is not checked. A launch failure
    /// counts as inactive.
    fn probe_active(&self, device: &str) -> bool {
        match self
            .runner
            .run(&self.tools.ifconfig, &[device], ExitMode::Lenient)
        {
            Ok(output) => interface_is_active(&output.stdout),
            Err(err) => {
                debug!(device, error = %err, "interface status probe failed");
                false
            }
        }
    }
}

impl<R: CommandRunner> InventorySource for MacOsInventory<R> {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn list_devices(&self) -> ScanResult<Vec<DeviceRecord>> {
        let output = self.runner.run(
            &self.tools.system_profiler,
            &["SPUSBDataType", "-json"],
            ExitMode::Strict,
        )?;
        parse_usb_profile(&output.stdout)
    }

    fn list_network_adapters(&self) -> ScanResult<Vec<NetworkAdapterRecord>> {
        let output = self.runner.run(
            &self.tools.networksetup,
            &["-listallhardwareports"],
            ExitMode::Strict,
        )?;

        let mut adapters = parse_hardware_ports(&output.stdout);
        for adapter in &mut adapters {
            if let Some(device) = adapter.device.as_deref() {
                adapter.connected = self.probe_active(device);
            }
        }
        Ok(adapters)
    }
}
