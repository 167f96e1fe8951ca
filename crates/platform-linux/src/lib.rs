//! Platform-linux crate: device inventory from `lsusb` and `ip addr`.
//!
//! Both tools emit line-oriented text. USB devices come from a fixed-format
//! line per device; network adapters from header lines followed by indented
//! detail lines.

mod network;
mod usb;

use inventory_core::{
    CommandRunner, DeviceRecord, ExitMode, InventorySource, NetworkAdapterRecord, Platform,
    ScanResult, SystemCommandRunner,
};

pub use network::parse_ip_addr;
pub use usb::{parse_lsusb, parse_lsusb_line};

/// Executables invoked by [`LinuxInventory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinuxTools {
    pub lsusb: String,
    pub ip: String,
}

impl Default for LinuxTools {
    fn default() -> Self {
        Self {
            lsusb: "lsusb".to_string(),
            ip: "ip".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct LinuxInventory<R = SystemCommandRunner> {
    runner: R,
    tools: LinuxTools,
}

impl<R: CommandRunner> LinuxInventory<R> {
    pub fn new(runner: R, tools: LinuxTools) -> Self {
        Self { runner, tools }
    }

    pub fn tools(&self) -> &LinuxTools {
        &self.tools
    }
}

impl<R: CommandRunner> InventorySource for LinuxInventory<R> {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn list_devices(&self) -> ScanResult<Vec<DeviceRecord>> {
        let output = self.runner.run(&self.tools.lsusb, &[], ExitMode::Strict)?;
        Ok(parse_lsusb(&output.stdout))
    }

    fn list_network_adapters(&self) -> ScanResult<Vec<NetworkAdapterRecord>> {
        let output = self.runner.run(&self.tools.ip, &["addr"], ExitMode::Strict)?;
        Ok(parse_ip_addr(&output.stdout))
    }
}
