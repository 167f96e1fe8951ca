//! Platform-windows crate: device inventory through PowerShell.
//!
//! Exposes the same [`InventorySource`] surface as `platform-linux` and
//! `platform-macos`.

pub mod inventory;
mod windows_cmd;

use inventory_core::{
    CommandRunner, DeviceRecord, ExitMode, InventorySource, NetworkAdapterRecord, Platform,
    ScanResult, SystemCommandRunner,
};

pub use inventory::{parse_net_adapters_json, parse_pnp_devices_json};
pub use windows_cmd::POWERSHELL_EXE;

use windows_cmd::{powershell_args, NET_ADAPTERS_QUERY, USB_DEVICES_QUERY};

/// Executables invoked by [`WindowsInventory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowsTools {
    pub powershell: String,
}

impl Default for WindowsTools {
    fn default() -> Self {
        Self {
            powershell: POWERSHELL_EXE.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct WindowsInventory<R = SystemCommandRunner> {
    runner: R,
    tools: WindowsTools,
}

impl<R: CommandRunner> WindowsInventory<R> {
    pub fn new(runner: R, tools: WindowsTools) -> Self {
        Self { runner, tools }
    }

    pub fn tools(&self) -> &WindowsTools {
        &self.tools
    }

    fn run_powershell(&self, command: &str) -> ScanResult<String> {
        let output = self.runner.run(
            &self.tools.powershell,
            &powershell_args(command),
            ExitMode::Strict,
        )?;
        Ok(output.stdout)
    }
}

impl<R: CommandRunner> InventorySource for WindowsInventory<R> {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn list_devices(&self) -> ScanResult<Vec<DeviceRecord>> {
        let json = self.run_powershell(USB_DEVICES_QUERY)?;
        parse_pnp_devices_json(&json)
    }

    fn list_network_adapters(&self) -> ScanResult<Vec<NetworkAdapterRecord>> {
        let json = self.run_powershell(NET_ADAPTERS_QUERY)?;
        parse_net_adapters_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::testing::ScriptedRunner;
    use inventory_core::ScanError;

    #[test]
    fn device_query_runs_non_interactive_powershell() {
        let runner = ScriptedRunner::new().stdout(
            POWERSHELL_EXE,
            r#"{"FriendlyName":"Mouse","Class":"HIDClass","InstanceId":"USB\\VID1","Status":"OK"}"#,
        );
        let source = WindowsInventory::new(&runner, WindowsTools::default());

        let devices = source.list_devices().expect("devices");
        assert_eq!(devices.len(), 1);

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with(&format!("{POWERSHELL_EXE} -NoProfile -NonInteractive -Command Get-PnpDevice")));
    }

    #[test]
    fn missing_powershell_is_tool_unavailable() {
        let runner = ScriptedRunner::new();
        let source = WindowsInventory::new(&runner, WindowsTools::default());

        let err = source.list_network_adapters().expect_err("no powershell");
        assert!(matches!(err, ScanError::ToolUnavailable { .. }));
    }
}
