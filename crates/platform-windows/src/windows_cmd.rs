//! Canonical PowerShell invocation.
//!
//! Using the absolute system path avoids PATH-search hijacking when the
//! scanner runs with elevated rights.

pub const POWERSHELL_EXE: &str = r"C:\Windows\System32\WindowsPowerShell\v1.0\powershell.exe";

/// Present USB devices as JSON.
pub(crate) const USB_DEVICES_QUERY: &str = "Get-PnpDevice -PresentOnly | Where-Object { $_.InstanceId -match '^USB' } | Select-Object Status, Class, FriendlyName, InstanceId | ConvertTo-Json";

/// Network adapters as JSON.
pub(crate) const NET_ADAPTERS_QUERY: &str = "Get-NetAdapter | Select-Object Name, InterfaceDescription, Status, MacAddress, LinkSpeed | ConvertTo-Json";

/// Arguments for a non-interactive one-liner.
pub(crate) fn powershell_args(command: &str) -> [&str; 4] {
    ["-NoProfile", "-NonInteractive", "-Command", command]
}
