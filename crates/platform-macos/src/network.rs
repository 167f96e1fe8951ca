use inventory_core::normalize::line_value;
use inventory_core::NetworkAdapterRecord;

const ACTIVE_MARKER: &str = "status: active";

/// Parse `networksetup -listallhardwareports`.
///
/// ```text
/// Hardware Port: Wi-Fi
/// Device: en0
/// Ethernet Address: aa:bb:cc:dd:ee:ff
/// ```
///
/// Every record starts disconnected; link state comes from a separate probe.
pub fn parse_hardware_ports(raw: &str) -> Vec<NetworkAdapterRecord> {
    let mut adapters = Vec::new();
    let mut current: Option<NetworkAdapterRecord> = None;

    for line in raw.lines() {
        let line = line.trim_end();

        if line.starts_with("Hardware Port:") {
            let name = line_value(line).unwrap_or_default();
            adapters.extend(current.replace(NetworkAdapterRecord::new(name, false)));
            continue;
        }

        let Some(adapter) = current.as_mut() else {
            continue;
        };
        if line.starts_with("Device:") {
            adapter.device = line_value(line)
                .filter(|device| !device.is_empty())
                .map(ToString::to_string);
        } else if line.starts_with("Ethernet Address:") {
            adapter.mac_address = line_value(line)
                .filter(|mac| !mac.eq_ignore_ascii_case("N/A"))
                .unwrap_or_default()
                .to_string();
        }
    }

    adapters.extend(current);
    adapters
}

/// Whether `ifconfig <device>` output reports an active link.
pub fn interface_is_active(ifconfig_output: &str) -> bool {
    ifconfig_output.to_ascii_lowercase().contains(ACTIVE_MARKER)
}
