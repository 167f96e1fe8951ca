use inventory_core::{DeviceRecord, NetworkAdapterRecord, Platform};
use serde::Serialize;

/// Result of one scan pass. Nothing carries over between snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct InventorySnapshot {
    pub platform: Platform,
    pub collected_at_unix: i64,
    pub devices: Vec<DeviceRecord>,
    pub network_adapters: Vec<NetworkAdapterRecord>,
}

impl InventorySnapshot {
    pub fn new(
        platform: Platform,
        devices: Vec<DeviceRecord>,
        network_adapters: Vec<NetworkAdapterRecord>,
    ) -> Self {
        Self {
            platform,
            collected_at_unix: now_unix(),
            devices,
            network_adapters,
        }
    }

    pub fn connected_device_count(&self) -> usize {
        self.devices.iter().filter(|d| d.connected).count()
    }

    pub fn connected_adapter_count(&self) -> usize {
        self.network_adapters.iter().filter(|a| a.connected).count()
    }
}

fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_connected_records() {
        let mut offline = DeviceRecord::new("Disk", "USB", false);
        offline.status = Some("Error".to_string());
        let snapshot = InventorySnapshot::new(
            Platform::Windows,
            vec![DeviceRecord::new("Mouse", "HIDClass", true), offline],
            vec![
                NetworkAdapterRecord::new("Ethernet", true),
                NetworkAdapterRecord::new("Wi-Fi", false),
                NetworkAdapterRecord::new("vEthernet", true),
            ],
        );

        assert_eq!(snapshot.connected_device_count(), 1);
        assert_eq!(snapshot.connected_adapter_count(), 2);
        assert!(snapshot.collected_at_unix > 0);
    }

    #[test]
    fn serializes_platform_in_lowercase() {
        let snapshot = InventorySnapshot::new(Platform::MacOs, Vec::new(), Vec::new());
        let value = serde_json::to_value(&snapshot).expect("serialize");

        assert_eq!(value["platform"], "macos");
        assert!(value["devices"].as_array().expect("array").is_empty());
    }
}
