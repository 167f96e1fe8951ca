use crate::error::ScanResult;
use crate::platform::Platform;
use crate::record::{DeviceRecord, NetworkAdapterRecord};

/// One platform's way of enumerating devices and adapters.
///
/// Implementations report failures as [`crate::ScanError`]; containing them
/// is the caller's job.
pub trait InventorySource: Send + Sync {
    fn platform(&self) -> Platform;

    fn list_devices(&self) -> ScanResult<Vec<DeviceRecord>>;

    fn list_network_adapters(&self) -> ScanResult<Vec<NetworkAdapterRecord>>;
}

/// Source for hosts without a supported toolchain. Always empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSource;

impl InventorySource for UnsupportedSource {
    fn platform(&self) -> Platform {
        Platform::Other
    }

    fn list_devices(&self) -> ScanResult<Vec<DeviceRecord>> {
        Ok(Vec::new())
    }

    fn list_network_adapters(&self) -> ScanResult<Vec<NetworkAdapterRecord>> {
        Ok(Vec::new())
    }
}
