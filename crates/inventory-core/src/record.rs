use serde::{Deserialize, Serialize};

/// Display name used when the source tool reports no name for a device.
pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// One attached USB device as reported by the host tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
}

impl DeviceRecord {
    /// Build a record with only the required fields set.
    ///
    /// A blank `name` falls back to [`UNKNOWN_DEVICE`].
    pub fn new(name: impl Into<String>, device_type: impl Into<String>, connected: bool) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            UNKNOWN_DEVICE.to_string()
        } else {
            name
        };

        Self {
            name,
            device_type: device_type.into(),
            connected,
            id: None,
            status: None,
            bus: None,
            device_number: None,
            vendor_id: None,
            product_id: None,
            manufacturer: None,
            serial_number: None,
            location_id: None,
        }
    }
}

/// One network interface as reported by the host tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAdapterRecord {
    pub name: String,
    pub connected: bool,
    /// Hardware address, empty when the platform does not report one.
    pub mac_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    /// OS device identifier when it differs from the display name (`en0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl NetworkAdapterRecord {
    pub fn new(name: impl Into<String>, connected: bool) -> Self {
        Self {
            name: name.into(),
            connected,
            mac_address: String::new(),
            description: None,
            status: None,
            speed: None,
            device: None,
        }
    }
}
