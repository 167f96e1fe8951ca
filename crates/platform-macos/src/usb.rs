//! USB topology from `system_profiler SPUSBDataType -json`.
//!
//! The report is a tree: bus controllers at the top, each with an `_items`
//! array of hubs and devices that can nest further.

use inventory_core::normalize::{str_field, str_or};
use inventory_core::{DeviceRecord, ScanError, ScanResult, UNKNOWN_DEVICE};
use serde_json::Value;

const TOOL: &str = "system_profiler";

/// Top-level keys, newest spelling last.
const USB_DATA_KEYS: [&str; 2] = ["SPUSBDataType", "SPUSBHostDataType"];

pub fn parse_usb_profile(raw: &str) -> ScanResult<Vec<DeviceRecord>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let report: Value = serde_json::from_str(raw).map_err(|err| ScanError::parse(TOOL, err))?;
    let controllers = USB_DATA_KEYS
        .iter()
        .find_map(|key| report.get(*key))
        .and_then(Value::as_array);

    let mut devices = Vec::new();
    for controller in controllers.into_iter().flatten() {
        walk(controller, 0, &mut devices);
    }
    Ok(devices)
}

// ---------------------------------------------------------------------------
// Tree walk
// ---------------------------------------------------------------------------

/// Depth-first, children before parent. Depth 0 is a bus controller and is
/// never reported; deeper nodes are reported when they name a manufacturer,
/// which is what separates devices from intermediate hub entries.
fn walk(node: &Value, depth: usize, devices: &mut Vec<DeviceRecord>) {
    if let Some(children) = node.get("_items").and_then(Value::as_array) {
        for child in children {
            walk(child, depth + 1, devices);
        }
    }

    if depth > 0 && node.get("manufacturer").is_some() {
        devices.push(device_from_node(node));
    }
}

fn device_from_node(node: &Value) -> DeviceRecord {
    let location_id = str_or(node, "location_id", "");

    let mut record = DeviceRecord::new(str_or(node, "_name", UNKNOWN_DEVICE), "USB", true);
    record.id = Some(location_id.clone());
    record.location_id = Some(location_id);
    record.manufacturer = Some(str_or(node, "manufacturer", "Unknown"));
    record.serial_number = Some(str_or(node, "serial_num", ""));
    record.vendor_id = hex_id(node, "vendor_id");
    record.product_id = hex_id(node, "product_id");
    record
}

/// `"0x046d  (Logitech Inc.)"` -> `"0x046d"`.
fn hex_id(node: &Value, key: &str) -> Option<String> {
    let raw = str_field(node, key)?;
    raw.split_whitespace()
        .next()
        .filter(|token| token.starts_with("0x"))
        .map(ToString::to_string)
}
