//! USB device inventory from `Get-PnpDevice`.

use inventory_core::normalize::{json_records, str_field, str_or};
use inventory_core::{DeviceRecord, ScanResult, UNKNOWN_DEVICE};
use serde_json::Value;

/// PnP status string of a working, present device.
const STATUS_OK: &str = "OK";

pub fn parse_pnp_devices_json(raw: &str) -> ScanResult<Vec<DeviceRecord>> {
    let records = json_records("powershell", raw)?;
    Ok(records.iter().map(device_from_entry).collect())
}

fn device_from_entry(entry: &Value) -> DeviceRecord {
    let status = str_field(entry, "Status");
    let connected = status.as_deref() == Some(STATUS_OK);
    let instance_id = str_or(entry, "InstanceId", "");

    let mut record = DeviceRecord::new(
        str_or(entry, "FriendlyName", UNKNOWN_DEVICE),
        str_or(entry, "Class", "Unknown"),
        connected,
    );
    record.vendor_id = instance_id_segment(&instance_id, "VID_");
    record.product_id = instance_id_segment(&instance_id, "PID_");
    record.id = Some(instance_id);
    record.status = Some(status.unwrap_or_else(|| "Unknown".to_string()));
    record
}

/// Pull `046D` out of `USB\VID_046D&PID_C52B\5&1A2B`.
fn instance_id_segment(instance_id: &str, prefix: &str) -> Option<String> {
    instance_id
        .split(['\\', '&'])
        .find_map(|part| {
            part.get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| &part[prefix.len()..])
        })
        .filter(|id| !id.is_empty())
        .map(|id| id.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::ScanError;

    #[test]
    fn single_object_output_yields_one_device() {
        let raw = r#"{"FriendlyName":"Mouse","Class":"HIDClass","InstanceId":"USB\\VID1","Status":"OK"}"#;
        let devices = parse_pnp_devices_json(raw).expect("parse");

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name, "Mouse");
        assert_eq!(devices[0].device_type, "HIDClass");
        assert!(devices[0].connected);
        assert_eq!(devices[0].id.as_deref(), Some("USB\\VID1"));
        assert_eq!(devices[0].status.as_deref(), Some("OK"));
    }

    #[test]
    fn array_output_keeps_tool_order() {
        let raw = r#"[
            {"FriendlyName":"USB Root Hub (USB 3.0)","Class":"USB","InstanceId":"USB\\ROOT_HUB30\\4&1","Status":"OK"},
            {"FriendlyName":"USB Mass Storage Device","Class":"USB","InstanceId":"USB\\VID_0781&PID_5581\\4C5","Status":"Error"}
        ]"#;
        let devices = parse_pnp_devices_json(raw).expect("parse");

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "USB Root Hub (USB 3.0)");
        assert!(!devices[1].connected);
        assert_eq!(devices[1].status.as_deref(), Some("Error"));
        assert_eq!(devices[1].vendor_id.as_deref(), Some("0781"));
        assert_eq!(devices[1].product_id.as_deref(), Some("5581"));
        assert_eq!(devices[0].vendor_id, None);
    }

    #[test]
    fn null_fields_take_declared_fallbacks() {
        let raw = r#"{"FriendlyName":null,"Class":null,"InstanceId":null,"Status":null}"#;
        let devices = parse_pnp_devices_json(raw).expect("parse");

        let device = &devices[0];
        assert_eq!(device.name, UNKNOWN_DEVICE);
        assert_eq!(device.device_type, "Unknown");
        assert_eq!(device.id.as_deref(), Some(""));
        assert_eq!(device.status.as_deref(), Some("Unknown"));
        assert!(!device.connected);
    }

    #[test]
    fn status_match_is_exact() {
        let raw = r#"{"FriendlyName":"Pen","Status":"ok"}"#;
        assert!(!parse_pnp_devices_json(raw).expect("parse")[0].connected);
    }

    #[test]
    fn empty_output_means_no_devices() {
        assert!(parse_pnp_devices_json("").expect("blank").is_empty());
    }

    #[test]
    fn malformed_output_is_parse_error() {
        let err = parse_pnp_devices_json("Get-PnpDevice : not recognized").expect_err("text");
        assert!(matches!(err, ScanError::Parse { .. }));
    }
}
