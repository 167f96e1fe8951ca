//! Network adapter inventory from `Get-NetAdapter`.

use inventory_core::normalize::{json_records, str_field, str_or};
use inventory_core::{NetworkAdapterRecord, ScanResult};
use serde_json::Value;

const STATUS_UP: &str = "Up";

pub fn parse_net_adapters_json(raw: &str) -> ScanResult<Vec<NetworkAdapterRecord>> {
    let records = json_records("powershell", raw)?;
    Ok(records.iter().map(adapter_from_entry).collect())
}

fn adapter_from_entry(entry: &Value) -> NetworkAdapterRecord {
    let status = str_field(entry, "Status");
    let connected = status.as_deref() == Some(STATUS_UP);

    let mut adapter = NetworkAdapterRecord::new(str_or(entry, "Name", "Unknown Adapter"), connected);
    adapter.mac_address = str_or(entry, "MacAddress", "");
    adapter.description = Some(str_or(entry, "InterfaceDescription", ""));
    adapter.status = Some(status.unwrap_or_else(|| "Unknown".to_string()));
    adapter.speed = Some(str_or(entry, "LinkSpeed", ""));
    adapter
}

#[cfg(test)]
mod tests {
    use super::parse_net_adapters_json;

    #[test]
    fn parses_adapter_array() {
        let raw = r#"[{"Name":"Ethernet","InterfaceDescription":"Intel(R) Ethernet Connection I219-V","Status":"Up","MacAddress":"AA-BB-CC-DD-EE-FF","LinkSpeed":"1 Gbps"},
                     {"Name":"Wi-Fi","InterfaceDescription":"Intel(R) Wi-Fi 6 AX201","Status":"Disconnected","MacAddress":"11-22-33-44-55-66","LinkSpeed":"0 bps"}]"#;
        let parsed = parse_net_adapters_json(raw).expect("parse");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "Ethernet");
        assert!(parsed[0].connected);
        assert_eq!(parsed[0].mac_address, "AA-BB-CC-DD-EE-FF");
        assert_eq!(parsed[0].speed.as_deref(), Some("1 Gbps"));
        assert_eq!(
            parsed[0].description.as_deref(),
            Some("Intel(R) Ethernet Connection I219-V")
        );
        assert!(!parsed[1].connected);
        assert_eq!(parsed[1].status.as_deref(), Some("Disconnected"));
    }

    #[test]
    fn single_adapter_object_is_wrapped() {
        let raw = r#"{"Name":"Ethernet 2","Status":"Up"}"#;
        let parsed = parse_net_adapters_json(raw).expect("parse");

        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].connected);
        assert_eq!(parsed[0].mac_address, "");
        assert_eq!(parsed[0].description.as_deref(), Some(""));
        assert_eq!(parsed[0].speed.as_deref(), Some(""));
    }

    #[test]
    fn missing_name_and_status_fall_back() {
        let parsed = parse_net_adapters_json(r#"[{}]"#).expect("parse");

        assert_eq!(parsed[0].name, "Unknown Adapter");
        assert_eq!(parsed[0].status.as_deref(), Some("Unknown"));
        assert!(!parsed[0].connected);
    }
}
