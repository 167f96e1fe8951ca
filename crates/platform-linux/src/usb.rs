use std::sync::OnceLock;

use inventory_core::DeviceRecord;
use regex::Regex;
use tracing::trace;

fn lsusb_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^Bus (\d+) Device (\d+): ID (\w+):(\w+)(?: (.*))?$")
            .expect("lsusb line pattern is valid")
    })
}

/// Parse full `lsusb` output. Lines that are not device lines are skipped.
pub fn parse_lsusb(raw: &str) -> Vec<DeviceRecord> {
    raw.lines().filter_map(parse_lsusb_line).collect()
}

/// Parse one `Bus 001 Device 003: ID 046d:c52b Logitech USB Receiver` line.
///
/// Captured numbers are kept verbatim, leading zeros included.
pub fn parse_lsusb_line(line: &str) -> Option<DeviceRecord> {
    let line = line.trim_end();
    let Some(caps) = lsusb_line_pattern().captures(line) else {
        if !line.is_empty() {
            trace!(line, "skipping non-device lsusb line");
        }
        return None;
    };

    let description = caps.get(5).map(|m| m.as_str().trim()).unwrap_or_default();

    let mut record = DeviceRecord::new(description, "USB", true);
    record.bus = Some(caps[1].to_string());
    record.device_number = Some(caps[2].to_string());
    record.vendor_id = Some(caps[3].to_string());
    record.product_id = Some(caps[4].to_string());
    Some(record)
}
