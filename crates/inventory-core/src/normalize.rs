//! Helpers shared by the platform parsers when turning raw tool output into
//! records.

use serde_json::Value;

use crate::error::{ScanError, ScanResult};

/// Parse JSON that may hold either one object or an array of objects.
///
/// PowerShell's `ConvertTo-Json` emits a bare object when the pipeline yields
/// a single item, so both shapes are accepted. Blank output and `null` mean
/// "no items".
pub fn json_records(tool: &str, raw: &str) -> ScanResult<Vec<Value>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(raw).map_err(|err| ScanError::parse(tool, err))?;
    match value {
        Value::Array(items) => Ok(items.into_iter().filter(Value::is_object).collect()),
        Value::Object(_) => Ok(vec![value]),
        Value::Null => Ok(Vec::new()),
        other => Err(ScanError::parse(
            tool,
            format!("expected object or array, got {}", json_kind(&other)),
        )),
    }
}

/// Non-null string field. Numbers and booleans are rendered as text.
pub fn str_field(entry: &Value, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// String field with an explicit fallback for absent or null values.
pub fn str_or(entry: &Value, key: &str, fallback: &str) -> String {
    str_field(entry, key).unwrap_or_else(|| fallback.to_string())
}

/// Value after the first `": "` of a `Key: value` line, trimmed.
pub fn line_value(line: &str) -> Option<&str> {
    line.split_once(": ").map(|(_, value)| value.trim())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
