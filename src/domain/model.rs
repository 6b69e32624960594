use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Canonical key for the hours column.
pub const HOURS_WORKED: &str = "hours_worked";

/// Canonical key for the rate column; alias columns are folded into this one.
pub const HOURLY_RATE: &str = "hourly_rate";

/// One employee row. Keys come from the source file header, so the shape can
/// vary record to record; values are strings as read, or numbers once coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, Value>,
}

/// Best-effort numeric interpretation of a field value.
///
/// Numbers pass through; strings are parsed after trimming. Everything else,
/// unparseable text included, is `None`; callers decide what a failure means
/// at their own call site.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
