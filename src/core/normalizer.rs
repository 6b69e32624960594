use crate::core::Record;
use crate::domain::model::{coerce_number, HOURLY_RATE, HOURS_WORKED};
use serde_json::{Number, Value};
use std::collections::HashMap;

/// Column names accepted for the hourly rate concept, highest priority first.
const RATE_ALIASES: [&str; 3] = [HOURLY_RATE, "rate", "salary"];

/// Produce a normalized copy of a record: fold the first matching rate alias
/// into the canonical `hourly_rate` key, then coerce the two numeric fields.
///
/// Only the winning alias is folded; lower-priority aliases survive as
/// ordinary fields. Coercion is per-field and silent, so a record can end up
/// with numeric hours next to a still-textual rate. The input is not mutated.
pub fn normalize(record: &Record) -> Record {
    let mut data = record.data.clone();

    for alias in RATE_ALIASES {
        if let Some(value) = data.get(alias).cloned() {
            if alias != HOURLY_RATE {
                data.remove(alias);
            }
            data.insert(HOURLY_RATE.to_string(), value);
            break;
        }
    }

    coerce_field(&mut data, HOURS_WORKED);
    coerce_field(&mut data, HOURLY_RATE);

    Record { data }
}

fn coerce_field(data: &mut HashMap<String, Value>, key: &str) {
    if let Some(value) = data.get(key) {
        if let Some(number) = coerce_number(value).and_then(Number::from_f64) {
            data.insert(key.to_string(), Value::Number(number));
        }
    }
}
