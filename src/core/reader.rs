use crate::core::Record;
use crate::utils::error::{PayrollError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io;

const DELIMITER: char = ',';

/// Read one delimited text file into records, using the first line as header.
///
/// Lines are trimmed before splitting. Blank lines are skipped, and lines
/// whose field count does not match the header are dropped without a
/// diagnostic (lenient-skip, not a validation error). No quoting or escaping
/// of embedded delimiters is supported. Values enter as strings; coercion is
/// the normalizer's job.
pub fn read_records(path: &str) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PayrollError::FileNotFound {
            path: path.to_string(),
        },
        _ => PayrollError::FileRead {
            path: path.to_string(),
            source,
        },
    })?;

    let mut lines = content.lines();
    let header: Vec<&str> = lines
        .next()
        .unwrap_or("")
        .trim()
        .split(DELIMITER)
        .collect();

    let mut records = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split(DELIMITER).collect();
        if values.len() != header.len() {
            continue;
        }

        let mut data = HashMap::new();
        for (name, value) in header.iter().zip(values) {
            data.insert(name.to_string(), Value::String(value.to_string()));
        }
        records.push(Record { data });
    }

    Ok(records)
}
