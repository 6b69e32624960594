use crate::core::{normalizer, reader, Record, Result};
use crate::reports::registry::ReportRegistry;
use crate::utils::error::PayrollError;
use tracing::info;

/// Drives the whole run: resolve the renderer, read and normalize every
/// input file in argument order, render once over the combined records.
pub struct ReportEngine {
    registry: ReportRegistry,
}

impl ReportEngine {
    pub fn new(registry: ReportRegistry) -> Self {
        Self { registry }
    }

    pub fn run(&self, files: &[String], report: &str) -> Result<String> {
        // Resolve before touching any file, so an unknown report name wins
        // over a missing input path.
        let renderer =
            self.registry
                .lookup(report)
                .ok_or_else(|| PayrollError::UnknownReport {
                    name: report.to_string(),
                    available: self.registry.names(),
                })?;

        let records = load_records(files)?;
        info!("Rendering '{}' report over {} records", report, records.len());
        renderer(&records)
    }
}

/// Read every file and normalize each record, preserving file and row order.
pub fn load_records(files: &[String]) -> Result<Vec<Record>> {
    let mut combined = Vec::new();
    for path in files {
        let records = reader::read_records(path)?;
        info!("Extracted {} records from {}", records.len(), path);
        combined.extend(records.iter().map(normalizer::normalize));
    }
    Ok(combined)
}
