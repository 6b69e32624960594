use crate::core::payout::calculate_payout;
use crate::core::{Record, Result};
use crate::domain::model::HOURS_WORKED;
use crate::reports::registry::ReportRegistry;
use crate::utils::error::PayrollError;
use std::collections::BTreeMap;

const RULE_WIDTH: usize = 80;

#[derive(Debug, Default)]
struct DepartmentStats {
    count: usize,
    total_hours: f64,
    total_payout: f64,
    avg_rate: f64,
}

/// Department rollup: employee count, hour and payout sums, and the derived
/// average rate per department, rows sorted by department name.
///
/// Records without a department fall into "Unknown". Absent hours count as
/// zero, but hours that survived normalization as non-numbers are a hard
/// error rather than a silent zero.
pub fn render_department_summary(records: &[Record]) -> Result<String> {
    // BTreeMap iteration order gives the name-ascending row order.
    let mut departments: BTreeMap<String, DepartmentStats> = BTreeMap::new();

    for record in records {
        let department = record
            .data
            .get("department")
            .and_then(|value| value.as_str())
            .unwrap_or("Unknown")
            .to_string();

        let hours = match record.data.get(HOURS_WORKED) {
            None => 0.0,
            Some(value) => value.as_f64().ok_or_else(|| PayrollError::ProcessingError {
                message: format!(
                    "non-numeric hours_worked value {} in department '{}'",
                    value, department
                ),
            })?,
        };

        let stats = departments.entry(department).or_default();
        stats.count += 1;
        stats.total_hours += hours;
        stats.total_payout += calculate_payout(record);
    }

    for stats in departments.values_mut() {
        if stats.total_hours > 0.0 {
            stats.avg_rate = stats.total_payout / stats.total_hours;
        }
    }

    let mut lines = vec![
        "DEPARTMENT SUMMARY REPORT".to_string(),
        "=".repeat(RULE_WIDTH),
        format!(
            "{:<20} {:<10} {:<15} {:<10} {:<15}",
            "DEPARTMENT", "EMPLOYEES", "TOTAL HOURS", "AVG RATE", "TOTAL PAYOUT"
        ),
        "-".repeat(RULE_WIDTH),
    ];

    let mut grand_total = 0.0;
    for (department, stats) in &departments {
        lines.push(format!(
            "{:<20} {:<10} {:<15.1} ${:<9.2} ${:<14.2}",
            department, stats.count, stats.total_hours, stats.avg_rate, stats.total_payout
        ));
        grand_total += stats.total_payout;
    }

    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!("GRAND TOTAL PAYOUT: ${:.2}", grand_total));
    lines.push("=".repeat(RULE_WIDTH));

    Ok(lines.join("\n"))
}

/// Register everything beyond the built-in payout listing. `main` calls this
/// before dispatch; embedders extending the binary do the same with their own
/// renderers.
pub fn register_additional_reports(registry: &mut ReportRegistry) {
    registry.register("department", render_department_summary);
}
