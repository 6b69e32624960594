use crate::core::payout::calculate_payout;
use crate::core::{Record, Result};

const RULE_WIDTH: usize = 80;

/// The flat payout listing: one fixed-width row per employee, then the total.
///
/// Missing name, email or department render as "N/A". Row order follows the
/// record order, which is input file order.
pub fn render_payout_report(records: &[Record]) -> Result<String> {
    let mut lines = vec![
        "PAYOUT REPORT".to_string(),
        "=".repeat(RULE_WIDTH),
        format!(
            "{:<30} {:<30} {:<15} {:<10}",
            "NAME", "EMAIL", "DEPARTMENT", "PAYOUT"
        ),
        "-".repeat(RULE_WIDTH),
    ];

    let mut total_payout = 0.0;
    for record in records {
        let name = field_or_na(record, "name");
        let email = field_or_na(record, "email");
        let department = field_or_na(record, "department");
        let payout = calculate_payout(record);
        total_payout += payout;

        lines.push(format!(
            "{:<30} {:<30} {:<15} ${:<9.2}",
            name, email, department, payout
        ));
    }

    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!("TOTAL PAYOUT: ${:.2}", total_payout));
    lines.push("=".repeat(RULE_WIDTH));

    Ok(lines.join("\n"))
}

fn field_or_na<'a>(record: &'a Record, key: &str) -> &'a str {
    record
        .data
        .get(key)
        .and_then(|value| value.as_str())
        .unwrap_or("N/A")
}
