use anyhow::Result;
use payroll_etl::{register_additional_reports, ReportEngine, ReportRegistry};
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

/// A renderer registered at runtime dispatches exactly like a built-in.
#[test]
fn test_custom_report_runs_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let employees = write_csv(
        &temp_dir,
        "employees.csv",
        "name,hours_worked,hourly_rate\n\
         John Doe,160,50\n\
         Jane Smith,150,45\n",
    );

    let mut registry = ReportRegistry::with_builtin_reports();
    registry.register("headcount", |records| {
        Ok(format!("HEADCOUNT: {}", records.len()))
    });

    let engine = ReportEngine::new(registry);
    let report = engine.run(&[employees], "headcount")?;

    println!("🔍 Custom report output: {}", report);
    assert_eq!(report, "HEADCOUNT: 2");

    Ok(())
}

/// Re-registering a built-in name replaces its renderer.
#[test]
fn test_builtin_report_can_be_overwritten() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let employees = write_csv(&temp_dir, "employees.csv", "name\nJohn\n");

    let mut registry = ReportRegistry::with_builtin_reports();
    registry.register("payout", |_| Ok("replacement payout".to_string()));

    let engine = ReportEngine::new(registry);
    let report = engine.run(&[employees], "payout")?;

    assert_eq!(report, "replacement payout");

    Ok(())
}

/// Dispatch ignores the case of the requested report name.
#[test]
fn test_dispatch_is_case_insensitive() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let employees = write_csv(
        &temp_dir,
        "employees.csv",
        "name,department,hours_worked,hourly_rate\nJohn,IT,160,50\n",
    );

    let mut registry = ReportRegistry::with_builtin_reports();
    register_additional_reports(&mut registry);
    let engine = ReportEngine::new(registry);

    let payout = engine.run(&[employees.clone()], "PAYOUT")?;
    assert!(payout.contains("PAYOUT REPORT"));

    let summary = engine.run(&[employees], "Department")?;
    assert!(summary.contains("DEPARTMENT SUMMARY REPORT"));

    Ok(())
}

/// The extension hook adds the department summary next to the built-in.
#[test]
fn test_extension_hook_registers_department_report() {
    let mut registry = ReportRegistry::with_builtin_reports();
    assert_eq!(registry.names(), vec!["payout".to_string()]);

    register_additional_reports(&mut registry);

    assert_eq!(
        registry.names(),
        vec!["department".to_string(), "payout".to_string()]
    );
}
