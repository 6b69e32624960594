use clap::Parser;
use payroll_etl::utils::logger;
use payroll_etl::{
    register_additional_reports, CliConfig, PayrollError, ReportEngine, ReportRegistry,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting payroll-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut registry = ReportRegistry::with_builtin_reports();
    register_additional_reports(&mut registry);

    let engine = ReportEngine::new(registry);

    match engine.run(&config.files, &config.report) {
        Ok(report) => {
            tracing::info!("✅ Report generated successfully");
            println!("{}", report);
        }
        Err(e) => {
            tracing::error!("❌ Report generation failed: {}", e);

            // Diagnostics share stdout with the report output.
            println!("Error: {}", e);
            if let PayrollError::UnknownReport { available, .. } = &e {
                println!("Available reports: {}", available.join(", "));
            }

            std::process::exit(1);
        }
    }
}
