use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "payroll-etl")]
#[command(about = "Generate payroll reports from employee CSV data")]
pub struct CliConfig {
    /// CSV files with employee data
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Report type to generate
    #[arg(long)]
    pub report: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
