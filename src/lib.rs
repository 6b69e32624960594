pub mod config;
pub mod core;
pub mod domain;
pub mod reports;
pub mod utils;

pub use config::CliConfig;
pub use core::engine::ReportEngine;
pub use domain::model::Record;
pub use reports::{register_additional_reports, ReportRegistry};
pub use utils::error::{PayrollError, Result};
