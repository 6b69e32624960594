// Report renderers and the registry that dispatches to them.

pub mod department_report;
pub mod payout_report;
pub mod registry;

pub use department_report::register_additional_reports;
pub use registry::ReportRegistry;
