use crate::domain::model::Record;
use crate::utils::error::Result;

/// A report renderer: consumes the combined record sequence for a run and
/// returns the complete report text. The registry stores these; the driver
/// prints whatever the selected one returns.
pub type RenderFn = Box<dyn Fn(&[Record]) -> Result<String> + Send + Sync>;
