pub mod engine;
pub mod normalizer;
pub mod payout;
pub mod reader;

pub use crate::domain::model::Record;
pub use crate::domain::ports::RenderFn;
pub use crate::utils::error::Result;
