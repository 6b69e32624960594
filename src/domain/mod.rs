// Domain layer: the record model and the renderer boundary. Std/serde only.

pub mod model;
pub mod ports;
