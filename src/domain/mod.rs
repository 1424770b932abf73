// Domain layer: site models and ports (interfaces) to the host environment.

pub mod model;
pub mod ports;
