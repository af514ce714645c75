// Domain layer: core models, ports (interfaces) and static reference data.

pub mod model;
pub mod ports;
pub mod regions;
