// Domain layer: entities and ports (capability contracts). No knowledge of adapters.

pub mod model;
pub mod ports;
