// Domain layer: parsed source model and ports (interfaces).

pub mod model;
pub mod ports;
