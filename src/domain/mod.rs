// Domain layer: target model and the build tool port.

pub mod model;
pub mod ports;
