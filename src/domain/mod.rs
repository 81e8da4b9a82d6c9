// Domain layer: core models, ports (capability traits) and the services
// that consume them. No I/O here beyond what a port signature admits.

pub mod model;
pub mod ports;
pub mod services;
