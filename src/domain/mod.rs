// Domain layer: page model, widget payloads and the ports widgets are loaded through.

pub mod model;
pub mod page;
pub mod ports;
