// Domain layer: the feed model and the ports the pacer runs against.

pub mod model;
pub mod ports;
