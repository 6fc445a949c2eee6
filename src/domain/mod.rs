// Domain layer: the week's figures, what is derived from them, and the ports the session talks through.

pub mod locale;
pub mod model;
pub mod ports;
