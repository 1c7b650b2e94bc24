pub mod compute_frame;
pub mod ports;
