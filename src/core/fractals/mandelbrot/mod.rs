pub mod errors;
pub mod gradient;
pub mod kernels;
