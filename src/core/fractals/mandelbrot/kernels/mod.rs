pub mod factory;
pub mod grouped;
pub mod kinds;
pub mod lanes;
pub mod scalar;
pub mod vectorized;

/// `|z|^2` at or beyond which a sample has escaped (`|z| >= 2`).
pub const BAILOUT_RADIUS_SQUARED: f32 = 4.0;
