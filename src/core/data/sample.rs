/// A point on the complex plane sampled for one pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub real: f32,
    pub imag: f32,
}
