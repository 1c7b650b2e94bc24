/// Intensity written for samples that reach the iteration cap.
pub const INTERIOR_INTENSITY: u8 = 255;

/// Maps an escape count to a single grey intensity.
///
/// Interior samples (count at the cap) map to [`INTERIOR_INTENSITY`]; escaped
/// samples map to `(count * contrast) mod 255`. The same map is applied
/// whichever kernel produced the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayscaleGradient {
    max_iterations: u32,
    contrast: u32,
}

impl GrayscaleGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self::with_contrast(max_iterations, 1)
    }

    #[must_use]
    pub fn with_contrast(max_iterations: u32, contrast: u32) -> Self {
        Self {
            max_iterations,
            contrast,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[inline]
    #[must_use]
    pub fn map(&self, iterations: u32) -> u8 {
        if iterations >= self.max_iterations {
            return INTERIOR_INTENSITY;
        }

        (iterations.wrapping_mul(self.contrast) % 255) as u8
    }
}
