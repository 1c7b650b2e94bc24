use crate::core::fractals::mandelbrot::kernels::kinds::KernelKind;

/// Escape-time evaluation of a fixed-width group of samples.
///
/// Implementations differ only in how many samples they evaluate in lock-step;
/// for any sample every implementation reports the same count.
pub trait EscapeTimeKernel: Send + Sync {
    fn kind(&self) -> KernelKind;

    fn lane_width(&self) -> usize;

    fn max_iterations(&self) -> u32;

    /// Writes one escape count per sample into `counts`.
    ///
    /// # Panics
    /// Panics unless `real`, `imag` and `counts` are all exactly `lane_width()` long.
    fn escape_counts(&self, real: &[f32], imag: &[f32], counts: &mut [u32]);
}

impl EscapeTimeKernel for Box<dyn EscapeTimeKernel> {
    fn kind(&self) -> KernelKind {
        (**self).kind()
    }

    fn lane_width(&self) -> usize {
        (**self).lane_width()
    }

    fn max_iterations(&self) -> u32 {
        (**self).max_iterations()
    }

    fn escape_counts(&self, real: &[f32], imag: &[f32], counts: &mut [u32]) {
        (**self).escape_counts(real, imag, counts)
    }
}

#[inline]
pub(crate) fn assert_lane_group(lane_width: usize, real: &[f32], imag: &[f32], counts: &[u32]) {
    assert!(
        real.len() == lane_width && imag.len() == lane_width && counts.len() == lane_width,
        "lane group size mismatch: expected {}, got real {}, imag {}, counts {}",
        lane_width,
        real.len(),
        imag.len(),
        counts.len()
    );
}
