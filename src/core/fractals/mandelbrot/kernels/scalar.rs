use crate::core::actions::compute_frame::ports::escape_time_kernel::{
    EscapeTimeKernel, assert_lane_group,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::kernels::BAILOUT_RADIUS_SQUARED;
use crate::core::fractals::mandelbrot::kernels::kinds::KernelKind;

/// Counts iterations of `z = z^2 + c` from `z = 0` while `|z|^2 < 4`, capped at
/// `max_iterations`.
#[inline]
#[must_use]
pub fn escape_count(real: f32, imag: f32, max_iterations: u32) -> u32 {
    let mut x = 0.0_f32;
    let mut y = 0.0_f32;
    let mut iterations = 0;

    while iterations < max_iterations {
        let x_sq = x * x;
        let y_sq = y * y;

        // NaN compares false and counts as escaped, matching the lane mask
        if !(x_sq + y_sq < BAILOUT_RADIUS_SQUARED) {
            break;
        }

        let next_x = x_sq - y_sq + real;
        y = 2.0 * x * y + imag;
        x = next_x;
        iterations += 1;
    }

    iterations
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarKernel {
    max_iterations: u32,
}

impl ScalarKernel {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }
}

impl EscapeTimeKernel for ScalarKernel {
    fn kind(&self) -> KernelKind {
        KernelKind::Scalar
    }

    fn lane_width(&self) -> usize {
        1
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_counts(&self, real: &[f32], imag: &[f32], counts: &mut [u32]) {
        assert_lane_group(1, real, imag, counts);

        counts[0] = escape_count(real[0], imag[0], self.max_iterations);
    }
}
