use crate::core::actions::compute_frame::ports::escape_time_kernel::{
    EscapeTimeKernel, assert_lane_group,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::kernels::BAILOUT_RADIUS_SQUARED;
use crate::core::fractals::mandelbrot::kernels::kinds::KernelKind;
use crate::core::fractals::mandelbrot::kernels::lanes::{F32Lanes, U32Lanes};

/// Evaluates `N` samples with shared control flow and per-lane masking.
///
/// Escaped lanes keep their last `x, y` through `select`, so their state can
/// neither grow nor feed back into the mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorizedKernel<const N: usize> {
    max_iterations: u32,
}

pub type VectorizedKernel4 = VectorizedKernel<4>;
pub type VectorizedKernel8 = VectorizedKernel<8>;

impl<const N: usize> VectorizedKernel<N> {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        const { assert!(N == 4 || N == 8, "vectorized kernels are 4 or 8 lanes wide") };

        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[inline]
    #[must_use]
    pub fn escape_lanes(&self, real: F32Lanes<N>, imag: F32Lanes<N>) -> U32Lanes<N> {
        let two = F32Lanes::splat(2.0);
        let bailout = F32Lanes::splat(BAILOUT_RADIUS_SQUARED);

        let mut x = F32Lanes::splat(0.0);
        let mut y = F32Lanes::splat(0.0);
        let mut counts = U32Lanes::zero();

        for _ in 0..self.max_iterations {
            let x_sq = x * x;
            let y_sq = y * y;
            let bounded = (x_sq + y_sq).lt(bailout);

            if !bounded.any() {
                break;
            }

            counts = counts.increment_masked(bounded);

            let next_x = x_sq - y_sq + real;
            let next_y = two * x * y + imag;

            x = F32Lanes::select(bounded, next_x, x);
            y = F32Lanes::select(bounded, next_y, y);
        }

        counts
    }
}

impl<const N: usize> EscapeTimeKernel for VectorizedKernel<N> {
    fn kind(&self) -> KernelKind {
        if N == 4 {
            KernelKind::Vectorized4
        } else {
            KernelKind::Vectorized8
        }
    }

    fn lane_width(&self) -> usize {
        N
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_counts(&self, real: &[f32], imag: &[f32], counts: &mut [u32]) {
        assert_lane_group(N, real, imag, counts);

        self.escape_lanes(F32Lanes::load(real), F32Lanes::load(imag))
            .store(counts);
    }
}
