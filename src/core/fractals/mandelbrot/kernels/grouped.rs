use crate::core::actions::compute_frame::ports::escape_time_kernel::{
    EscapeTimeKernel, assert_lane_group,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::kernels::BAILOUT_RADIUS_SQUARED;
use crate::core::fractals::mandelbrot::kernels::kinds::KernelKind;

/// Evaluates `N` samples in lock-step with one plain loop per lane and step.
///
/// A lane's counter only advances while its own test passes; the group stops
/// once no lane is still bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedKernel<const N: usize> {
    max_iterations: u32,
}

pub type GroupedKernel4 = GroupedKernel<4>;
pub type GroupedKernel8 = GroupedKernel<8>;

impl<const N: usize> GroupedKernel<N> {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        const { assert!(N == 4 || N == 8, "grouped kernels are 4 or 8 lanes wide") };

        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn escape_group(&self, real: &[f32; N], imag: &[f32; N]) -> [u32; N] {
        let mut x = [0.0_f32; N];
        let mut y = [0.0_f32; N];
        let mut x_sq = [0.0_f32; N];
        let mut y_sq = [0.0_f32; N];
        let mut bounded = [false; N];
        let mut counts = [0_u32; N];

        for _ in 0..self.max_iterations {
            for i in 0..N {
                x_sq[i] = x[i] * x[i];
                y_sq[i] = y[i] * y[i];
            }

            for i in 0..N {
                bounded[i] = x_sq[i] + y_sq[i] < BAILOUT_RADIUS_SQUARED;
            }

            if !bounded.contains(&true) {
                break;
            }

            for i in 0..N {
                if bounded[i] {
                    counts[i] += 1;

                    let next_x = x_sq[i] - y_sq[i] + real[i];
                    y[i] = 2.0 * x[i] * y[i] + imag[i];
                    x[i] = next_x;
                }
            }
        }

        counts
    }
}

impl<const N: usize> EscapeTimeKernel for GroupedKernel<N> {
    fn kind(&self) -> KernelKind {
        if N == 4 {
            KernelKind::Grouped4
        } else {
            KernelKind::Grouped8
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

        let mut real_group = [0.0; N];
        let mut imag_group = [0.0; N];
        real_group.copy_from_slice(real);
        imag_group.copy_from_slice(imag);

        counts.copy_from_slice(&self.escape_group(&real_group, &imag_group));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::kernels::scalar::escape_count;

    #[test]
    fn test_divergent_lane_does_not_truncate_bounded_lane() {
        let kernel = GroupedKernel4::new(48).unwrap();

        let counts = kernel.escape_group(&[2.0, 0.0, 2.0, 2.0], &[0.0, 0.0, 0.0, 0.0]);

        assert_eq!(counts, [1, 48, 1, 1]);
    }

    #[test]
    fn test_all_lanes_escaping_early_stops_at_their_counts() {
        let kernel = GroupedKernel8::new(1000).unwrap();
        let real = [2.0, 10.0, 0.5, 0.5, 2.0, -3.0, 1.0, 0.3];
        let imag = [0.0, 0.0, 0.0, 0.5, 2.0, 0.0, 1.0, 0.6];

        let counts = kernel.escape_group(&real, &imag);

        for i in 0..8 {
            assert_eq!(counts[i], escape_count(real[i], imag[i], 1000), "lane {}", i);
        }
    }

    #[test]
    fn test_matches_scalar_on_a_sweep() {
        let kernel = GroupedKernel8::new(64).unwrap();

        for row in 0..16 {
            let imag = [-1.5 + row as f32 * 0.2; 8];
            let real: [f32; 8] = std::array::from_fn(|i| -2.2 + i as f32 * 0.37);

            let counts = kernel.escape_group(&real, &imag);

            for i in 0..8 {
                assert_eq!(counts[i], escape_count(real[i], imag[i], 64));
            }
        }
    }

    #[test]
    fn test_kind_follows_width() {
        assert_eq!(GroupedKernel4::new(1).unwrap().kind(), KernelKind::Grouped4);
        assert_eq!(GroupedKernel8::new(1).unwrap().kind(), KernelKind::Grouped8);
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        assert_eq!(GroupedKernel4::new(0), Err(MandelbrotError::ZeroMaxIterationsError));
    }

    #[test]
    #[should_panic(expected = "lane group size mismatch")]
    fn test_escape_counts_rejects_short_group() {
        let kernel = GroupedKernel8::new(16).unwrap();
        let mut counts = [0; 4];

        kernel.escape_counts(&[0.0; 4], &[0.0; 4], &mut counts);
    }
}
