use log::info;

use crate::core::actions::compute_frame::ports::escape_time_kernel::EscapeTimeKernel;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::kernels::{
    grouped::{GroupedKernel4, GroupedKernel8},
    kinds::KernelKind,
    scalar::ScalarKernel,
    vectorized::{VectorizedKernel4, VectorizedKernel8},
};

pub fn kernel_factory(
    kind: KernelKind,
    max_iterations: u32,
) -> Result<Box<dyn EscapeTimeKernel>, MandelbrotError> {
    let kernel: Box<dyn EscapeTimeKernel> = match kind {
        KernelKind::Scalar => Box::new(ScalarKernel::new(max_iterations)?),
        KernelKind::Grouped4 => Box::new(GroupedKernel4::new(max_iterations)?),
        KernelKind::Grouped8 => Box::new(GroupedKernel8::new(max_iterations)?),
        KernelKind::Vectorized4 => Box::new(VectorizedKernel4::new(max_iterations)?),
        KernelKind::Vectorized8 => Box::new(VectorizedKernel8::new(max_iterations)?),
    };

    info!(
        "escape-time kernel: {} ({} lanes, max {} iterations)",
        kind,
        kernel.lane_width(),
        max_iterations
    );

    Ok(kernel)
}
