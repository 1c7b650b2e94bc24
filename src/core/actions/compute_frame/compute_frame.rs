use crate::core::actions::compute_frame::ports::escape_time_kernel::EscapeTimeKernel;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, write_grey};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::gradient::GrayscaleGradient;
use crate::core::util::pixel_to_sample::{column_to_real, row_to_imag};

/// Widest lane group any kernel may request.
pub const MAX_LANE_WIDTH: usize = 8;

/// Walks the frame row by row in groups of the kernel's lane width.
///
/// The last group of a row is padded with copies of the row's final sample;
/// `emit` only ever sees the counts of real pixels.
fn walk_frame<K, F>(viewport: &Viewport, kernel: &K, width: u32, height: u32, mut emit: F)
where
    K: EscapeTimeKernel + ?Sized,
    F: FnMut(u32, u32, &[u32]),
{
    let lanes = kernel.lane_width();
    assert!(
        (1..=MAX_LANE_WIDTH).contains(&lanes),
        "kernel lane width {} outside 1..={}",
        lanes,
        MAX_LANE_WIDTH
    );

    let mut real = [0.0_f32; MAX_LANE_WIDTH];
    let mut imag = [0.0_f32; MAX_LANE_WIDTH];
    let mut counts = [0_u32; MAX_LANE_WIDTH];

    for y in 0..height {
        let row_imag = row_to_imag(y, viewport, width, height);
        imag[..lanes].fill(row_imag);

        let mut x = 0;
        while x < width {
            let valid = lanes.min((width - x) as usize);

            for (i, lane) in real[..lanes].iter_mut().enumerate() {
                let column = x + i.min(valid - 1) as u32;
                *lane = column_to_real(column, viewport, width, height);
            }

            kernel.escape_counts(&real[..lanes], &imag[..lanes], &mut counts[..lanes]);
            emit(y, x, &counts[..valid]);

            x += valid as u32;
        }
    }
}

/// Fills `buffer` with the grey-scale escape-time image seen through `viewport`.
///
/// Deterministic in `(viewport, width, height)`: the buffer is the only output.
///
/// # Panics
/// Panics if the buffer has been torn down or if `gradient` was built for a
/// different iteration cap than `kernel`.
pub fn compute_frame<K>(
    viewport: &Viewport,
    kernel: &K,
    gradient: &GrayscaleGradient,
    buffer: &mut PixelBuffer,
) where
    K: EscapeTimeKernel + ?Sized,
{
    assert!(!buffer.is_torn_down(), "cannot compute into a torn down pixel buffer");
    assert_eq!(
        gradient.max_iterations(),
        kernel.max_iterations(),
        "gradient and kernel disagree on the iteration cap"
    );

    let width = buffer.width();
    let height = buffer.height();

    walk_frame(viewport, kernel, width, height, |y, x, counts| {
        let start = x as usize * BYTES_PER_PIXEL;
        let end = start + counts.len() * BYTES_PER_PIXEL;
        let pixels = &mut buffer.row_mut(y)[start..end];

        for (pixel, &count) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).zip(counts) {
            write_grey(pixel, gradient.map(count));
        }
    });
}

/// Row-major escape counts for every pixel of a `width x height` frame.
#[must_use]
pub fn compute_escape_counts<K>(viewport: &Viewport, kernel: &K, width: u32, height: u32) -> Vec<u32>
where
    K: EscapeTimeKernel + ?Sized,
{
    let mut frame = Vec::with_capacity(width as usize * height as usize);

    walk_frame(viewport, kernel, width, height, |_, _, counts| {
        frame.extend_from_slice(counts);
    });

    frame
}
