use crate::core::data::sample::Sample;
use crate::core::data::viewport::Viewport;

/// Extent of the visible plane along the average screen side at unit scale.
const PLANE_SPAN: f32 = 4.0;

/// Average of the two screen sides; the normalisation denominator.
#[inline]
#[must_use]
pub fn average_side(width: u32, height: u32) -> f32 {
    (width as f32 + height as f32) / 2.0
}

/// Maps a pixel row to its imaginary coordinate.
///
/// Every kernel strategy shares this, so rows are identical bit-for-bit.
#[inline]
#[must_use]
pub fn row_to_imag(pixel_y: u32, viewport: &Viewport, width: u32, height: u32) -> f32 {
    ((viewport.scale * (pixel_y as f32 - height as f32 / 2.0) + viewport.offset_y) * PLANE_SPAN)
        / average_side(width, height)
}

/// Maps a pixel column to its real coordinate.
#[inline]
#[must_use]
pub fn column_to_real(pixel_x: u32, viewport: &Viewport, width: u32, height: u32) -> f32 {
    ((viewport.scale * (pixel_x as f32 - width as f32 / 2.0) + viewport.offset_x) * PLANE_SPAN)
        / average_side(width, height)
}

#[inline]
#[must_use]
pub fn pixel_to_sample(
    pixel_x: u32,
    pixel_y: u32,
    viewport: &Viewport,
    width: u32,
    height: u32,
) -> Sample {
    Sample {
        real: column_to_real(pixel_x, viewport, width, height),
        imag: row_to_imag(pixel_y, viewport, width, height),
    }
}
