use log::debug;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn rgba_buffer_size(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    Allocation {
        width: u32,
        height: u32,
        bytes: Option<usize>,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation {
                width,
                height,
                bytes: Some(bytes),
            } => {
                write!(
                    f,
                    "could not allocate {} bytes for a {}x{} pixel buffer",
                    bytes, width, height
                )
            }
            Self::Allocation {
                width,
                height,
                bytes: None,
            } => {
                write!(
                    f,
                    "pixel buffer size for {}x{} overflows the address space",
                    width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 frame, sized once and written in place every frame.
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates a zeroed `4 * width * height` byte frame.
    ///
    /// # Panics
    /// Panics if either dimension is zero; dimensions are validated once at
    /// startup by [`crate::RenderConfig::validate`].
    pub fn set_up(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        assert!(
            width > 0 && height > 0,
            "pixel buffer dimensions must be non-zero: {}x{}",
            width,
            height
        );

        let total_bytes = rgba_buffer_size(width, height).ok_or(PixelBufferError::Allocation {
            width,
            height,
            bytes: None,
        })?;

        let mut buffer = PixelBufferData::new();
        buffer
            .try_reserve_exact(total_bytes)
            .map_err(|_| PixelBufferError::Allocation {
                width,
                height,
                bytes: Some(total_bytes),
            })?;
        buffer.resize(total_bytes, 0);

        debug!("pixel buffer set up: {}x{} ({} bytes)", width, height, total_bytes);

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    /// Releases the storage and zeroes the dimensions. Calling it again is a no-op.
    pub fn tear_down(&mut self) {
        if self.is_torn_down() {
            return;
        }

        debug!("pixel buffer torn down: {}x{}", self.width, self.height);

        self.buffer = PixelBufferData::new();
        self.width = 0;
        self.height = 0;
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.buffer.capacity() == 0 && self.width == 0 && self.height == 0
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Mutable view of one row's RGBA bytes.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height, "row {} outside buffer of height {}", y, self.height);

        let stride = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;

        &mut self.buffer[start..start + stride]
    }

    /// Writes an opaque grey pixel `(grad, grad, grad, 255)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, grad: u8) {
        assert!(
            x < self.width && y < self.height,
            "pixel at x:{}, y:{} outside {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        write_grey(&mut self.buffer[index..index + BYTES_PER_PIXEL], grad);
    }
}

#[inline]
pub(crate) fn write_grey(pixel: &mut [u8], grad: u8) {
    pixel[0] = grad;
    pixel[1] = grad;
    pixel[2] = grad;
    pixel[3] = 255;
}
