use std::time::{Duration, Instant};

use log::debug;

use crate::config::{ConfigError, RenderConfig};
use crate::core::actions::compute_frame::compute_frame::compute_frame;
use crate::core::actions::compute_frame::ports::escape_time_kernel::EscapeTimeKernel;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::{Viewport, ViewportCommand};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::gradient::GrayscaleGradient;
use crate::core::fractals::mandelbrot::kernels::factory::kernel_factory;

/// Error raised while setting up a [`FrameLoop`].
#[derive(Debug)]
pub enum FrameLoopError {
    Config(ConfigError),
    Kernel(MandelbrotError),
    Buffer(PixelBufferError),
}

impl std::fmt::Display for FrameLoopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameLoopError::Config(e) => write!(f, "invalid configuration: {}", e),
            FrameLoopError::Kernel(e) => write!(f, "kernel error: {}", e),
            FrameLoopError::Buffer(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FrameLoopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameLoopError::Config(e) => Some(e),
            FrameLoopError::Kernel(e) => Some(e),
            FrameLoopError::Buffer(e) => Some(e),
        }
    }
}

impl From<ConfigError> for FrameLoopError {
    fn from(e: ConfigError) -> Self {
        FrameLoopError::Config(e)
    }
}

impl From<MandelbrotError> for FrameLoopError {
    fn from(e: MandelbrotError) -> Self {
        FrameLoopError::Kernel(e)
    }
}

impl From<PixelBufferError> for FrameLoopError {
    fn from(e: PixelBufferError) -> Self {
        FrameLoopError::Buffer(e)
    }
}

/// Owns the per-session state: the viewport, the selected kernel and the frame.
///
/// Input is applied between frames with [`FrameLoop::apply`]; each
/// [`FrameLoop::render`] computes a full frame against a snapshot of the viewport.
pub struct FrameLoop {
    viewport: Viewport,
    kernel: Box<dyn EscapeTimeKernel>,
    gradient: GrayscaleGradient,
    buffer: PixelBuffer,
    frames_rendered: u64,
    last_frame_duration: Option<Duration>,
}

impl FrameLoop {
    pub fn set_up(config: &RenderConfig) -> Result<Self, FrameLoopError> {
        config.validate()?;

        let kernel = kernel_factory(config.kernel, config.max_iterations)?;
        let gradient = GrayscaleGradient::with_contrast(config.max_iterations, config.contrast);
        let buffer = PixelBuffer::set_up(config.width, config.height)?;

        Ok(Self {
            viewport: Viewport::default(),
            kernel,
            gradient,
            buffer,
            frames_rendered: 0,
            last_frame_duration: None,
        })
    }

    /// Applies one input command. Returns `false` once the session should end.
    pub fn apply(&mut self, command: ViewportCommand) -> bool {
        self.viewport.apply(command)
    }

    /// Computes a full frame and returns its RGBA bytes.
    pub fn render(&mut self) -> &[u8] {
        let viewport = self.viewport;
        let start = Instant::now();

        compute_frame(&viewport, &self.kernel, &self.gradient, &mut self.buffer);

        let duration = start.elapsed();
        self.frames_rendered += 1;
        self.last_frame_duration = Some(duration);

        debug!(
            "frame {} computed in {:?} ({}, scale {}, offset {}, {})",
            self.frames_rendered,
            duration,
            self.kernel.kind(),
            viewport.scale,
            viewport.offset_x,
            viewport.offset_y
        );

        self.buffer.buffer()
    }

    pub fn tear_down(&mut self) {
        self.buffer.tear_down();
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn kernel(&self) -> &dyn EscapeTimeKernel {
        self.kernel.as_ref()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn last_frame_duration(&self) -> Option<Duration> {
        self.last_frame_duration
    }
}
