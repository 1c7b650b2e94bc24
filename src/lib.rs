//! Real-time escape-time renderer for the Mandelbrot set.
//!
//! A frame is computed by mapping every pixel through the [`Viewport`] to a
//! complex sample, evaluating samples in lane groups with an
//! [`EscapeTimeKernel`], and writing the grey intensity into a [`PixelBuffer`].

mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;

pub use crate::config::{ConfigError, RenderConfig, PAN_STEP, WINDOW_TITLE, ZOOM_FACTOR};
pub use crate::controllers::frame_loop::{FrameLoop, FrameLoopError};
pub use crate::core::actions::compute_frame::compute_frame::{compute_escape_counts, compute_frame};
pub use crate::core::actions::compute_frame::ports::escape_time_kernel::EscapeTimeKernel;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::sample::Sample;
pub use crate::core::data::viewport::{PanDirection, Viewport, ViewportCommand};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::gradient::{GrayscaleGradient, INTERIOR_INTENSITY};
pub use crate::core::fractals::mandelbrot::kernels::factory::kernel_factory;
pub use crate::core::fractals::mandelbrot::kernels::grouped::{GroupedKernel4, GroupedKernel8};
pub use crate::core::fractals::mandelbrot::kernels::kinds::{KernelKind, UnknownKernelKind};
pub use crate::core::fractals::mandelbrot::kernels::lanes::{F32Lanes, LaneMask, U32Lanes};
pub use crate::core::fractals::mandelbrot::kernels::scalar::{ScalarKernel, escape_count};
pub use crate::core::fractals::mandelbrot::kernels::vectorized::{VectorizedKernel4, VectorizedKernel8};
pub use crate::core::util::pixel_to_sample::pixel_to_sample;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
