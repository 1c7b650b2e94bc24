//! Input adapters for the Mandelbrot explorer.
//!
//! Adapters receive input from a window system and translate it into
//! viewport commands.

#[cfg(feature = "gui")]
pub mod gui;
