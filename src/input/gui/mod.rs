//! Windowed front end: winit owns the window and keyboard, pixels uploads
//! the computed frame as a texture.

mod app;
pub mod commands;
pub mod keymap;
