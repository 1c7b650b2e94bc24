pub mod pixel_buffer;
pub mod sample;
pub mod viewport;
