pub mod pixel_to_sample;
