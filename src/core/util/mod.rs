pub mod pixel_to_complex_coords;
pub mod resample_pixel_buffer;
pub mod tile_grid;
