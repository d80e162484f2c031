pub mod adjustments;
pub mod colour;
pub mod complex;
pub mod frame_snapshot;
pub mod palette_config;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod render_settings;
pub mod view;
pub mod view_history;
