pub mod builder;
pub mod presets;
pub mod texture;
