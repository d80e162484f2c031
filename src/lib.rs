//! Escape-time fractal rendering: Mandelbrot, Julia and Burning Ship sets
//! coloured through configurable palettes, rendered as interactive frames
//! or exported tile by tile.

pub mod adapters;
pub mod controllers;
pub mod core;
pub mod presenters;

pub use controllers::cli::{CliController, Scene, SceneOverrides};
pub use controllers::export::export_handle::ExportHandle;
pub use controllers::export::export_job::ExportRequest;
pub use controllers::export::tiled_exporter::{ExportOutcome, ExportProgress};
pub use controllers::interactive::InteractiveController;
pub use controllers::renderer::fractal_renderer::{FractalRenderer, RenderQuality, RendererConfig};
pub use core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use core::data::frame_snapshot::FrameSnapshot;
pub use core::data::pixel_buffer::PixelBuffer;
