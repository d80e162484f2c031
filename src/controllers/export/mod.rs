pub mod export_handle;
pub mod export_job;
pub mod tiled_exporter;
