pub mod cli_controller;
pub mod scene_file;

pub use cli_controller::{CliController, CliError, SceneOverrides, preset_listing};
pub use scene_file::{Scene, SceneFileError, load_scene, save_scene};
