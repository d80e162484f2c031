//! JSON scene files: a frame snapshot plus the renderer modes it needs.
//! Every field is optional and falls back to its default.

use crate::controllers::renderer::fractal_renderer::RendererConfig;
use crate::core::data::frame_snapshot::FrameSnapshot;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneFileError {
    #[error("failed to read scene {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write scene {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub frame: FrameSnapshot,
    pub renderer: RendererConfig,
}

impl Scene {
    /// Parses scene JSON, clamping the view into its valid range.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut scene: Self = serde_json::from_str(text)?;
        scene.frame.view = scene.frame.view.clamped();
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn load_scene(path: &Path) -> Result<Scene, SceneFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| SceneFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Scene::from_json(&text).map_err(|source| SceneFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_scene(path: &Path, scene: &Scene) -> Result<(), SceneFileError> {
    let text = scene.to_json().map_err(|source| SceneFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, text).map_err(|source| SceneFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
