use crate::controllers::export::tiled_exporter::ExportProgress;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TILE_SIZE: u32 = 512;

/// What to export: the final image size and the tile edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportRequest {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            width: 3840,
            height: 2160,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

/// Bookkeeping for one export in flight. Lives only for the duration of
/// the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    total_width: u32,
    total_height: u32,
    tile_size: u32,
    total_tiles: usize,
    tiles_done: usize,
    cancelled: bool,
}

impl ExportJob {
    #[must_use]
    pub fn new(request: ExportRequest, total_tiles: usize) -> Self {
        Self {
            total_width: request.width,
            total_height: request.height,
            tile_size: request.tile_size.max(1),
            total_tiles,
            tiles_done: 0,
            cancelled: false,
        }
    }

    #[must_use]
    pub fn total_width(&self) -> u32 {
        self.total_width
    }

    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.total_height
    }

    #[must_use]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    #[must_use]
    pub fn tiles_done(&self) -> usize {
        self.tiles_done
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn record_tile_done(&mut self) -> ExportProgress {
        self.tiles_done = (self.tiles_done + 1).min(self.total_tiles);
        self.progress()
    }

    #[must_use]
    pub fn progress(&self) -> ExportProgress {
        ExportProgress {
            tiles_done: self.tiles_done,
            total_tiles: self.total_tiles,
        }
    }
}
