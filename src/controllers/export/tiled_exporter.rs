use crate::controllers::export::export_job::{ExportJob, ExportRequest};
use crate::controllers::renderer::errors::FrameError;
use crate::controllers::renderer::fractal_renderer::FractalRenderer;
use crate::core::actions::cancellation::CancelToken;
use crate::core::data::frame_snapshot::FrameSnapshot;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::util::tile_grid::tile_grid;
use std::thread;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Upper bound on the pixels of one exported image.
pub const MAX_EXPORT_PIXELS: u64 = 1 << 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportProgress {
    pub tiles_done: usize,
    pub total_tiles: usize,
}

impl ExportProgress {
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total_tiles == 0 {
            return 1.0;
        }
        self.tiles_done as f64 / self.total_tiles as f64
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export size must be at least 1x1 pixels, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    #[error("{pixels} pixels exceeds the export limit of {limit}")]
    CanvasTooLarge { pixels: u64, limit: u64 },
    #[error("failed to partition the canvas: {0}")]
    Tiling(#[from] PixelRectError),
    #[error("tile {tile:?} failed: {source}")]
    Tile {
        tile: PixelRect,
        #[source]
        source: FrameError,
    },
    #[error("failed to composite tile: {0}")]
    Composite(#[from] PixelBufferError),
    #[error("export worker panicked")]
    WorkerPanicked,
}

/// The three ways an export can end. Cancellation is not an error.
#[derive(Debug)]
pub enum ExportOutcome {
    Completed(PixelBuffer),
    Cancelled,
    Failed(ExportError),
}

impl ExportOutcome {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The finished image, if the export completed.
    #[must_use]
    pub fn into_image(self) -> Option<PixelBuffer> {
        match self {
            Self::Completed(image) => Some(image),
            _ => None,
        }
    }
}

impl From<Result<PixelBuffer, ExportError>> for ExportOutcome {
    fn from(result: Result<PixelBuffer, ExportError>) -> Self {
        match result {
            Ok(image) => Self::Completed(image),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Renders `request.width × request.height` tile by tile in row-major order.
///
/// Every tile is mapped against the full image size, so the result equals a
/// single full-size render. `cancel` is checked before each tile; after each
/// tile `progress` is called and the thread yields.
pub fn export_image<P, C>(
    renderer: &mut FractalRenderer,
    snapshot: &FrameSnapshot,
    request: ExportRequest,
    mut progress: P,
    cancel: &C,
) -> ExportOutcome
where
    P: FnMut(ExportProgress),
    C: CancelToken,
{
    let start = Instant::now();
    let (width, height) = (request.width, request.height);

    let tiles = match plan_tiles(request) {
        Ok(tiles) => tiles,
        Err(err) => {
            warn!(width, height, error = %err, "export rejected");
            return ExportOutcome::Failed(err);
        }
    };

    let mut job = ExportJob::new(request, tiles.len());
    let mut canvas = match PixelRect::from_size(Point { x: 0, y: 0 }, width, height) {
        Ok(rect) => PixelBuffer::new(rect),
        Err(err) => return ExportOutcome::Failed(err.into()),
    };

    for tile in tiles {
        if cancel.is_cancelled() {
            job.cancel();
            drop(canvas);
            let done = job.progress();
            info!(
                tiles_done = done.tiles_done,
                total_tiles = done.total_tiles,
                "export cancelled"
            );
            return ExportOutcome::Cancelled;
        }

        let rendered = match renderer.render_tile(snapshot, width, height, tile) {
            Ok(rendered) => rendered,
            Err(source) => {
                warn!(?tile, error = %source, "export tile failed");
                return ExportOutcome::Failed(ExportError::Tile { tile, source });
            }
        };

        if let Err(err) = canvas.blit(&rendered) {
            return ExportOutcome::Failed(err.into());
        }

        let update = job.record_tile_done();
        debug!(
            tiles_done = update.tiles_done,
            total_tiles = update.total_tiles,
            "export tile rendered"
        );
        progress(update);
        thread::yield_now();
    }

    info!(
        width,
        height,
        tile_size = job.tile_size(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "export completed"
    );

    ExportOutcome::Completed(canvas)
}

fn plan_tiles(request: ExportRequest) -> Result<Vec<PixelRect>, ExportError> {
    let (width, height) = (request.width, request.height);

    if width == 0 || height == 0 {
        return Err(ExportError::ZeroSize { width, height });
    }

    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_EXPORT_PIXELS {
        return Err(ExportError::CanvasTooLarge {
            pixels,
            limit: MAX_EXPORT_PIXELS,
        });
    }

    Ok(tile_grid(width, height, request.tile_size)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::renderer::fractal_renderer::{RenderQuality, RendererConfig};
    use crate::core::data::render_settings::Detail;
    use crate::core::data::view::View;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn renderer() -> FractalRenderer {
        FractalRenderer::new(RendererConfig {
            threads: Some(2),
            ..RendererConfig::default()
        })
        .unwrap()
    }

    fn snapshot(detail: Detail) -> FrameSnapshot {
        let mut snapshot = FrameSnapshot::default();
        snapshot.settings.iterations = 96;
        snapshot.settings.detail = detail;
        snapshot.view = View::new(-0.7, 0.1, 2.5);
        snapshot
    }

    fn request(width: u32, height: u32, tile_size: u32) -> ExportRequest {
        ExportRequest {
            width,
            height,
            tile_size,
        }
    }

    fn export(
        renderer: &mut FractalRenderer,
        snapshot: &FrameSnapshot,
        request: ExportRequest,
    ) -> PixelBuffer {
        export_image(renderer, snapshot, request, |_| {}, &|| false)
            .into_image()
            .unwrap()
    }

    #[test]
    fn tiled_export_matches_single_tile_export() {
        let mut renderer = renderer();

        for detail in [Detail::X1, Detail::X2] {
            let snapshot = snapshot(detail);
            let whole = export(&mut renderer, &snapshot, request(61, 37, 64));

            for tile_size in [1, 7, 16, 60] {
                let tiled = export(&mut renderer, &snapshot, request(61, 37, tile_size));
                assert_eq!(tiled, whole, "tile size {} at {:?}", tile_size, detail);
            }
        }
    }

    #[test]
    fn tiled_export_matches_full_frame_render() {
        let mut renderer = renderer();
        let mut snapshot = snapshot(Detail::X2);
        snapshot.settings.fractal_kind = FractalKind::Julia;
        snapshot.view = View::new(0.0, 0.0, 3.0);

        let tiled = export(&mut renderer, &snapshot, request(48, 32, 10));
        let frame = renderer
            .render_frame(&snapshot, 48, 32, RenderQuality::Full)
            .unwrap();

        assert_eq!(&tiled, frame);
    }

    #[test]
    fn progress_is_reported_after_every_tile() {
        let mut renderer = renderer();
        let mut updates = Vec::new();

        let outcome = export_image(
            &mut renderer,
            &snapshot(Detail::X1),
            request(20, 10, 8),
            |update| updates.push(update),
            &|| false,
        );

        assert!(outcome.is_completed());
        let expected: Vec<ExportProgress> = (1..=6)
            .map(|tiles_done| ExportProgress {
                tiles_done,
                total_tiles: 6,
            })
            .collect();
        assert_eq!(updates, expected);
    }

    #[test]
    fn cancelling_after_first_tile_then_exporting_again_succeeds() {
        let mut renderer = renderer();
        let snapshot = snapshot(Detail::X1);
        let cancelled = AtomicBool::new(false);
        let mut updates = 0;

        let outcome = export_image(
            &mut renderer,
            &snapshot,
            request(128, 128, 16),
            |_| {
                updates += 1;
                cancelled.store(true, Ordering::Release);
            },
            &|| cancelled.load(Ordering::Acquire),
        );

        assert!(outcome.is_cancelled());
        assert_eq!(updates, 1);

        let second = export_image(&mut renderer, &snapshot, request(64, 48, 16), |_| {}, &|| false);
        let image = second.into_image().unwrap();
        assert_eq!(image.width(), 64);
        assert_eq!(image.height(), 48);
    }

    #[test]
    fn cancelled_before_start_renders_nothing() {
        let mut renderer = renderer();
        let mut updates = 0;

        let outcome = export_image(
            &mut renderer,
            &snapshot(Detail::X1),
            request(32, 32, 8),
            |_| updates += 1,
            &|| true,
        );

        assert!(outcome.is_cancelled());
        assert_eq!(updates, 0);
    }

    #[test]
    fn zero_size_export_fails() {
        let mut renderer = renderer();

        let outcome = export_image(&mut renderer, &snapshot(Detail::X1), request(0, 8, 8), |_| {}, &|| false);

        assert!(matches!(
            outcome,
            ExportOutcome::Failed(ExportError::ZeroSize { width: 0, height: 8 })
        ));
    }

    #[test]
    fn oversized_export_fails_without_allocating() {
        let mut renderer = renderer();

        let outcome = export_image(
            &mut renderer,
            &snapshot(Detail::X1),
            request(100_000, 100_000, 512),
            |_| {},
            &|| false,
        );

        assert!(matches!(
            outcome,
            ExportOutcome::Failed(ExportError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn tile_failure_is_reported_with_tile() {
        let mut renderer = renderer();
        let mut snapshot = snapshot(Detail::X1);
        snapshot.settings.iterations = 0;

        let outcome = export_image(&mut renderer, &snapshot, request(8, 8, 4), |_| {}, &|| false);

        assert!(matches!(
            outcome,
            ExportOutcome::Failed(ExportError::Tile { .. })
        ));
    }

    #[test]
    fn progress_fraction() {
        let progress = ExportProgress {
            tiles_done: 3,
            total_tiles: 4,
        };

        assert_eq!(progress.fraction(), 0.75);
    }
}
