use crate::controllers::export::export_job::ExportRequest;
use crate::controllers::export::tiled_exporter::{self, ExportOutcome, ExportProgress};
use crate::controllers::renderer::errors::{FrameError, RendererError};
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::colour_mapping::palette::builder::{PALETTE_TEXTURE_SIZE, build_palette};
use crate::core::colour_mapping::palette::presets::PalettePresetKind;
use crate::core::colour_mapping::palette::texture::PaletteTexture;
use crate::core::data::frame_snapshot::FrameSnapshot;
use crate::core::data::palette_config::{Interpolation, PaletteConfig};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::render_settings::Detail;
use crate::core::fractals::kernel::{ColouringAlgorithm, Kernel, PrecisionMode};
use crate::core::util::resample_pixel_buffer::upscale_nearest;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Upper bound on evaluator samples in a single frame.
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Worker threads for the renderer's pool; `None` lets rayon decide.
    pub threads: Option<usize>,
    pub precision: PrecisionMode,
    pub algorithm: ColouringAlgorithm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderQuality {
    #[default]
    Full,
    /// Half linear resolution without supersampling, upscaled to the
    /// requested size. Used while the view is being dragged.
    Preview,
}

type PaletteKey = (PalettePresetKind, bool, Interpolation);

/// An owned rendering resource: one thread pool, one palette texture and one
/// output surface. Every operation takes `&mut self`, so a renderer runs at
/// most one frame or export at a time.
pub struct FractalRenderer {
    pool: rayon::ThreadPool,
    kernel: Kernel,
    palette_key: PaletteKey,
    texture: PaletteTexture,
    palette_builds: u64,
    surface: Option<PixelBuffer>,
}

impl std::fmt::Debug for FractalRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FractalRenderer")
            .field("threads", &self.pool.current_num_threads())
            .field("kernel", &self.kernel)
            .field("palette_key", &self.palette_key)
            .finish_non_exhaustive()
    }
}

impl FractalRenderer {
    pub fn new(config: RendererConfig) -> Result<Self, RendererError> {
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|index| format!("fractal-render-{index}"));
        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;

        let kernel = Kernel::compile(config.precision, config.algorithm).inspect_err(|err| {
            warn!(diagnostic = %err, "kernel compilation failed");
        })?;

        let palette = PaletteConfig::default();

        info!(
            threads = pool.current_num_threads(),
            precision = kernel.precision().id(),
            algorithm = kernel.algorithm().id(),
            "renderer ready"
        );

        Ok(Self {
            pool,
            kernel,
            palette_key: palette.texture_key(),
            texture: build_palette(&palette, PALETTE_TEXTURE_SIZE),
            palette_builds: 1,
            surface: None,
        })
    }

    #[must_use]
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    #[must_use]
    pub fn palette_texture(&self) -> &PaletteTexture {
        &self.texture
    }

    /// How many times the palette texture has been built, including at construction.
    #[must_use]
    pub fn palette_builds(&self) -> u64 {
        self.palette_builds
    }

    /// The most recently rendered frame, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&PixelBuffer> {
        self.surface.as_ref()
    }

    /// Rebuilds the palette texture when its shape changed. Returns whether
    /// a rebuild happened.
    pub fn configure_palette(&mut self, palette: &PaletteConfig) -> bool {
        let key = palette.texture_key();
        if key == self.palette_key {
            return false;
        }

        self.texture = build_palette(palette, PALETTE_TEXTURE_SIZE);
        self.palette_key = key;
        self.palette_builds += 1;

        debug!(preset = palette.preset.id(), reverse = palette.reverse, "palette rebuilt");

        true
    }

    pub fn render_frame(
        &mut self,
        snapshot: &FrameSnapshot,
        width: u32,
        height: u32,
        quality: RenderQuality,
    ) -> Result<&PixelBuffer, FrameError> {
        self.render_frame_cancelable(snapshot, width, height, quality, &NeverCancel)
    }

    /// Renders a full viewport into the owned surface, polling `cancel`
    /// between rows.
    pub fn render_frame_cancelable<C: CancelToken>(
        &mut self,
        snapshot: &FrameSnapshot,
        width: u32,
        height: u32,
        quality: RenderQuality,
        cancel: &C,
    ) -> Result<&PixelBuffer, FrameError> {
        let start = Instant::now();

        let result = self.render_viewport(snapshot, width, height, quality, cancel);

        match result {
            Ok(frame) => {
                debug!(
                    width,
                    height,
                    ?quality,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "frame rendered"
                );
                Ok(&*self.surface.insert(frame))
            }
            Err(err) => {
                if !err.is_cancelled() {
                    warn!(width, height, error = %err, "frame failed");
                }
                Err(err)
            }
        }
    }

    fn render_viewport<C: CancelToken>(
        &mut self,
        snapshot: &FrameSnapshot,
        width: u32,
        height: u32,
        quality: RenderQuality,
        cancel: &C,
    ) -> Result<PixelBuffer, FrameError> {
        let target = canvas_rect(width, height)?;

        match quality {
            RenderQuality::Full => self.render_region(snapshot, width, height, target, cancel),
            RenderQuality::Preview => {
                let mut preview = *snapshot;
                preview.settings.detail = Detail::X1;
                let (preview_width, preview_height) = ((width / 2).max(1), (height / 2).max(1));

                let reduced = self.render_region(
                    &preview,
                    preview_width,
                    preview_height,
                    canvas_rect(preview_width, preview_height)?,
                    cancel,
                )?;

                Ok(upscale_nearest(&reduced, target)?)
            }
        }
    }

    /// Renders one tile of a `canvas_width × canvas_height` image. Tiles of
    /// the same canvas line up exactly with a full-size render.
    pub fn render_tile(
        &mut self,
        snapshot: &FrameSnapshot,
        canvas_width: u32,
        canvas_height: u32,
        tile: PixelRect,
    ) -> Result<PixelBuffer, FrameError> {
        self.render_region(snapshot, canvas_width, canvas_height, tile, &NeverCancel)
    }

    fn render_region<C: CancelToken>(
        &mut self,
        snapshot: &FrameSnapshot,
        canvas_width: u32,
        canvas_height: u32,
        tile: PixelRect,
        cancel: &C,
    ) -> Result<PixelBuffer, FrameError> {
        let detail = u64::from(snapshot.settings.detail.factor());
        let samples = tile.size() * detail * detail;
        if samples > MAX_CANVAS_PIXELS {
            return Err(FrameError::CanvasTooLarge {
                samples,
                limit: MAX_CANVAS_PIXELS,
            });
        }

        self.configure_palette(&snapshot.palette);

        let texture = &self.texture;
        let frame = self.pool.install(|| {
            render_frame(snapshot, texture, canvas_width, canvas_height, tile, cancel)
        })?;

        Ok(frame)
    }

    /// Renders a `width × height` image tile by tile, reporting progress after
    /// each tile and checking `cancel` before each one.
    pub fn export_image<P, C>(
        &mut self,
        snapshot: &FrameSnapshot,
        request: ExportRequest,
        progress: P,
        cancel: &C,
    ) -> ExportOutcome
    where
        P: FnMut(ExportProgress),
        C: CancelToken,
    {
        tiled_exporter::export_image(self, snapshot, request, progress, cancel)
    }

    /// Releases the thread pool, palette texture and surface.
    pub fn dispose(self) {
        debug!(palette_builds = self.palette_builds, "renderer disposed");
    }
}

fn canvas_rect(width: u32, height: u32) -> Result<PixelRect, FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::ZeroSize { width, height });
    }

    Ok(PixelRect::from_size(Point { x: 0, y: 0 }, width, height)?)
}
