use crate::controllers::export::export_job::ExportRequest;
use crate::controllers::export::tiled_exporter::{ExportError, ExportOutcome, ExportProgress};
use crate::controllers::ports::file_presenter::PresentError;
use crate::controllers::renderer::errors::{FrameError, RendererError};
use crate::controllers::renderer::fractal_renderer::{FractalRenderer, RenderQuality, RendererConfig};
use crate::core::actions::cancellation::NeverCancel;
use crate::core::colour_mapping::palette::presets::PalettePresetKind;
use crate::core::data::complex::Complex;
use crate::core::data::frame_snapshot::FrameSnapshot;
use crate::core::data::palette_config::Interpolation;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_settings::{Detail, ScaleMode};
use crate::core::data::view::View;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::presenters::file::presenter_for_path;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Renderer(#[from] RendererError),
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("export was cancelled")]
    ExportCancelled,
    #[error(transparent)]
    Present(#[from] PresentError),
}

/// Command-line adjustments layered over a scene. Unset fields leave the
/// scene untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneOverrides {
    pub fractal: Option<FractalKind>,
    pub centre_re: Option<f64>,
    pub centre_im: Option<f64>,
    pub scale: Option<f64>,
    /// Zoom about the centre after it has been set; 2 zooms in twofold.
    pub zoom: Option<f64>,
    pub iterations: Option<u32>,
    pub detail: Option<Detail>,
    pub power: Option<f64>,
    pub bailout: Option<f64>,
    pub julia_re: Option<f64>,
    pub julia_im: Option<f64>,
    pub scale_mode: Option<ScaleMode>,
    pub palette: Option<PalettePresetKind>,
    pub palette_length: Option<u32>,
    pub cycle_offset: Option<f64>,
    pub reverse: bool,
    pub interpolation: Option<Interpolation>,
}

impl SceneOverrides {
    #[must_use]
    pub fn apply(&self, mut snapshot: FrameSnapshot) -> FrameSnapshot {
        let view = snapshot.view;
        let view = View::new(
            self.centre_re.unwrap_or(view.centre_re),
            self.centre_im.unwrap_or(view.centre_im),
            self.scale.unwrap_or(view.scale),
        );
        snapshot.view = match self.zoom {
            Some(zoom) => view.zoomed_about(view.centre(), zoom),
            None => view,
        };

        let settings = &mut snapshot.settings;
        if let Some(fractal) = self.fractal {
            settings.fractal_kind = fractal;
        }
        if let Some(iterations) = self.iterations {
            settings.iterations = iterations;
        }
        if let Some(detail) = self.detail {
            settings.detail = detail;
        }
        if let Some(power) = self.power {
            settings.power = power;
        }
        if let Some(bailout) = self.bailout {
            settings.bailout = bailout;
        }
        if let Some(scale_mode) = self.scale_mode {
            settings.scale_mode = scale_mode;
        }
        settings.julia_c = Complex::new(
            self.julia_re.unwrap_or(settings.julia_c.real),
            self.julia_im.unwrap_or(settings.julia_c.imag),
        );

        let palette = &mut snapshot.palette;
        if let Some(preset) = self.palette {
            palette.preset = preset;
        }
        if let Some(length) = self.palette_length {
            palette.length = length;
        }
        if let Some(offset) = self.cycle_offset {
            palette.cycle_offset = offset;
        }
        if self.reverse {
            palette.reverse = !palette.reverse;
        }
        if let Some(interpolation) = self.interpolation {
            palette.interpolation = interpolation;
        }

        snapshot
    }
}

/// One-shot rendering for the command line: renders or exports a snapshot
/// and writes it to disk in the format the path's extension names.
#[derive(Debug)]
pub struct CliController {
    renderer: FractalRenderer,
}

impl CliController {
    pub fn new(config: RendererConfig) -> Result<Self, CliError> {
        Ok(Self {
            renderer: FractalRenderer::new(config)?,
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &FractalRenderer {
        &self.renderer
    }

    pub fn render(
        &mut self,
        snapshot: &FrameSnapshot,
        width: u32,
        height: u32,
        quality: RenderQuality,
    ) -> Result<&PixelBuffer, CliError> {
        Ok(self.renderer.render_frame(snapshot, width, height, quality)?)
    }

    /// Exports tile by tile, logging progress at every tenth of the job.
    pub fn export(
        &mut self,
        snapshot: &FrameSnapshot,
        request: ExportRequest,
    ) -> Result<PixelBuffer, CliError> {
        let mut last_decile = 0;
        let progress = |progress: ExportProgress| {
            let decile = (progress.fraction() * 10.0).floor() as u32;
            if decile > last_decile {
                last_decile = decile;
                info!(
                    tiles_done = progress.tiles_done,
                    total_tiles = progress.total_tiles,
                    "export {}% complete",
                    decile * 10
                );
            }
        };

        match self.renderer.export_image(snapshot, request, progress, &NeverCancel) {
            ExportOutcome::Completed(image) => Ok(image),
            ExportOutcome::Cancelled => Err(CliError::ExportCancelled),
            ExportOutcome::Failed(err) => Err(err.into()),
        }
    }

    pub fn write(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), CliError> {
        let presenter = presenter_for_path(path)?;
        presenter.present(buffer, path)?;

        info!(path = %path.display(), width = buffer.width(), height = buffer.height(), "image written");

        Ok(())
    }

    pub fn dispose(self) {
        self.renderer.dispose();
    }
}

/// `id  display name` lines for every palette preset.
#[must_use]
pub fn preset_listing() -> Vec<String> {
    PalettePresetKind::ALL
        .iter()
        .map(|preset| format!("{:<16}{}", preset.id(), preset.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use pretty_assertions::assert_eq;

    fn small_snapshot() -> FrameSnapshot {
        let mut snapshot = FrameSnapshot::default();
        snapshot.settings.iterations = 64;
        snapshot
    }

    #[test]
    fn empty_overrides_leave_snapshot_unchanged() {
        let snapshot = FrameSnapshot::default();

        assert_eq!(SceneOverrides::default().apply(snapshot), snapshot);
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let overrides = SceneOverrides {
            fractal: Some(FractalKind::Julia),
            centre_re: Some(-0.1),
            iterations: Some(900),
            julia_im: Some(0.6),
            palette: Some(PalettePresetKind::Fire),
            reverse: true,
            ..SceneOverrides::default()
        };
        let base = FrameSnapshot::default();

        let snapshot = overrides.apply(base);

        assert_eq!(snapshot.settings.fractal_kind, FractalKind::Julia);
        assert_eq!(snapshot.view.centre_re, -0.1);
        assert_eq!(snapshot.view.centre_im, base.view.centre_im);
        assert_eq!(snapshot.view.scale, base.view.scale);
        assert_eq!(snapshot.settings.iterations, 900);
        assert_eq!(snapshot.settings.julia_c.real, base.settings.julia_c.real);
        assert_eq!(snapshot.settings.julia_c.imag, 0.6);
        assert_eq!(snapshot.palette.preset, PalettePresetKind::Fire);
        assert!(snapshot.palette.reverse);
        assert_eq!(snapshot.settings.power, base.settings.power);
    }

    #[test]
    fn zoom_divides_scale() {
        let overrides = SceneOverrides {
            scale: Some(2.0),
            zoom: Some(4.0),
            ..SceneOverrides::default()
        };

        let snapshot = overrides.apply(FrameSnapshot::default());

        assert_eq!(snapshot.view.scale, 0.5);
    }

    #[test]
    fn render_writes_png_and_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = CliController::new(RendererConfig::default()).unwrap();

        let frame = controller
            .render(&small_snapshot(), 24, 16, RenderQuality::Full)
            .unwrap()
            .clone();
        for name in ["frame.png", "frame.ppm"] {
            let path = dir.path().join(name);
            controller.write(&frame, &path).unwrap();
            assert!(path.metadata().unwrap().len() > 0);
        }
    }

    #[test]
    fn write_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = CliController::new(RendererConfig::default()).unwrap();
        let frame = controller
            .render(&small_snapshot(), 4, 4, RenderQuality::Full)
            .unwrap()
            .clone();

        let result = controller.write(&frame, &dir.path().join("frame.gif"));

        assert!(matches!(
            result,
            Err(CliError::Present(PresentError::UnsupportedFormat { .. }))
        ));
    }

    #[test]
    fn export_matches_single_render() {
        let snapshot = small_snapshot();
        let mut controller = CliController::new(RendererConfig::default()).unwrap();
        let request = ExportRequest {
            width: 40,
            height: 30,
            tile_size: 16,
        };

        let exported = controller.export(&snapshot, request).unwrap();
        let rendered = controller
            .render(&snapshot, 40, 30, RenderQuality::Full)
            .unwrap();

        assert_eq!(&exported, rendered);
        assert_eq!(
            exported.pixel(Point { x: 39, y: 29 }).unwrap(),
            rendered.pixel(Point { x: 39, y: 29 }).unwrap()
        );
    }

    #[test]
    fn export_of_empty_image_fails() {
        let mut controller = CliController::new(RendererConfig::default()).unwrap();
        let request = ExportRequest {
            width: 0,
            height: 10,
            tile_size: 16,
        };

        let result = controller.export(&small_snapshot(), request);

        assert!(matches!(
            result,
            Err(CliError::Export(ExportError::ZeroSize { .. }))
        ));
    }

    #[test]
    fn preset_listing_names_every_preset() {
        let lines = preset_listing();

        assert_eq!(lines.len(), PalettePresetKind::ALL.len());
        assert!(lines[0].starts_with(PalettePresetKind::ALL[0].id()));
    }
}
