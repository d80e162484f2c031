use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::colorize::{INTERIOR_COLOUR, colorize};
use crate::core::colour_mapping::palette::texture::PaletteTexture;
use crate::core::data::adjustments::Adjustments;
use crate::core::data::colour::Colour;
use crate::core::data::frame_snapshot::FrameSnapshot;
use crate::core::data::palette_config::PaletteConfig;
use crate::core::data::render_settings::ScaleMode;
use crate::core::fractals::escape_time::evaluate::EscapeResult;
use std::convert::Infallible;

/// Colours escape-time results against one frame's palette and adjustments.
#[derive(Debug, Clone, Copy)]
pub struct EscapeColourMap<'a> {
    texture: &'a PaletteTexture,
    palette: PaletteConfig,
    adjustments: Adjustments,
    scale_mode: ScaleMode,
    max_iterations: u32,
    interior_solid: bool,
}

impl<'a> EscapeColourMap<'a> {
    #[must_use]
    pub fn new(texture: &'a PaletteTexture, snapshot: &FrameSnapshot) -> Self {
        Self {
            texture,
            palette: snapshot.palette,
            adjustments: snapshot.adjustments,
            scale_mode: snapshot.settings.scale_mode,
            max_iterations: snapshot.settings.iterations,
            interior_solid: snapshot.settings.interior_solid,
        }
    }
}

impl ColourMap<EscapeResult> for EscapeColourMap<'_> {
    type Failure = Infallible;

    fn map(&self, value: &EscapeResult) -> Result<Colour, Self::Failure> {
        // Solid interior is deliberately left unadjusted.
        if !value.escaped && self.interior_solid {
            return Ok(INTERIOR_COLOUR);
        }

        Ok(colorize(
            value.smooth,
            self.max_iterations,
            self.texture,
            &self.palette,
            &self.adjustments,
            self.scale_mode,
        ))
    }

    fn display_name(&self) -> &str {
        self.palette.preset.display_name()
    }
}
