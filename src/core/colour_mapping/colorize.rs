use crate::core::colour_mapping::adjust::apply_adjustments;
use crate::core::colour_mapping::palette::texture::PaletteTexture;
use crate::core::data::adjustments::Adjustments;
use crate::core::data::colour::Colour;
use crate::core::data::palette_config::PaletteConfig;
use crate::core::data::render_settings::ScaleMode;

/// Flat colour for points that never escape when interior is solid.
pub const INTERIOR_COLOUR: Colour = Colour::BLACK;

const EDGE_GLOW_FALLOFF: f64 = 3.0;

/// Cyclic palette position in `[0, 1)` for a smooth escape value.
#[must_use]
pub fn palette_index(
    t: f64,
    max_iterations: u32,
    palette: &PaletteConfig,
    scale_mode: ScaleMode,
) -> f64 {
    let scaled = scale_mode.apply(t);
    let index = scaled / f64::from(max_iterations.max(1)) * f64::from(palette.length)
        + palette.cycle_offset;

    index.rem_euclid(1.0)
}

/// Colours one escaped sample: palette lookup, edge glow, then adjustments.
#[must_use]
pub fn colorize(
    t: f64,
    max_iterations: u32,
    texture: &PaletteTexture,
    palette: &PaletteConfig,
    adjustments: &Adjustments,
    scale_mode: ScaleMode,
) -> Colour {
    let t = if t.is_finite() { t } else { 0.0 };

    let sampled = texture.sample(palette_index(t, max_iterations, palette, scale_mode));

    let nu = t - t.floor();
    let glow = (-EDGE_GLOW_FALLOFF * nu.abs()).exp() * adjustments.edge_glow.clamp(0.0, 1.0);
    let glowing = sampled.map(|c| c + (1.0 - c) * glow);

    Colour::from_unit(apply_adjustments(glowing, adjustments))
}
