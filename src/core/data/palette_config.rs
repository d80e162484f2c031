use crate::core::colour_mapping::palette::presets::PalettePresetKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    #[default]
    Linear,
    Cosine,
    Perceptual,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub preset: PalettePresetKind,
    /// Number of palette cycles spread across the full iteration range.
    pub length: u32,
    pub cycle_offset: f64,
    pub reverse: bool,
    pub interpolation: Interpolation,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            preset: PalettePresetKind::default(),
            length: 4,
            cycle_offset: 0.0,
            reverse: false,
            interpolation: Interpolation::Linear,
        }
    }
}

impl PaletteConfig {
    /// The fields that shape the palette texture itself. Length and cycle
    /// offset only move the lookup index.
    #[must_use]
    pub fn texture_key(&self) -> (PalettePresetKind, bool, Interpolation) {
        (self.preset, self.reverse, self.interpolation)
    }
}
