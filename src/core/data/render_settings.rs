use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKind;
use serde::{Deserialize, Serialize};

/// Supersampling factor: the evaluator runs `factor²` times per output pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Detail {
    #[default]
    #[serde(rename = "1")]
    X1,
    #[serde(rename = "2")]
    X2,
    #[serde(rename = "4")]
    X4,
}

impl Detail {
    pub const ALL: &'static [Self] = &[Self::X1, Self::X2, Self::X4];

    #[must_use]
    pub const fn factor(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
        }
    }

    #[must_use]
    pub fn from_factor(factor: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.factor() == factor)
    }
}

/// Transform applied to the smooth escape value before palette lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleMode {
    #[default]
    Linear,
    Log,
    Sqrt,
}

impl ScaleMode {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Log => (1.0 + t).ln(),
            Self::Sqrt => t.max(0.0).sqrt(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub iterations: u32,
    pub detail: Detail,
    pub power: f64,
    pub bailout: f64,
    pub fractal_kind: FractalKind,
    pub interior_solid: bool,
    pub scale_mode: ScaleMode,
    pub julia_c: Complex,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            iterations: 500,
            detail: Detail::X1,
            power: 2.0,
            bailout: 4.0,
            fractal_kind: FractalKind::Mandelbrot,
            interior_solid: true,
            scale_mode: ScaleMode::Linear,
            julia_c: Complex::new(-0.7, 0.27),
        }
    }
}
