use crate::core::data::colour::Colour;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub colour: Colour,
}

impl GradientStop {
    #[must_use]
    pub const fn new(position: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            position,
            colour: Colour::rgb(r, g, b),
        }
    }
}

// Every table ends on its first colour so the palette wraps without a seam.

pub const ELECTRIC_BLUE: &[GradientStop] = &[
    GradientStop::new(0.0, 2, 4, 32),
    GradientStop::new(0.25, 0, 70, 255),
    GradientStop::new(0.5, 0, 230, 255),
    GradientStop::new(0.75, 220, 250, 255),
    GradientStop::new(1.0, 2, 4, 32),
];

pub const CLASSIC_BLUE: &[GradientStop] = &[
    GradientStop::new(0.0, 0, 7, 100),
    GradientStop::new(0.16, 32, 107, 203),
    GradientStop::new(0.42, 237, 255, 255),
    GradientStop::new(0.6425, 255, 170, 0),
    GradientStop::new(0.8575, 0, 2, 0),
    GradientStop::new(1.0, 0, 7, 100),
];

pub const FIRE: &[GradientStop] = &[
    GradientStop::new(0.0, 0, 0, 0),
    GradientStop::new(0.25, 128, 0, 0),
    GradientStop::new(0.5, 255, 80, 0),
    GradientStop::new(0.75, 255, 200, 40),
    GradientStop::new(0.9, 255, 255, 200),
    GradientStop::new(1.0, 0, 0, 0),
];

pub const VIRIDIS: &[GradientStop] = &[
    GradientStop::new(0.0, 68, 1, 84),
    GradientStop::new(0.2, 59, 82, 139),
    GradientStop::new(0.4, 33, 145, 140),
    GradientStop::new(0.6, 94, 201, 98),
    GradientStop::new(0.8, 253, 231, 37),
    GradientStop::new(1.0, 68, 1, 84),
];

pub const MAGMA: &[GradientStop] = &[
    GradientStop::new(0.0, 0, 0, 4),
    GradientStop::new(0.2, 59, 15, 112),
    GradientStop::new(0.4, 140, 41, 129),
    GradientStop::new(0.6, 222, 73, 104),
    GradientStop::new(0.8, 254, 159, 109),
    GradientStop::new(0.9, 252, 253, 191),
    GradientStop::new(1.0, 0, 0, 4),
];

pub const PLASMA: &[GradientStop] = &[
    GradientStop::new(0.0, 13, 8, 135),
    GradientStop::new(0.25, 126, 3, 168),
    GradientStop::new(0.5, 204, 71, 120),
    GradientStop::new(0.75, 248, 149, 64),
    GradientStop::new(0.9, 240, 249, 33),
    GradientStop::new(1.0, 13, 8, 135),
];

pub const RAINBOW: &[GradientStop] = &[
    GradientStop::new(0.0, 255, 0, 0),
    GradientStop::new(1.0 / 6.0, 255, 255, 0),
    GradientStop::new(2.0 / 6.0, 0, 255, 0),
    GradientStop::new(3.0 / 6.0, 0, 255, 255),
    GradientStop::new(4.0 / 6.0, 0, 0, 255),
    GradientStop::new(5.0 / 6.0, 255, 0, 255),
    GradientStop::new(1.0, 255, 0, 0),
];

pub const GRAYSCALE: &[GradientStop] = &[
    GradientStop::new(0.0, 0, 0, 0),
    GradientStop::new(0.5, 255, 255, 255),
    GradientStop::new(1.0, 0, 0, 0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PalettePresetKind {
    #[default]
    ElectricBlue,
    ClassicBlue,
    Fire,
    Viridis,
    Magma,
    Plasma,
    Rainbow,
    Grayscale,
}

impl PalettePresetKind {
    pub const ALL: &'static [Self] = &[
        Self::ElectricBlue,
        Self::ClassicBlue,
        Self::Fire,
        Self::Viridis,
        Self::Magma,
        Self::Plasma,
        Self::Rainbow,
        Self::Grayscale,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ElectricBlue => "Electric blue",
            Self::ClassicBlue => "Classic blue",
            Self::Fire => "Fire",
            Self::Viridis => "Viridis",
            Self::Magma => "Magma",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::Grayscale => "Grayscale",
        }
    }

    /// Stable identifier, as stored in shareable links and scene files.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::ElectricBlue => "electric-blue",
            Self::ClassicBlue => "classic-blue",
            Self::Fire => "fire",
            Self::Viridis => "viridis",
            Self::Magma => "magma",
            Self::Plasma => "plasma",
            Self::Rainbow => "rainbow",
            Self::Grayscale => "grayscale",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }

    #[must_use]
    pub const fn stops(self) -> &'static [GradientStop] {
        match self {
            Self::ElectricBlue => ELECTRIC_BLUE,
            Self::ClassicBlue => CLASSIC_BLUE,
            Self::Fire => FIRE,
            Self::Viridis => VIRIDIS,
            Self::Magma => MAGMA,
            Self::Plasma => PLASMA,
            Self::Rainbow => RAINBOW,
            Self::Grayscale => GRAYSCALE,
        }
    }
}

impl std::fmt::Display for PalettePresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            PalettePresetKind::ALL.first(),
            Some(&PalettePresetKind::default())
        );
    }

    #[test]
    fn every_table_is_well_formed() {
        for &kind in PalettePresetKind::ALL {
            let stops = kind.stops();

            assert!(stops.len() >= 2, "{} has too few stops", kind);
            assert_eq!(stops[0].position, 0.0, "{} must start at 0", kind);
            assert_eq!(stops[stops.len() - 1].position, 1.0, "{} must end at 1", kind);
            assert!(
                stops.windows(2).all(|w| w[0].position < w[1].position),
                "{} positions must strictly increase",
                kind
            );
            assert_eq!(
                stops[0].colour,
                stops[stops.len() - 1].colour,
                "{} must wrap to its first colour",
                kind
            );
        }
    }

    #[test]
    fn ids_round_trip() {
        for &kind in PalettePresetKind::ALL {
            assert_eq!(PalettePresetKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(PalettePresetKind::from_id("sepia"), None);
    }

    #[test]
    fn ids_match_serde_names() {
        for &kind in PalettePresetKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }
}
