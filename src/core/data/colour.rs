use serde::{Deserialize, Serialize};

/// An RGBA8 colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Builds an opaque colour from unit-range channels, clamping each one.
    #[must_use]
    pub fn from_unit(rgb: [f64; 3]) -> Self {
        Self::rgb(unit_to_byte(rgb[0]), unit_to_byte(rgb[1]), unit_to_byte(rgb[2]))
    }
}

fn unit_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
