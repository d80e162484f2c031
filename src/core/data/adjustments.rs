use serde::{Deserialize, Serialize};

/// Post-colour adjustments. The default is the identity adjustment.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    pub brightness: f64,
    pub contrast: f64,
    pub gamma: f64,
    pub saturation: f64,
    pub hue: f64,
    pub edge_glow: f64,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            gamma: 1.0,
            saturation: 1.0,
            hue: 0.0,
            edge_glow: 0.0,
        }
    }
}
