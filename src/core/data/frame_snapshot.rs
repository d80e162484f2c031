use crate::core::data::adjustments::Adjustments;
use crate::core::data::palette_config::PaletteConfig;
use crate::core::data::render_settings::RenderSettings;
use crate::core::data::view::View;
use serde::{Deserialize, Serialize};

/// Everything one frame needs, captured by value so nothing can change
/// underneath the evaluator while it runs.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSnapshot {
    pub view: View,
    pub settings: RenderSettings,
    pub palette: PaletteConfig,
    pub adjustments: Adjustments,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::palette::presets::PalettePresetKind;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_gives_defaults() {
        let snapshot: FrameSnapshot = serde_json::from_str("{}").unwrap();

        assert_eq!(snapshot, FrameSnapshot::default());
    }

    #[test]
    fn json_round_trip_preserves_every_section() {
        let mut snapshot = FrameSnapshot::default();
        snapshot.view = View::new(-0.1, 0.65, 0.02);
        snapshot.settings.fractal_kind = FractalKind::Julia;
        snapshot.palette.preset = PalettePresetKind::Magma;
        snapshot.adjustments.hue = 45.0;

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: FrameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, snapshot);
    }
}
