use crate::core::data::adjustments::Adjustments;

const MIN_GAMMA: f64 = 1e-3;

/// Brightness, contrast, gamma, then hue rotation and saturation in HSL.
/// Input and output are unit-range RGB.
#[must_use]
pub fn apply_adjustments(rgb: [f64; 3], adjustments: &Adjustments) -> [f64; 3] {
    let gamma = adjustments.gamma.max(MIN_GAMMA);
    let contrast = adjustments.contrast + 1.0;

    let toned = rgb.map(|c| {
        let c = c + adjustments.brightness;
        let c = (c - 0.5) * contrast + 0.5;
        c.clamp(0.0, 1.0).powf(1.0 / gamma)
    });

    let [hue, saturation, lightness] = rgb_to_hsl(toned);
    let hue = (hue + adjustments.hue).rem_euclid(360.0);
    let saturation = (saturation * adjustments.saturation).clamp(0.0, 1.0);

    hsl_to_rgb([hue, saturation, lightness]).map(|c| c.clamp(0.0, 1.0))
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[must_use]
pub fn rgb_to_hsl([r, g, b]: [f64; 3]) -> [f64; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, lightness];
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [sector * 60.0, saturation, lightness]
}

#[must_use]
pub fn hsl_to_rgb([hue, saturation, lightness]: [f64; 3]) -> [f64; 3] {
    if saturation == 0.0 {
        return [lightness; 3];
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    let h = hue / 360.0;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
