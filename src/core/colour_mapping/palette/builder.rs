use crate::core::colour_mapping::palette::presets::GradientStop;
use crate::core::colour_mapping::palette::texture::PaletteTexture;
use crate::core::data::colour::Colour;
use crate::core::data::palette_config::{Interpolation, PaletteConfig};
use std::f64::consts::PI;

pub const PALETTE_TEXTURE_SIZE: usize = 1024;
const PERCEPTUAL_GAMMA: f64 = 2.2;

/// Samples the configured preset into a texture of `size` entries (at least 2).
#[must_use]
pub fn build_palette(config: &PaletteConfig, size: usize) -> PaletteTexture {
    let size = size.max(2);
    let stops = config.preset.stops();
    let last = (size - 1) as f64;

    let samples = (0..size)
        .map(|i| {
            let step = if config.reverse { size - 1 - i } else { i };
            sample_gradient(stops, step as f64 / last, config.interpolation)
        })
        .collect();

    PaletteTexture::new(samples)
}

fn sample_gradient(stops: &[GradientStop], t: f64, interpolation: Interpolation) -> Colour {
    match stops {
        [] => Colour::BLACK,
        [only] => only.colour,
        _ => {
            let (s0, s1) = bracket(stops, t);
            let span = s1.position - s0.position;
            let u = if span > 0.0 {
                ((t - s0.position) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };

            interpolate(s0.colour, s1.colour, u, interpolation)
        }
    }
}

fn bracket(stops: &[GradientStop], t: f64) -> (GradientStop, GradientStop) {
    stops
        .windows(2)
        .find(|pair| pair[0].position <= t && t <= pair[1].position)
        .map(|pair| (pair[0], pair[1]))
        .unwrap_or_else(|| {
            if t < stops[0].position {
                (stops[0], stops[1])
            } else {
                (stops[stops.len() - 2], stops[stops.len() - 1])
            }
        })
}

fn interpolate(a: Colour, b: Colour, u: f64, interpolation: Interpolation) -> Colour {
    let channel = |from: u8, to: u8| -> u8 {
        let (from, to) = (f64::from(from), f64::from(to));

        let value = match interpolation {
            Interpolation::Linear => from + (to - from) * u,
            Interpolation::Cosine => {
                let eased = (1.0 - (PI * u).cos()) / 2.0;
                from + (to - from) * eased
            }
            Interpolation::Perceptual => {
                let lift = |v: f64| (v / 255.0).powf(PERCEPTUAL_GAMMA);
                let mixed = lift(from) + (lift(to) - lift(from)) * u;
                mixed.powf(1.0 / PERCEPTUAL_GAMMA) * 255.0
            }
        };

        value.round().clamp(0.0, 255.0) as u8
    };

    Colour::rgb(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}
