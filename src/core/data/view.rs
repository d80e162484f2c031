use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};

pub const MIN_SCALE: f64 = 1e-15;
pub const MAX_SCALE: f64 = 8.0;
const DEFAULT_SCALE: f64 = 3.0;

/// The visible window onto the complex plane.
///
/// `scale` is the viewport width in complex units; the height follows from the
/// output aspect ratio at render time.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    pub centre_re: f64,
    pub centre_im: f64,
    pub scale: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            centre_re: -0.5,
            centre_im: 0.0,
            scale: DEFAULT_SCALE,
        }
    }
}

impl View {
    #[must_use]
    pub fn new(centre_re: f64, centre_im: f64, scale: f64) -> Self {
        Self {
            centre_re,
            centre_im,
            scale: clamp_scale(scale),
        }
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(self.centre_re, self.centre_im)
    }

    /// Returns a copy with the scale pulled back into the supported range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self::new(self.centre_re, self.centre_im, self.scale)
    }

    #[must_use]
    pub fn panned(&self, delta_re: f64, delta_im: f64) -> Self {
        Self::new(
            self.centre_re + delta_re,
            self.centre_im + delta_im,
            self.scale,
        )
    }

    /// Zooms by `factor` (> 1 zooms in) keeping `anchor` fixed on screen.
    #[must_use]
    pub fn zoomed_about(&self, anchor: Complex, factor: f64) -> Self {
        if !(factor.is_finite() && factor > 0.0) {
            return *self;
        }

        let scale = clamp_scale(self.scale / factor);
        let ratio = scale / self.scale;

        Self {
            centre_re: anchor.real + (self.centre_re - anchor.real) * ratio,
            centre_im: anchor.imag + (self.centre_im - anchor.imag) * ratio,
            scale,
        }
    }
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        DEFAULT_SCALE
    } else {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_scale() {
        assert_eq!(View::new(0.0, 0.0, 100.0).scale, MAX_SCALE);
        assert_eq!(View::new(0.0, 0.0, 0.0).scale, MIN_SCALE);
        assert_eq!(View::new(0.0, 0.0, -1.0).scale, MIN_SCALE);
        assert_eq!(View::new(0.0, 0.0, f64::NAN).scale, DEFAULT_SCALE);
    }

    #[test]
    fn zoom_about_centre_keeps_centre() {
        let view = View::new(-0.75, 0.1, 3.0);
        let zoomed = view.zoomed_about(view.centre(), 2.0);

        assert_eq!(zoomed.centre(), view.centre());
        assert_eq!(zoomed.scale, 1.5);
    }

    #[test]
    fn zoom_about_anchor_moves_centre_towards_anchor() {
        let view = View::new(0.0, 0.0, 4.0);
        let zoomed = view.zoomed_about(Complex::new(1.0, 1.0), 2.0);

        assert_eq!(zoomed.centre(), Complex::new(0.5, 0.5));
        assert_eq!(zoomed.scale, 2.0);
    }

    #[test]
    fn zoom_with_invalid_factor_is_ignored() {
        let view = View::default();

        assert_eq!(view.zoomed_about(Complex::ZERO, 0.0), view);
        assert_eq!(view.zoomed_about(Complex::ZERO, f64::INFINITY), view);
    }

    #[test]
    fn panned_moves_centre() {
        let view = View::new(1.0, 2.0, 3.0).panned(0.5, -1.0);

        assert_eq!(view.centre(), Complex::new(1.5, 1.0));
        assert_eq!(view.scale, 3.0);
    }
}
