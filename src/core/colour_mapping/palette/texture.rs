use crate::core::data::colour::Colour;

/// A cyclic 1-D colour gradient sampled at a fixed number of points.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteTexture {
    samples: Vec<Colour>,
}

impl PaletteTexture {
    #[must_use]
    pub fn new(samples: Vec<Colour>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[Colour] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Linearly filtered lookup. `index` wraps into `[0, 1)`; the result is
    /// in unit-range RGB.
    #[must_use]
    pub fn sample(&self, index: f64) -> [f64; 3] {
        let Some(last) = self.samples.len().checked_sub(1) else {
            return [0.0; 3];
        };

        let index = if index.is_finite() {
            index.rem_euclid(1.0)
        } else {
            0.0
        };
        let position = index * last as f64;
        let lower = (position.floor() as usize).min(last);
        let upper = (lower + 1).min(last);
        let weight = position - lower as f64;

        let a = self.samples[lower].to_unit();
        let b = self.samples[upper].to_unit();

        [
            a[0] + (b[0] - a[0]) * weight,
            a[1] + (b[1] - a[1]) * weight,
            a[2] + (b[2] - a[2]) * weight,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_white_black() -> PaletteTexture {
        PaletteTexture::new(vec![Colour::BLACK, Colour::WHITE, Colour::BLACK])
    }

    #[test]
    fn sample_hits_entries_exactly() {
        let texture = black_white_black();

        assert_eq!(texture.sample(0.0), [0.0; 3]);
        assert_eq!(texture.sample(0.5), [1.0; 3]);
    }

    #[test]
    fn sample_interpolates_between_entries() {
        let texture = black_white_black();

        assert_eq!(texture.sample(0.25), [0.5; 3]);
    }

    #[test]
    fn sample_wraps_cyclically() {
        let texture = black_white_black();

        assert_eq!(texture.sample(1.5), texture.sample(0.5));
        assert_eq!(texture.sample(-0.75), texture.sample(0.25));
    }

    #[test]
    fn non_finite_index_samples_first_entry() {
        let texture = black_white_black();

        assert_eq!(texture.sample(f64::NAN), [0.0; 3]);
    }

    #[test]
    fn empty_texture_is_black() {
        assert_eq!(PaletteTexture::new(Vec::new()).sample(0.3), [0.0; 3]);
    }
}
