use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning-ship",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(FractalKind::ALL.first(), Some(&FractalKind::default()));
    }

    #[test]
    fn ids_round_trip_and_match_serde() {
        for &kind in FractalKind::ALL {
            assert_eq!(FractalKind::from_id(kind.id()), Some(kind));
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{}\"", kind.id())
            );
        }
        assert_eq!(FractalKind::from_id("newton"), None);
    }

    #[test]
    fn display_names_are_unique() {
        for (i, a) in FractalKind::ALL.iter().enumerate() {
            for b in &FractalKind::ALL[i + 1..] {
                assert_ne!(a.display_name(), b.display_name());
            }
        }
    }
}
