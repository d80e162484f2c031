//! Selection of the per-pixel program.
//!
//! Several precision and colouring modes can be named in a configuration but
//! only one combination has an implementation. Compiling any other
//! combination fails with a diagnostic that callers surface unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrecisionMode {
    #[default]
    Standard,
    Perturbation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColouringAlgorithm {
    #[default]
    SmoothEscape,
    OrbitTrap,
    DistanceEstimate,
    Histogram,
}

impl PrecisionMode {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Perturbation => "perturbation",
        }
    }
}

impl ColouringAlgorithm {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SmoothEscape => "smooth-escape",
            Self::OrbitTrap => "orbit-trap",
            Self::DistanceEstimate => "distance-estimate",
            Self::Histogram => "histogram",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{diagnostic}")]
pub struct KernelCompileError {
    pub diagnostic: String,
}

/// A compiled per-pixel program: f64 escape-time iteration with smooth colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    precision: PrecisionMode,
    algorithm: ColouringAlgorithm,
}

impl Kernel {
    pub fn compile(
        precision: PrecisionMode,
        algorithm: ColouringAlgorithm,
    ) -> Result<Self, KernelCompileError> {
        if precision != PrecisionMode::Standard {
            return Err(KernelCompileError {
                diagnostic: format!(
                    "precision mode `{}` has no kernel: only `standard` (f64) is available",
                    precision.id()
                ),
            });
        }

        if algorithm != ColouringAlgorithm::SmoothEscape {
            return Err(KernelCompileError {
                diagnostic: format!(
                    "colouring algorithm `{}` has no kernel: only `smooth-escape` is available",
                    algorithm.id()
                ),
            });
        }

        Ok(Self {
            precision,
            algorithm,
        })
    }

    #[must_use]
    pub fn precision(&self) -> PrecisionMode {
        self.precision
    }

    #[must_use]
    pub fn algorithm(&self) -> ColouringAlgorithm {
        self.algorithm
    }
}
