use crate::core::data::complex::Complex;
use crate::core::data::render_settings::RenderSettings;
use crate::core::fractals::fractal_kinds::FractalKind;

pub const MIN_POWER: f64 = 2.0;
pub const MIN_BAILOUT: f64 = 2.0;
const SMOOTH_EPSILON: f64 = 1e-6;

/// Numeric inputs of the escape-time iteration, with the hard floors applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeParams {
    kind: FractalKind,
    max_iterations: u32,
    power: f64,
    bailout: f64,
    julia_c: Complex,
}

impl EscapeParams {
    #[must_use]
    pub fn new(
        kind: FractalKind,
        max_iterations: u32,
        power: f64,
        bailout: f64,
        julia_c: Complex,
    ) -> Self {
        Self {
            kind,
            max_iterations: max_iterations.max(1),
            power: power.max(MIN_POWER),
            bailout: bailout.max(MIN_BAILOUT),
            julia_c,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self::new(
            settings.fractal_kind,
            settings.iterations,
            settings.power,
            settings.bailout,
            settings.julia_c,
        )
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn power(&self) -> f64 {
        self.power
    }

    #[must_use]
    pub fn bailout(&self) -> f64 {
        self.bailout
    }

    /// Splits a plane point into the iteration constant and starting value.
    #[must_use]
    pub fn seed(&self, c0: Complex) -> (Complex, Complex) {
        match self.kind {
            FractalKind::Mandelbrot | FractalKind::BurningShip => (c0, Complex::ZERO),
            FractalKind::Julia => (self.julia_c, c0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub escaped: bool,
    /// Steps applied when escape was detected, or the iteration budget for interior points.
    pub iteration_count: u32,
    pub final_z: Complex,
    /// Continuous escape count; equals the iteration budget for interior points.
    pub smooth: f64,
}

/// Runs the escape-time iteration for a single plane point.
#[must_use]
pub fn evaluate(c0: Complex, params: &EscapeParams) -> EscapeResult {
    let (c, mut z) = params.seed(c0);
    let bailout_squared = params.bailout * params.bailout;
    let burning_ship = params.kind == FractalKind::BurningShip;

    for step in 0..params.max_iterations {
        if burning_ship {
            z = z.abs_components();
        }

        z = z.powf(params.power) + c;

        if z.magnitude_squared() > bailout_squared {
            let iteration_count = step + 1;

            return EscapeResult {
                escaped: true,
                iteration_count,
                final_z: z,
                smooth: smooth_iteration_count(iteration_count, z.magnitude(), params.power),
            };
        }
    }

    EscapeResult {
        escaped: false,
        iteration_count: params.max_iterations,
        final_z: z,
        smooth: f64::from(params.max_iterations),
    }
}

fn smooth_iteration_count(iteration_count: u32, modulus: f64, power: f64) -> f64 {
    f64::from(iteration_count) - modulus.max(SMOOTH_EPSILON).ln().ln() / power.ln()
}
