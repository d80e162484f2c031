use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Distinguishes algorithm failures from cancellation, so callers can treat
/// cancellation as ordinary control flow.
#[derive(Debug, Error)]
pub enum GenerateFractalError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}

/// Evaluates the algorithm's rect in parallel on the current rayon pool.
///
/// Results are row-major, identical to [`generate_fractal_serial`].
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + 'static,
{
    generate_fractal_parallel_rayon_cancelable(algorithm, &NeverCancel).map_err(|e| match e {
        GenerateFractalError::Algorithm(alg_err) => alg_err,
        GenerateFractalError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_fractal_parallel_rayon`], but polls `cancel` at the start
/// of every row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + 'static,
    C: CancelToken,
{
    let pixel_rect = algorithm.pixel_rect();
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> =
        (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
            .into_par_iter()
            .map(|y| {
                let mut row = Vec::with_capacity(row_width);

                for (i, x) in (x_start..=x_end).enumerate() {
                    if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                        return Err(GenerateFractalError::Cancelled(Cancelled));
                    }

                    let result = algorithm
                        .compute(Point { x, y })
                        .map_err(GenerateFractalError::Algorithm)?;
                    row.push(result);
                }

                Ok(row)
            })
            .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
