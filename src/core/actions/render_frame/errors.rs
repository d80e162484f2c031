use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::GenerateFractalError;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderFrameError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("invalid render settings: {0}")]
    Settings(#[from] EscapeTimeError),
    #[error("sample grid for a {width}x{height} canvas at detail {detail} is too large")]
    SampleGridOverflow { width: u32, height: u32, detail: u32 },
    #[error("evaluation failed: {0}")]
    Algorithm(#[source] Box<dyn Error + Send + Sync>),
    #[error("colour mapping failed: {0}")]
    ColourMap(#[source] Box<dyn Error + Send + Sync>),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

impl<E> From<GenerateFractalError<E>> for RenderFrameError
where
    E: Error + Send + Sync + 'static,
{
    fn from(err: GenerateFractalError<E>) -> Self {
        match err {
            GenerateFractalError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GenerateFractalError::Algorithm(err) => Self::Algorithm(Box::new(err)),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}
