use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("colour map error: {0}")]
    ColourMap(#[source] Box<dyn Error + Send + Sync>),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Maps row-major values to an RGBA buffer covering `pixel_rect`.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, pixel_rect, &NeverCancel)
}

/// Like [`generate_pixel_buffer`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. A cancelled run builds no buffer.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for (i, value) in input.iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let colour = mapper
            .map(value)
            .map_err(|err| GeneratePixelBufferError::ColourMap(Box::new(err)))?;

        buffer.extend_from_slice(&[colour.r, colour.g, colour.b, colour.a]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug, thiserror::Error)]
    #[error("StubColourMapError")]
    struct StubColourMapError;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        type Failure = StubColourMapError;

        fn map(&self, value: &u8) -> Result<Colour, Self::Failure> {
            Ok(Colour::rgb(*value, *value, *value))
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        type Failure = StubColourMapError;

        fn map(&self, _: &u8) -> Result<Colour, Self::Failure> {
            Err(StubColourMapError)
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    fn rect(right: i32, bottom: i32) -> PixelRect {
        PixelRect::new(Point { x: 0, y: 0 }, Point { x: right, y: bottom }).unwrap()
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let pixel_rect = rect(2, 1);
        let expected_buffer: PixelBufferData = vec![
            1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255, 5, 5, 5, 255, 6, 6, 6, 255,
        ];

        let results = generate_pixel_buffer(&input, &mapper, pixel_rect).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let results = generate_pixel_buffer(&input, &StubColourMapFailure {}, rect(2, 1));

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
        assert_eq!(
            results.unwrap_err().to_string(),
            "colour map error: StubColourMapError"
        );
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let results = generate_pixel_buffer(&input, &StubColourMapSuccess {}, rect(1, 1));

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 16,
                    buffer_size: 24
                }
            ))
        ));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result =
            generate_pixel_buffer_cancelable(&input, &StubColourMapSuccess {}, rect(2, 1), &cancel_token);

        assert!(matches!(result, Err(GeneratePixelBufferError::Cancelled(_))));
    }

    #[test]
    fn test_cancelable_completes_when_not_cancelled() {
        let input: Vec<u8> = vec![7; 6];
        let cancelled = AtomicBool::new(false);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result =
            generate_pixel_buffer_cancelable(&input, &StubColourMapSuccess {}, rect(2, 1), &cancel_token)
                .unwrap();

        assert_eq!(result.buffer_size(), 24);
    }

    #[test]
    fn test_cancelled_error_displays_message() {
        let err = GeneratePixelBufferError::Cancelled(Cancelled);
        assert_eq!(err.to_string(), "operation cancelled");
    }
}
