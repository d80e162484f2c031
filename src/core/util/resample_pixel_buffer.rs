use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;

/// Box-filters a supersampled buffer down by `factor` into `target`.
///
/// Each target pixel is the rounded mean of its `factor × factor` block.
pub fn downsample(
    source: &PixelBuffer,
    factor: u32,
    target: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    if factor <= 1 {
        return PixelBuffer::from_data(target, source.buffer().clone());
    }

    let source_width = source.width() as usize;
    let (width, height) = (target.width() as usize, target.height() as usize);
    let factor = factor as usize;
    let samples = (factor * factor) as u32;

    if source.width() as usize != width * factor || source.height() as usize != height * factor {
        return Err(PixelBufferError::BoundsMismatch {
            pixel_rect_size: width * height * factor * factor * BYTES_PER_PIXEL,
            buffer_size: source.buffer_size(),
        });
    }

    let bytes = source.buffer();
    let mut data = Vec::with_capacity(width * height * BYTES_PER_PIXEL);

    for y in 0..height {
        for x in 0..width {
            let mut sums = [0u32; BYTES_PER_PIXEL];

            for sy in y * factor..(y + 1) * factor {
                let row = sy * source_width;
                for sx in x * factor..(x + 1) * factor {
                    let index = (row + sx) * BYTES_PER_PIXEL;
                    for (channel, sum) in sums.iter_mut().enumerate() {
                        *sum += u32::from(bytes[index + channel]);
                    }
                }
            }

            data.extend(sums.iter().map(|sum| ((sum + samples / 2) / samples) as u8));
        }
    }

    PixelBuffer::from_data(target, data)
}

/// Nearest-neighbour upscale of a reduced-resolution preview into `target`.
pub fn upscale_nearest(
    source: &PixelBuffer,
    target: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    let (source_width, source_height) = (source.width() as usize, source.height() as usize);
    let (width, height) = (target.width() as usize, target.height() as usize);
    let bytes = source.buffer();
    let mut data = Vec::with_capacity(width * height * BYTES_PER_PIXEL);

    for y in 0..height {
        let sy = (y * source_height / height).min(source_height - 1);
        for x in 0..width {
            let sx = (x * source_width / width).min(source_width - 1);
            let index = (sy * source_width + sx) * BYTES_PER_PIXEL;
            data.extend_from_slice(&bytes[index..index + BYTES_PER_PIXEL]);
        }
    }

    PixelBuffer::from_data(target, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use pretty_assertions::assert_eq;

    fn rect(width: u32, height: u32) -> PixelRect {
        PixelRect::from_size(Point { x: 0, y: 0 }, width, height).unwrap()
    }

    #[test]
    fn downsample_averages_blocks() {
        #[rustfmt::skip]
        let source = PixelBuffer::from_data(rect(2, 2), vec![
            0, 10, 255, 255,    100, 10, 255, 255,
            0, 20, 0, 255,      101, 20, 0, 255,
        ]).unwrap();

        let result = downsample(&source, 2, rect(1, 1)).unwrap();

        assert_eq!(result.buffer(), &vec![50, 15, 128, 255]);
    }

    #[test]
    fn downsample_by_one_is_identity() {
        let source = PixelBuffer::from_data(rect(2, 1), vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        let result = downsample(&source, 1, rect(2, 1)).unwrap();

        assert_eq!(result.buffer(), source.buffer());
    }

    #[test]
    fn downsample_rejects_wrong_source_size() {
        let source = PixelBuffer::new(rect(3, 4));

        assert!(downsample(&source, 2, rect(2, 2)).is_err());
    }

    #[test]
    fn upscale_repeats_pixels() {
        let source = PixelBuffer::from_data(rect(2, 1), vec![1, 1, 1, 255, 2, 2, 2, 255]).unwrap();

        let result = upscale_nearest(&source, rect(4, 2)).unwrap();

        let reds: Vec<u8> = result.buffer().chunks_exact(4).map(|p| p[0]).collect();
        assert_eq!(reds, vec![1, 1, 2, 2, 1, 1, 2, 2]);
    }

    #[test]
    fn upscale_handles_odd_targets() {
        let source = PixelBuffer::new(rect(2, 2));

        let result = upscale_nearest(&source, rect(5, 3)).unwrap();

        assert_eq!(result.width(), 5);
        assert_eq!(result.height(), 3);
    }
}
