use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ColorType, ImageFormat};
use std::path::Path;

/// Writes 8-bit RGBA PNG through the `image` crate.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            buffer.width(),
            buffer.height(),
            ColorType::Rgba8,
            ImageFormat::Png,
        )
        .map_err(|source| PresentError::Encode {
            path: filepath.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    #[test]
    fn png_round_trips_through_image_crate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut buffer = PixelBuffer::new(PixelRect::from_size(Point { x: 0, y: 0 }, 3, 2).unwrap());
        buffer.set_pixel(Point { x: 2, y: 1 }, Colour::rgb(10, 20, 30)).unwrap();

        PngFilePresenter::new().present(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.as_raw(), buffer.buffer());
    }
}
