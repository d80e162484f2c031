use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel {pixel:?} outside of pixel rect {pixel_rect:?}")]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
    #[error("tile {tile:?} does not fit inside canvas {canvas:?}")]
    TileOutsideCanvas { tile: PixelRect, canvas: PixelRect },
}

pub type PixelBufferData = Vec<u8>;

/// An RGBA8 raster covering a [`PixelRect`], stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (i64::from(pixel.x) - i64::from(self.pixel_rect.top_left().x)) as usize;
        let relative_y = (i64::from(pixel.y) - i64::from(self.pixel_rect.top_left().y)) as usize;

        Ok((relative_y * self.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = colour.a;

        Ok(())
    }

    /// Copies `tile` into this buffer at the tile's own position.
    pub fn blit(&mut self, tile: &PixelBuffer) -> Result<(), PixelBufferError> {
        let tile_rect = tile.pixel_rect();

        if !self.pixel_rect.contains_rect(tile_rect) {
            return Err(PixelBufferError::TileOutsideCanvas {
                tile: tile_rect,
                canvas: self.pixel_rect,
            });
        }

        let row_bytes = tile.width() as usize * BYTES_PER_PIXEL;

        for (row, source) in tile.buffer.chunks_exact(row_bytes).enumerate() {
            let start = self.index_of(Point {
                x: tile_rect.top_left().x,
                y: tile_rect.top_left().y + row as i32,
            })?;
            self.buffer[start..start + row_bytes].copy_from_slice(source);
        }

        Ok(())
    }
}
