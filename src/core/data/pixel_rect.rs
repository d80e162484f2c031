use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// An inclusive rectangle of pixels, at least one pixel on each side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_size(top_left: Point, width: u32, height: u32) -> Result<Self, PixelRectError> {
        let right = i64::from(top_left.x) + i64::from(width) - 1;
        let bottom = i64::from(top_left.y) + i64::from(height) - 1;

        if width == 0 || height == 0 || right > i64::from(i32::MAX) || bottom > i64::from(i32::MAX)
        {
            return Err(PixelRectError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        Self::new(
            top_left,
            Point {
                x: right as i32,
                y: bottom as i32,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (i64::from(self.bottom_right.x) - i64::from(self.top_left.x) + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (i64::from(self.bottom_right.y) - i64::from(self.top_left.y) + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn contains_rect(&self, other: PixelRect) -> bool {
        self.contains_point(other.top_left) && self.contains_point(other.bottom_right)
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}
