use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EscapeTimeError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("pixel {pixel:?} is outside the tile {tile:?}")]
    PixelOutsideTile { pixel: Point, tile: PixelRect },
}
