use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;

/// Splits a canvas into tiles of at most `tile_size` on a side, row-major.
/// The last row and column absorb the remainder.
pub fn tile_grid(
    total_width: u32,
    total_height: u32,
    tile_size: u32,
) -> Result<Vec<PixelRect>, PixelRectError> {
    let tile_size = tile_size.max(1);
    let mut tiles = Vec::new();

    for y in (0..total_height).step_by(tile_size as usize) {
        for x in (0..total_width).step_by(tile_size as usize) {
            let width = tile_size.min(total_width - x);
            let height = tile_size.min(total_height - y);

            tiles.push(PixelRect::from_size(
                Point {
                    x: x as i32,
                    y: y as i32,
                },
                width,
                height,
            )?);
        }
    }

    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division() {
        let tiles = tile_grid(100, 50, 25).unwrap();

        assert_eq!(tiles.len(), 8);
        assert!(tiles.iter().all(|t| t.width() == 25 && t.height() == 25));
    }

    #[test]
    fn remainder_tiles_are_smaller() {
        let tiles = tile_grid(101, 60, 50).unwrap();

        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[2].width(), 1);
        assert_eq!(tiles[2].top_left(), Point { x: 100, y: 0 });
        assert_eq!(tiles[5].height(), 10);
    }

    #[test]
    fn row_major_order() {
        let tiles = tile_grid(4, 4, 2).unwrap();
        let origins: Vec<Point> = tiles.iter().map(|t| t.top_left()).collect();

        assert_eq!(
            origins,
            vec![
                Point { x: 0, y: 0 },
                Point { x: 2, y: 0 },
                Point { x: 0, y: 2 },
                Point { x: 2, y: 2 },
            ]
        );
    }

    #[test]
    fn tiles_cover_every_pixel_once() {
        let tiles = tile_grid(37, 23, 8).unwrap();
        let covered: u64 = tiles.iter().map(|t| t.size()).sum();

        assert_eq!(covered, 37 * 23);
    }

    #[test]
    fn oversized_tile_gives_single_tile() {
        let tiles = tile_grid(30, 20, 1000).unwrap();

        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].width(), 30);
        assert_eq!(tiles[0].height(), 20);
    }

    #[test]
    fn zero_tile_size_is_treated_as_one() {
        assert_eq!(tile_grid(3, 2, 0).unwrap().len(), 6);
    }

    #[test]
    fn empty_canvas_has_no_tiles() {
        assert!(tile_grid(0, 10, 4).unwrap().is_empty());
    }
}
