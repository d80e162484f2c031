use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::render_settings::RenderSettings;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::evaluate::{EscapeParams, EscapeResult, evaluate};
use crate::core::util::pixel_to_complex_coords::ViewportMapping;

/// Evaluates the pixels of one tile of a larger canvas.
///
/// Pixels are tile-local; the tile's offset is added back in by the mapping,
/// whose denominators are the full canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    mapping: ViewportMapping,
    local_rect: PixelRect,
    tile_offset: Point,
    params: EscapeParams,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeResult;
    type Failure = EscapeTimeError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if !self.local_rect.contains_point(pixel) {
            return Err(EscapeTimeError::PixelOutsideTile {
                pixel,
                tile: self.local_rect,
            });
        }

        let c0 = self.mapping.pixel_to_complex(pixel, self.tile_offset);

        Ok(evaluate(c0, &self.params))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.local_rect
    }
}

impl EscapeTimeAlgorithm {
    pub fn new(
        mapping: ViewportMapping,
        tile: PixelRect,
        settings: &RenderSettings,
    ) -> Result<Self, EscapeTimeError> {
        if settings.iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        let local_rect = PixelRect::from_size(Point { x: 0, y: 0 }, tile.width(), tile.height())
            .map_err(|_| EscapeTimeError::PixelOutsideTile {
                pixel: tile.top_left(),
                tile,
            })?;

        Ok(Self {
            mapping,
            local_rect,
            tile_offset: tile.top_left(),
            params: EscapeParams::from_settings(settings),
        })
    }

    #[must_use]
    pub fn params(&self) -> &EscapeParams {
        &self.params
    }
}
