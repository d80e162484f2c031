use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_cancelable;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::errors::RenderFrameError;
use crate::core::colour_mapping::escape_colour_map::EscapeColourMap;
use crate::core::colour_mapping::palette::texture::PaletteTexture;
use crate::core::data::frame_snapshot::FrameSnapshot;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::util::pixel_to_complex_coords::ViewportMapping;
use crate::core::util::resample_pixel_buffer::downsample;

/// The supersampled grid behind one tile of a canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub tile: PixelRect,
}

impl SampleGrid {
    /// Scales the canvas and `tile` by `detail` in each dimension.
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        tile: PixelRect,
        detail: u32,
    ) -> Result<Self, RenderFrameError> {
        let overflow = || RenderFrameError::SampleGridOverflow {
            width: canvas_width,
            height: canvas_height,
            detail,
        };
        let scale = |v: i32| i32::try_from(i64::from(v) * i64::from(detail)).map_err(|_| overflow());

        let tile = PixelRect::from_size(
            Point {
                x: scale(tile.top_left().x)?,
                y: scale(tile.top_left().y)?,
            },
            tile.width().checked_mul(detail).ok_or_else(overflow)?,
            tile.height().checked_mul(detail).ok_or_else(overflow)?,
        )?;

        Ok(Self {
            canvas_width: canvas_width.checked_mul(detail).ok_or_else(overflow)?,
            canvas_height: canvas_height.checked_mul(detail).ok_or_else(overflow)?,
            tile,
        })
    }
}

/// Renders `tile` of a `canvas_width × canvas_height` image of `snapshot`.
///
/// The mapping always uses the full canvas size, so any tiling of the canvas
/// reproduces a single full-size render pixel for pixel. The returned buffer
/// is positioned at the tile's place in the canvas.
pub fn render_frame<C: CancelToken>(
    snapshot: &FrameSnapshot,
    texture: &PaletteTexture,
    canvas_width: u32,
    canvas_height: u32,
    tile: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError> {
    let detail = snapshot.settings.detail.factor();
    let grid = SampleGrid::new(canvas_width, canvas_height, tile, detail)?;

    let mapping = ViewportMapping::new(snapshot.view, grid.canvas_width, grid.canvas_height);
    let algorithm = EscapeTimeAlgorithm::new(mapping, grid.tile, &snapshot.settings)?;
    let colour_map = EscapeColourMap::new(texture, snapshot);

    render_samples(&algorithm, &colour_map, detail, tile, cancel)
}

/// Evaluates every sample of `algorithm`, colours it, and box-filters the
/// result down by `detail` into `tile`.
pub fn render_samples<Alg, CMap, C>(
    algorithm: &Alg,
    colour_map: &CMap,
    detail: u32,
    tile: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + Sync + 'static,
    CMap: ColourMap<Alg::Success>,
    C: CancelToken,
{
    let values = generate_fractal_parallel_rayon_cancelable(algorithm, cancel)?;
    let samples = generate_pixel_buffer_cancelable(&values, colour_map, algorithm.pixel_rect(), cancel)?;

    if detail <= 1 {
        return Ok(PixelBuffer::from_data(tile, samples.into_data())?);
    }

    Ok(downsample(&samples, detail, tile)?)
}
