use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view::View;

/// Maps pixels of a full output canvas onto the complex plane.
///
/// The canvas dimensions are always the *total* output size. Tiles pass their
/// offset within the canvas, which keeps every tile on the same grid as a
/// single full-size render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportMapping {
    view: View,
    width: f64,
    height: f64,
}

impl ViewportMapping {
    #[must_use]
    pub fn new(view: View, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            view,
            width: f64::from(canvas_width.max(1)),
            height: f64::from(canvas_height.max(1)),
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    #[must_use]
    pub fn plane_width(&self) -> f64 {
        self.view.scale
    }

    #[must_use]
    pub fn plane_height(&self) -> f64 {
        self.view.scale / self.aspect()
    }

    /// Row 0 is the top of the image, so imaginary values fall as `y` grows.
    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point, tile_offset: Point) -> Complex {
        let x = f64::from(pixel.x) + f64::from(tile_offset.x);
        let y = f64::from(pixel.y) + f64::from(tile_offset.y);

        Complex {
            real: (x / self.width - 0.5) * self.plane_width() + self.view.centre_re,
            imag: self.view.centre_im - (y / self.height - 0.5) * self.plane_height(),
        }
    }

    /// Inverse of [`Self::pixel_to_complex`] in canvas coordinates.
    #[must_use]
    pub fn complex_to_pixel(&self, point: Complex) -> (f64, f64) {
        let x = ((point.real - self.view.centre_re) / self.plane_width() + 0.5) * self.width;
        let y = ((self.view.centre_im - point.imag) / self.plane_height() + 0.5) * self.height;

        (x, y)
    }
}

#[must_use]
pub fn pixel_to_complex(
    pixel: Point,
    viewport_width: u32,
    viewport_height: u32,
    view: View,
    tile_offset: Point,
) -> Complex {
    ViewportMapping::new(view, viewport_width, viewport_height).pixel_to_complex(pixel, tile_offset)
}

#[must_use]
pub fn complex_to_pixel(
    point: Complex,
    viewport_width: u32,
    viewport_height: u32,
    view: View,
) -> (f64, f64) {
    ViewportMapping::new(view, viewport_width, viewport_height).complex_to_pixel(point)
}
