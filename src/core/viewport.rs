use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in figure pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from figure fractions measured from the lower-left
    /// corner, the way axes are placed on a figure.
    pub fn from_figure_fractions(
        figure: (u32, u32),
        left: f64,
        bottom: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let (fw, fh) = (figure.0 as f64, figure.1 as f64);
        Self::new(
            left * fw,
            (1.0 - bottom - height) * fh,
            width * fw,
            height * fh,
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Pixel position of an axes fraction (0,0 = lower-left, 1,1 = upper-right)
    pub fn fraction_to_pixel(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.x + fx * self.width, self.bottom() - fy * self.height)
    }

    /// Integer pixel bounds (x0, y0, x1, y1), clamped to a canvas, end-exclusive
    pub fn pixel_bounds(&self, canvas: (u32, u32)) -> (u32, u32, u32, u32) {
        let clamp = |v: f64, max: u32| v.round().clamp(0.0, max as f64) as u32;
        (
            clamp(self.x, canvas.0),
            clamp(self.y, canvas.1),
            clamp(self.right(), canvas.0),
            clamp(self.bottom(), canvas.1),
        )
    }
}

/// Maps projected map units onto a pixel rectangle with equal aspect
///
/// Projected coordinates have their origin at the projection centre with y
/// pointing north; pixels have y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Area the map was fitted into
    pub bounds: PixelRect,
    /// Pixel position of the projected origin
    pub origin: Point,
    /// Pixels per projected unit
    pub scale: f64,
}

impl Viewport {
    /// Fits a map whose projected extent is `half_extent` (half width, half
    /// height) into `bounds`, centred and preserving aspect.
    pub fn fit(half_extent: Point, bounds: PixelRect) -> Self {
        let scale = (bounds.width / (2.0 * half_extent.x)).min(bounds.height / (2.0 * half_extent.y));
        Self {
            bounds,
            origin: bounds.center(),
            scale,
        }
    }

    /// Rectangle actually covered by the fitted map
    pub fn map_rect(&self, half_extent: Point) -> PixelRect {
        let w = 2.0 * half_extent.x * self.scale;
        let h = 2.0 * half_extent.y * self.scale;
        PixelRect::new(self.origin.x - w / 2.0, self.origin.y - h / 2.0, w, h)
    }

    /// Converts projected coordinates to pixels
    pub fn to_pixel(&self, projected: &Point) -> Point {
        Point::new(
            self.origin.x + projected.x * self.scale,
            self.origin.y - projected.y * self.scale,
        )
    }

    /// Converts pixels back to projected coordinates
    pub fn to_projected(&self, pixel: &Point) -> Point {
        Point::new(
            (pixel.x - self.origin.x) / self.scale,
            (self.origin.y - pixel.y) / self.scale,
        )
    }
}
