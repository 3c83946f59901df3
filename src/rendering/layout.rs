//! Figure geometry: where the map, the globe inset and the decorations sit.

use crate::core::config::AnimationConfig;
use crate::core::constants::*;
use crate::core::geo::Point;
use crate::core::viewport::{PixelRect, Viewport};
use crate::projection::{Orthographic, Projection, Robinson};

/// Pixel placement of every figure element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureLayout {
    pub width: u32,
    pub height: u32,
    pub pixels_per_point: f64,
    /// Subplot area before the map is fitted into it
    pub axes: PixelRect,
    /// Robinson world map
    pub map: Viewport,
    /// Inset box in the lower-left corner of the map
    pub inset: PixelRect,
    /// Orthographic globe inside the inset
    pub globe: Viewport,
    pub colorbar: PixelRect,
}

impl FigureLayout {
    pub fn new(config: &AnimationConfig) -> Self {
        let (width, height) = config.figure_pixels();
        let pixels_per_point = config.pixels_per_point();

        let (left, bottom, right, top) = SUBPLOT_MARGINS;
        let axes = PixelRect::from_figure_fractions(
            (width, height),
            left,
            bottom,
            right - left,
            top - bottom,
        );

        let robinson_extent = Robinson::default().half_extent();
        let map = Viewport::fit(robinson_extent, axes);
        let map_rect = map.map_rect(robinson_extent);

        // Inset anchored to the lower-left of the map with a small padding
        let pad = 5.0 * pixels_per_point;
        let inset_width = INSET_WIDTH_FRACTION * map_rect.width;
        let inset_height = (INSET_HEIGHT_INCHES * config.dpi).min(map_rect.height - 2.0 * pad);
        let inset = PixelRect::new(
            map_rect.x + pad,
            map_rect.bottom() - pad - inset_height,
            inset_width,
            inset_height.max(1.0),
        );
        let globe = Viewport::fit(Orthographic::equatorial(0.0).half_extent(), inset);

        let (cb_left, cb_bottom, cb_width, cb_height) = COLORBAR_RECT;
        let colorbar =
            PixelRect::from_figure_fractions((width, height), cb_left, cb_bottom, cb_width, cb_height);

        Self {
            width,
            height,
            pixels_per_point,
            axes,
            map,
            inset,
            globe,
            colorbar,
        }
    }

    /// Rectangle covered by the Robinson map
    pub fn map_rect(&self) -> PixelRect {
        self.map.map_rect(Robinson::default().half_extent())
    }

    /// Pixel anchor of the year label
    pub fn year_anchor(&self) -> Point {
        let (fx, fy) = YEAR_LABEL_ANCHOR;
        self.map_rect().fraction_to_pixel(fx, fy)
    }

    /// Pixel radius of a marker whose area is `size` points²
    pub fn marker_radius(&self, size: f64) -> f64 {
        if size.is_nan() || size <= 0.0 {
            return 0.0;
        }
        size.sqrt() * self.pixels_per_point / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_fits_figure() {
        let layout = FigureLayout::new(&AnimationConfig::default());
        assert_eq!((layout.width, layout.height), (1920, 1080));

        let map = layout.map_rect();
        assert!(map.x >= layout.axes.x - 1e-6);
        assert!(map.right() <= layout.axes.right() + 1e-6);
        assert!(map.y >= layout.axes.y - 1e-6);
        assert!(map.bottom() <= layout.axes.bottom() + 1e-6);

        // Robinson is about twice as wide as it is tall
        let ratio = map.width / map.height;
        assert!((ratio - 1.9716).abs() < 0.01, "ratio {}", ratio);
    }

    #[test]
    fn test_inset_sits_inside_map_lower_left() {
        let layout = FigureLayout::new(&AnimationConfig::default());
        let map = layout.map_rect();
        assert!(layout.inset.x > map.x);
        assert!(layout.inset.bottom() < map.bottom());
        assert!(layout.inset.center().x < map.center().x);
        assert!(layout.inset.center().y > map.center().y);

        let globe = layout.globe.map_rect(Point::new(1.0, 1.0));
        assert!(globe.width <= layout.inset.width + 1e-6);
        assert!(globe.height <= layout.inset.height + 1e-6);
    }

    #[test]
    fn test_colorbar_right_of_map() {
        let layout = FigureLayout::new(&AnimationConfig::default());
        assert!(layout.colorbar.x >= layout.map_rect().right() - 1e-6);
        assert!(layout.colorbar.right() < layout.width as f64);
    }

    #[test]
    fn test_marker_radius() {
        let layout = FigureLayout::new(&AnimationConfig::default());
        // 36 points² is a 6 point diameter, 10 pixels at 120 DPI
        assert!((layout.marker_radius(36.0) - 5.0).abs() < 1e-9);
        assert_eq!(layout.marker_radius(0.0), 0.0);
        assert_eq!(layout.marker_radius(-3.0), 0.0);
    }
}
