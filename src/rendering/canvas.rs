use crate::core::geo::Point;
use crate::core::viewport::PixelRect;
use image::{Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Owned RGBA drawing surface
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Replaces the contents with `source`, reusing the allocation when sizes match
    pub fn copy_from(&mut self, source: &RgbaImage) {
        copy_image(source, &mut self.image);
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    pub fn fill_rect(&mut self, rect: &PixelRect, color: Rgba<u8>) {
        let (x0, y0, x1, y1) = rect.pixel_bounds(self.dimensions());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    pub fn stroke_rect(&mut self, rect: &PixelRect, color: Rgba<u8>) {
        let width = rect.width.round().max(1.0) as u32;
        let height = rect.height.round().max(1.0) as u32;
        let outline = Rect::at(rect.x.round() as i32, rect.y.round() as i32).of_size(width, height);
        draw_hollow_rect_mut(&mut self.image, outline, color);
    }

    pub fn draw_line(&mut self, from: Point, to: Point, color: Rgba<u8>) {
        draw_line_segment_mut(
            &mut self.image,
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            color,
        );
    }

    /// Alpha-blended filled disc; radii below half a pixel still mark one pixel
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba<u8>) {
        if radius.is_nan() || radius <= 0.0 || !center.x.is_finite() || !center.y.is_finite() {
            return;
        }

        let (width, height) = self.dimensions();
        let r2 = radius.max(0.5).powi(2);
        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = ((center.x + radius).ceil().max(0.0) as u32).min(width);
        let y1 = ((center.y + radius).ceil().max(0.0) as u32).min(height);

        let mut marked = false;
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.image.get_pixel_mut(x, y).blend(&color);
                    marked = true;
                }
            }
        }

        if !marked {
            let (x, y) = (center.x.floor(), center.y.floor());
            if x >= 0.0 && y >= 0.0 && (x as u32) < width && (y as u32) < height {
                self.image.get_pixel_mut(x as u32, y as u32).blend(&color);
            }
        }
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }
}

/// Copies `source` into `target`, reallocating only on a size change
pub fn copy_image(source: &RgbaImage, target: &mut RgbaImage) {
    if target.dimensions() == source.dimensions() {
        target.copy_from_slice(source.as_raw());
    } else {
        *target = source.clone();
    }
}

/// Same colour with a new alpha in [0, 1]
pub fn with_alpha(color: Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let Rgba([r, g, b, _]) = color;
    Rgba([r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_blends_with_background() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        canvas.fill_circle(Point::new(10.0, 10.0), 4.0, with_alpha(Rgba([255, 0, 0, 255]), 0.5));

        let center = canvas.image().get_pixel(10, 10);
        assert_eq!(center[0], 255);
        assert!(center[1] > 100 && center[1] < 160, "got {:?}", center);
        assert_eq!(*canvas.image().get_pixel(0, 0), WHITE);
    }

    #[test]
    fn test_non_positive_radius_draws_nothing() {
        let mut canvas = Canvas::new(8, 8, WHITE);
        canvas.fill_circle(Point::new(4.0, 4.0), 0.0, BLACK);
        canvas.fill_circle(Point::new(4.0, 4.0), -2.0, BLACK);
        canvas.fill_circle(Point::new(4.0, 4.0), f64::NAN, BLACK);
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_tiny_circle_marks_a_pixel() {
        let mut canvas = Canvas::new(8, 8, WHITE);
        canvas.fill_circle(Point::new(3.2, 5.7), 0.1, BLACK);
        assert_eq!(*canvas.image().get_pixel(3, 5), BLACK);
    }

    #[test]
    fn test_circle_clipped_at_edges() {
        let mut canvas = Canvas::new(8, 8, WHITE);
        canvas.fill_circle(Point::new(-1.0, -1.0), 3.0, BLACK);
        canvas.fill_circle(Point::new(50.0, 50.0), 3.0, BLACK);
        assert_eq!(*canvas.image().get_pixel(0, 0), BLACK);
    }

    #[test]
    fn test_copy_from_reuses_buffer() {
        let source = Canvas::new(4, 4, BLACK);
        let mut target = Canvas::new(4, 4, WHITE);
        target.copy_from(source.image());
        assert!(target.image().pixels().all(|p| *p == BLACK));

        let mut resized = Canvas::new(2, 2, WHITE);
        resized.copy_from(source.image());
        assert_eq!(resized.dimensions(), (4, 4));
    }
}
