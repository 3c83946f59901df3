use crate::core::geo::Point;
use crate::rendering::canvas::Canvas;
use crate::{QuakeError, Result};
use image::Rgba;
use imageproc::drawing::{draw_text_mut, text_size};
use rusttype::{Font, Scale};

/// Horizontal placement of text relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical placement of text relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Draws single-line labels with the bundled Noto Sans face.
///
/// Sizes are given in typographic points and converted with the figure DPI.
pub struct TextRenderer {
    font: Font<'static>,
    pixels_per_point: f64,
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer")
            .field("pixels_per_point", &self.pixels_per_point)
            .finish()
    }
}

impl TextRenderer {
    pub fn new(pixels_per_point: f64) -> Result<Self> {
        let font = Font::try_from_bytes(notosans::REGULAR_TTF)
            .ok_or_else(|| QuakeError::Render("bundled font could not be parsed".into()))?;
        Ok(Self {
            font,
            pixels_per_point,
        })
    }

    fn scale(&self, size_pt: f64) -> Scale {
        Scale::uniform((size_pt * self.pixels_per_point).max(1.0) as f32)
    }

    /// Distance between baselines of consecutive lines, in pixels
    pub fn line_height(&self, size_pt: f64) -> f64 {
        let metrics = self.font.v_metrics(self.scale(size_pt));
        (metrics.ascent - metrics.descent + metrics.line_gap) as f64
    }

    /// Rendered width and line height in pixels
    pub fn measure(&self, text: &str, size_pt: f64) -> (f64, f64) {
        let scale = self.scale(size_pt);
        let (width, _) = text_size(scale, &self.font, text);
        let metrics = self.font.v_metrics(scale);
        (width.max(0) as f64, (metrics.ascent - metrics.descent) as f64)
    }

    pub fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        size_pt: f64,
        anchor: Point,
        align: (HAlign, VAlign),
        color: Rgba<u8>,
    ) {
        if text.is_empty() {
            return;
        }
        let (width, height) = self.measure(text, size_pt);
        let x = match align.0 {
            HAlign::Left => anchor.x,
            HAlign::Center => anchor.x - width / 2.0,
            HAlign::Right => anchor.x - width,
        };
        let y = match align.1 {
            VAlign::Top => anchor.y,
            VAlign::Center => anchor.y - height / 2.0,
            VAlign::Bottom => anchor.y - height,
        };

        draw_text_mut(
            canvas.image_mut(),
            color,
            x.round() as i32,
            y.round() as i32,
            self.scale(size_pt),
            &self.font,
            text,
        );
    }

    /// Draws several lines centred on `anchor.x`, the last one ending at `anchor.y`
    pub fn draw_block_above(
        &self,
        canvas: &mut Canvas,
        lines: &[String],
        size_pt: f64,
        anchor: Point,
        color: Rgba<u8>,
    ) {
        let line_height = self.line_height(size_pt);
        let top = anchor.y - line_height * lines.len() as f64;
        for (i, line) in lines.iter().enumerate() {
            let y = top + line_height * i as f64;
            self.draw(
                canvas,
                line,
                size_pt,
                Point::new(anchor.x, y),
                (HAlign::Center, VAlign::Top),
                color,
            );
        }
    }
}

/// Greedy word wrap at `width` characters; longer words get their own line
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
