//! Static figure furniture: the citation title and the intensity colorbar

use crate::core::geo::Point;
use crate::layers::base::{FrameContext, Layer, LayerProperties, LayerType};
use crate::rendering::canvas::BLACK;
use crate::rendering::text::wrap;
use crate::rendering::{Canvas, Colormap, HAlign, Normalize, TextRenderer, VAlign};
use crate::Result;
use std::sync::Arc;

/// Font size of every label on the figure, in points
pub const LABEL_SIZE_PT: f64 = 10.0;

/// Citation wrapped above the map axes
pub struct TitleLayer {
    properties: LayerProperties,
    text: Arc<TextRenderer>,
    lines: Vec<String>,
}

impl TitleLayer {
    pub fn new(text: Arc<TextRenderer>, title: &str, wrap_width: usize) -> Self {
        Self {
            properties: LayerProperties::new("title", "Title", LayerType::Decoration)
                .with_z_index(30),
            text,
            lines: wrap(title, wrap_width),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Layer for TitleLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn render(&mut self, canvas: &mut Canvas, frame: &FrameContext<'_>) -> Result<()> {
        let map = frame.layout.map_rect();
        let gap = 6.0 * frame.layout.pixels_per_point;
        self.text.draw_block_above(
            canvas,
            &self.lines,
            LABEL_SIZE_PT,
            Point::new(map.center().x, map.y - gap),
            BLACK,
        );
        Ok(())
    }
}

/// Vertical colour ramp with whole-number ticks and an `Intensity` caption
pub struct ColorbarLayer {
    properties: LayerProperties,
    text: Arc<TextRenderer>,
    colormap: Colormap,
    norm: Normalize,
}

impl ColorbarLayer {
    pub fn new(text: Arc<TextRenderer>, colormap: Colormap, norm: Normalize) -> Self {
        Self {
            properties: LayerProperties::new("colorbar", "Colorbar", LayerType::Decoration)
                .with_z_index(30),
            text,
            colormap,
            norm,
        }
    }
}

fn tick_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

impl Layer for ColorbarLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn render(&mut self, canvas: &mut Canvas, frame: &FrameContext<'_>) -> Result<()> {
        let layout = frame.layout;
        let rect = layout.colorbar;
        let (x0, y0, x1, y1) = rect.pixel_bounds(canvas.dimensions());
        let rows = (y1 - y0).max(1) as f64;

        for y in y0..y1 {
            let t = 1.0 - ((y - y0) as f64 + 0.5) / rows;
            let color = self.colormap.sample(t);
            for x in x0..x1 {
                canvas.put_pixel(x, y, color);
            }
        }
        canvas.stroke_rect(&rect, BLACK);

        let tick_length = 3.5 * layout.pixels_per_point;
        let label_gap = 2.0 * layout.pixels_per_point;
        let span = self.norm.vmax - self.norm.vmin;
        for value in self.norm.ticks(10) {
            let fraction = if span > 0.0 { self.norm.apply(value) } else { 0.5 };
            let y = rect.bottom() - fraction * rect.height;
            canvas.draw_line(
                Point::new(rect.right(), y),
                Point::new(rect.right() + tick_length, y),
                BLACK,
            );
            self.text.draw(
                canvas,
                &tick_label(value),
                LABEL_SIZE_PT,
                Point::new(rect.right() + tick_length + label_gap, y),
                (HAlign::Left, VAlign::Center),
                BLACK,
            );
        }

        self.text.draw(
            canvas,
            "Intensity",
            LABEL_SIZE_PT,
            Point::new(rect.center().x, rect.bottom() + label_gap),
            (HAlign::Center, VAlign::Top),
            BLACK,
        );
        Ok(())
    }
}
