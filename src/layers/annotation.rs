use crate::layers::base::{FrameContext, Layer, LayerProperties, LayerType};
use crate::layers::decoration::LABEL_SIZE_PT;
use crate::rendering::canvas::BLACK;
use crate::rendering::{Canvas, HAlign, TextRenderer, VAlign};
use crate::Result;
use std::sync::Arc;

/// `Year: N` label for the most recently revealed event
///
/// Events without a year leave the previous label in place.
pub struct YearLabelLayer {
    properties: LayerProperties,
    text: Arc<TextRenderer>,
    current: Option<i64>,
}

impl YearLabelLayer {
    pub fn new(text: Arc<TextRenderer>) -> Self {
        Self {
            properties: LayerProperties::new("year", "Year label", LayerType::Annotation)
                .with_z_index(40),
            text,
            current: None,
        }
    }

    /// Year currently shown
    pub fn year(&self) -> Option<i64> {
        self.current
    }

    pub fn label(&self) -> String {
        self.current
            .map(|year| format!("Year: {}", year))
            .unwrap_or_default()
    }
}

impl Layer for YearLabelLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn render(&mut self, canvas: &mut Canvas, frame: &FrameContext<'_>) -> Result<()> {
        let latest = frame
            .revealed
            .checked_sub(1)
            .and_then(|index| frame.catalog.get(index))
            .and_then(|event| event.year_label());
        if latest.is_some() {
            self.current = latest;
        }

        self.text.draw(
            canvas,
            &self.label(),
            LABEL_SIZE_PT,
            frame.layout.year_anchor(),
            (HAlign::Left, VAlign::Bottom),
            BLACK,
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.current = None;
    }
}
