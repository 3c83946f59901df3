use crate::data::catalog::EventCatalog;
use crate::rendering::{Canvas, FigureLayout};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Basemap,
    Decoration,
    Scatter,
    Globe,
    Annotation,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Basemap => write!(f, "basemap"),
            LayerType::Decoration => write!(f, "decoration"),
            LayerType::Scatter => write!(f, "scatter"),
            LayerType::Globe => write!(f, "globe"),
            LayerType::Annotation => write!(f, "annotation"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub z_index: i32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: &str, name: &str, layer_type: LayerType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            layer_type,
            z_index: 0,
            visible: true,
        }
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

/// Per-frame state handed to every layer
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub index: usize,
    /// Events shown on the main map
    pub revealed: usize,
    /// Centre longitude of the globe inset
    pub globe_longitude: f64,
    pub catalog: &'a EventCatalog,
    pub layout: &'a FigureLayout,
}

impl<'a> FrameContext<'a> {
    /// Context for layers drawn once, before any frame
    pub fn initial(catalog: &'a EventCatalog, layout: &'a FigureLayout) -> Self {
        Self {
            index: 0,
            revealed: 0,
            globe_longitude: 0.0,
            catalog,
            layout,
        }
    }
}

pub trait Layer {
    fn properties(&self) -> &LayerProperties;

    fn properties_mut(&mut self) -> &mut LayerProperties;

    fn id(&self) -> &str {
        &self.properties().id
    }

    fn name(&self) -> &str {
        &self.properties().name
    }

    fn layer_type(&self) -> LayerType {
        self.properties().layer_type
    }

    fn z_index(&self) -> i32 {
        self.properties().z_index
    }

    fn is_visible(&self) -> bool {
        self.properties().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.properties_mut().visible = visible;
    }

    fn render(&mut self, canvas: &mut Canvas, frame: &FrameContext<'_>) -> Result<()>;

    /// Forgets incremental drawing state so the next render starts over
    fn reset(&mut self) {}
}

/// Layers kept in z-order, lowest first
#[derive(Default)]
pub struct LayerStack {
    layers: Vec<Box<dyn Layer>>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts after every layer with the same or lower z-index
    pub fn add_layer(&mut self, layer: Box<dyn Layer>) {
        let z_index = layer.z_index();
        let position = self
            .layers
            .iter()
            .position(|l| l.z_index() > z_index)
            .unwrap_or(self.layers.len());
        self.layers.insert(position, layer);
    }

    pub fn remove_layer(&mut self, id: &str) -> Option<Box<dyn Layer>> {
        let position = self.layers.iter().position(|l| l.id() == id)?;
        Some(self.layers.remove(position))
    }

    pub fn get_layer(&self, id: &str) -> Option<&dyn Layer> {
        self.layers.iter().find(|l| l.id() == id).map(|l| l.as_ref())
    }

    pub fn ids(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn render(&mut self, canvas: &mut Canvas, frame: &FrameContext<'_>) -> Result<()> {
        for layer in self.layers.iter_mut().filter(|l| l.is_visible()) {
            log::trace!("Rendering {} layer '{}'", layer.layer_type(), layer.id());
            layer.render(canvas, frame)?;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        for layer in &mut self.layers {
            layer.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AnimationConfig;
    use image::Rgba;

    struct Fill {
        properties: LayerProperties,
        color: Rgba<u8>,
    }

    impl Layer for Fill {
        fn properties(&self) -> &LayerProperties {
            &self.properties
        }

        fn properties_mut(&mut self) -> &mut LayerProperties {
            &mut self.properties
        }

        fn render(&mut self, canvas: &mut Canvas, _frame: &FrameContext<'_>) -> Result<()> {
            canvas.put_pixel(0, 0, self.color);
            Ok(())
        }
    }

    fn fill(id: &str, z_index: i32, value: u8) -> Box<dyn Layer> {
        Box::new(Fill {
            properties: LayerProperties::new(id, id, LayerType::Decoration).with_z_index(z_index),
            color: Rgba([value, value, value, 255]),
        })
    }

    #[test]
    fn test_layer_properties() {
        let props = LayerProperties::new("globe", "Globe inset", LayerType::Globe);
        assert_eq!(props.id, "globe");
        assert_eq!(props.name, "Globe inset");
        assert_eq!(props.z_index, 0);
        assert!(props.visible);
        assert_eq!(props.layer_type.to_string(), "globe");
    }

    #[test]
    fn test_stack_orders_by_z_index() {
        let mut stack = LayerStack::new();
        stack.add_layer(fill("top", 10, 30));
        stack.add_layer(fill("bottom", 0, 10));
        stack.add_layer(fill("middle", 5, 20));
        assert_eq!(stack.ids(), vec!["bottom", "middle", "top"]);

        let config = AnimationConfig::default();
        let layout = FigureLayout::new(&config);
        let catalog = EventCatalog::default();
        let mut canvas = Canvas::new(2, 2, Rgba([0, 0, 0, 255]));
        stack
            .render(&mut canvas, &FrameContext::initial(&catalog, &layout))
            .unwrap();
        assert_eq!(canvas.image().get_pixel(0, 0)[0], 30);
    }

    #[test]
    fn test_hidden_layers_are_skipped() {
        let mut stack = LayerStack::new();
        stack.add_layer(fill("a", 0, 10));
        stack.add_layer(fill("b", 1, 20));
        let mut b = stack.remove_layer("b").unwrap();
        b.set_visible(false);
        stack.add_layer(b);
        assert_eq!(stack.len(), 2);
        assert!(!stack.get_layer("b").unwrap().is_visible());

        let config = AnimationConfig::default();
        let layout = FigureLayout::new(&config);
        let catalog = EventCatalog::default();
        let mut canvas = Canvas::new(2, 2, Rgba([0, 0, 0, 255]));
        stack
            .render(&mut canvas, &FrameContext::initial(&catalog, &layout))
            .unwrap();
        assert_eq!(canvas.image().get_pixel(0, 0)[0], 10);
    }
}
