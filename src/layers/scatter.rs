use crate::core::geo::Point;
use crate::data::catalog::{marker_size, EventCatalog};
use crate::layers::base::{FrameContext, Layer, LayerProperties, LayerType};
use crate::projection::{Projection, Robinson};
use crate::rendering::canvas::with_alpha;
use crate::rendering::{Canvas, Colormap, FigureLayout, Normalize};
use crate::Result;
use image::Rgba;
use std::sync::Arc;

/// Marker area and colour of every catalogued event, shared by map and globe
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSet {
    /// Marker area in points², before any per-layer factor
    pub sizes: Vec<f64>,
    pub colors: Vec<Rgba<u8>>,
    pub norm: Normalize,
}

impl MarkerSet {
    pub fn new(catalog: &EventCatalog, colormap: &Colormap, scale: f64, alpha: f32) -> Self {
        let (vmin, vmax) = catalog.intensity_range().unwrap_or((0.0, 1.0));
        let norm = Normalize::new(vmin, vmax);
        let sizes = catalog
            .events()
            .iter()
            .map(|event| marker_size(event.intensity, scale))
            .collect();
        let colors = catalog
            .events()
            .iter()
            .map(|event| with_alpha(colormap.sample(norm.apply(event.intensity)), alpha))
            .collect();
        Self {
            sizes,
            colors,
            norm,
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Events accumulating on the world map
///
/// Draws only the events revealed since the previous call, so it must render
/// onto the same persistent canvas every frame. [`Layer::reset`] starts over.
pub struct ScatterLayer {
    properties: LayerProperties,
    markers: Arc<MarkerSet>,
    size_factor: f64,
    /// Pixel centres on the map, `None` for unprojectable locations
    positions: Vec<Option<Point>>,
    drawn: usize,
}

impl ScatterLayer {
    pub fn new(
        catalog: &EventCatalog,
        markers: Arc<MarkerSet>,
        layout: &FigureLayout,
        size_factor: f64,
    ) -> Self {
        let projection = Robinson::default();
        let positions = catalog
            .events()
            .iter()
            .map(|event| {
                projection
                    .project(&event.location)
                    .map(|projected| layout.map.to_pixel(&projected))
            })
            .collect();

        Self {
            properties: LayerProperties::new("scatter", "Revealed events", LayerType::Scatter)
                .with_z_index(10),
            markers,
            size_factor,
            positions,
            drawn: 0,
        }
    }

    /// Events already on the canvas
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl Layer for ScatterLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn render(&mut self, canvas: &mut Canvas, frame: &FrameContext<'_>) -> Result<()> {
        let target = frame.revealed.min(self.positions.len());
        for i in self.drawn..target {
            if let Some(center) = self.positions[i] {
                let radius = frame.layout.marker_radius(self.markers.sizes[i] * self.size_factor);
                canvas.fill_circle(center, radius, self.markers.colors[i]);
            }
        }
        if target > self.drawn {
            log::trace!("Revealed events {}..{}", self.drawn, target);
            self.drawn = target;
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.drawn = 0;
    }
}
