use crate::core::geo::Point;
use crate::layers::base::{FrameContext, Layer, LayerProperties, LayerType};
use crate::layers::basemap::{draw_coastlines, shade_surface, BOUNDARY, COASTLINE};
use crate::layers::scatter::MarkerSet;
use crate::projection::{Orthographic, Projection};
use crate::rendering::canvas::WHITE;
use crate::rendering::Canvas;
use crate::spatial::{LandMask, COASTLINES};
use crate::Result;
use std::sync::Arc;

/// Rotating orthographic globe in the lower-left inset
///
/// Redrawn from scratch every frame with the complete event set.
pub struct GlobeLayer {
    properties: LayerProperties,
    mask: Arc<LandMask>,
    markers: Arc<MarkerSet>,
}

impl GlobeLayer {
    pub fn new(mask: Arc<LandMask>, markers: Arc<MarkerSet>) -> Self {
        Self {
            properties: LayerProperties::new("globe", "Globe inset", LayerType::Globe)
                .with_z_index(20),
            mask,
            markers,
        }
    }

    fn draw_rim(canvas: &mut Canvas, center: Point, radius: f64) {
        let segments = 180;
        let at = |k: usize| {
            let angle = k as f64 / segments as f64 * std::f64::consts::TAU;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        };
        for k in 0..segments {
            canvas.draw_line(at(k), at(k + 1), BOUNDARY);
        }
    }
}

impl Layer for GlobeLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn render(&mut self, canvas: &mut Canvas, frame: &FrameContext<'_>) -> Result<()> {
        let layout = frame.layout;
        let viewport = layout.globe;
        let projection = Orthographic::equatorial(frame.globe_longitude);

        canvas.fill_rect(&layout.inset, WHITE);
        shade_surface(canvas, &projection, &viewport, &self.mask);
        draw_coastlines(canvas, &projection, &viewport, COASTLINES, COASTLINE);

        for (i, event) in frame.catalog.events().iter().enumerate().take(self.markers.len()) {
            if let Some(projected) = projection.project(&event.location) {
                let radius = layout.marker_radius(self.markers.sizes[i]);
                canvas.fill_circle(viewport.to_pixel(&projected), radius, self.markers.colors[i]);
            }
        }

        Self::draw_rim(canvas, viewport.origin, viewport.scale);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AnimationConfig, RenderProfile};
    use crate::core::geo::LatLng;
    use crate::data::catalog::{EventCatalog, QuakeEvent};
    use crate::layers::basemap::OCEAN;
    use crate::rendering::{Colormap, FigureLayout};
    use image::Rgba;

    fn render_at(longitude: f64, catalog: &EventCatalog) -> (Canvas, FigureLayout) {
        let config = AnimationConfig::default().with_profile(RenderProfile::Draft);
        let layout = FigureLayout::new(&config);
        let markers = Arc::new(MarkerSet::new(catalog, &Colormap::or_rd(), 5.0, 1.0));
        let mut layer = GlobeLayer::new(Arc::new(LandMask::new(1.0)), markers);

        let mut canvas = Canvas::new(layout.width, layout.height, Rgba([0, 0, 0, 255]));
        let mut frame = FrameContext::initial(catalog, &layout);
        frame.globe_longitude = longitude;
        layer.render(&mut canvas, &frame).unwrap();
        (canvas, layout)
    }

    #[test]
    fn test_inset_cleared_and_disc_shaded() {
        let catalog = EventCatalog::default();
        // Centred on the mid Pacific
        let (canvas, layout) = render_at(-150.0, &catalog);

        let center = layout.globe.origin;
        assert_eq!(*canvas.image().get_pixel(center.x as u32, center.y as u32), OCEAN);

        // Inset corner lies outside the disc and is cleared to white
        let corner = (layout.inset.x + 2.0, layout.inset.y + 2.0);
        let globe = layout.globe.map_rect(Point::new(1.0, 1.0));
        if globe.x > corner.0 + 2.0 {
            assert_eq!(*canvas.image().get_pixel(corner.0 as u32, corner.1 as u32), WHITE);
        }
        // Outside the inset nothing is touched
        assert_eq!(*canvas.image().get_pixel(1, 1), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_only_front_hemisphere_events_drawn() {
        let catalog = EventCatalog::from_unfiltered(vec![QuakeEvent::new(
            Some(2011.0),
            9.0,
            LatLng::new(0.0, 0.0),
        )]);
        // A single intensity normalizes to the bottom of the ramp
        let marker = Colormap::or_rd().sample(0.0);

        let (front, layout) = render_at(0.0, &catalog);
        let c = layout.globe.origin;
        assert_eq!(*front.image().get_pixel(c.x as u32, c.y as u32), marker);

        let (back, _) = render_at(180.0, &catalog);
        assert_ne!(*back.image().get_pixel(c.x as u32, c.y as u32), marker);
    }
}
