//! Shaded world background for the Robinson map

use crate::core::geo::{LatLng, Point};
use crate::core::viewport::Viewport;
use crate::layers::base::{FrameContext, Layer, LayerProperties, LayerType};
use crate::projection::{Projection, Robinson};
use crate::rendering::Canvas;
use crate::spatial::{Coastline, LandMask, COASTLINES};
use crate::Result;
use image::Rgba;
use std::sync::Arc;

pub const OCEAN: Rgba<u8> = Rgba([12, 34, 86, 255]);
pub const LAND: Rgba<u8> = Rgba([74, 96, 52, 255]);
pub const ICE: Rgba<u8> = Rgba([226, 232, 238, 255]);
pub const COASTLINE: Rgba<u8> = Rgba([40, 40, 40, 255]);
pub const BOUNDARY: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Surface colour of a location: ocean, vegetated land or polar ice
pub fn surface_color(mask: &LandMask, location: &LatLng) -> Rgba<u8> {
    if !mask.is_land(location) {
        OCEAN
    } else if location.lat.abs() > 66.0 {
        ICE
    } else {
        LAND
    }
}

/// Shades every pixel inside the projected world and returns how many were painted
pub fn shade_surface<P: Projection>(
    canvas: &mut Canvas,
    projection: &P,
    viewport: &Viewport,
    mask: &LandMask,
) -> usize {
    let rect = viewport.map_rect(projection.half_extent());
    let (x0, y0, x1, y1) = rect.pixel_bounds(canvas.dimensions());
    let mut painted = 0;
    for y in y0..y1 {
        for x in x0..x1 {
            let pixel = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            if let Some(location) = projection.unproject(&viewport.to_projected(&pixel)) {
                canvas.put_pixel(x, y, surface_color(mask, &location));
                painted += 1;
            }
        }
    }
    painted
}

/// Draws ring edges whose endpoints are both visible, skipping antimeridian jumps
pub fn draw_coastlines<P: Projection>(
    canvas: &mut Canvas,
    projection: &P,
    viewport: &Viewport,
    coastlines: &[Coastline],
    color: Rgba<u8>,
) {
    for coastline in coastlines {
        for edge in coastline.ring.windows(2) {
            let (lat1, lng1) = edge[0];
            let (lat2, lng2) = edge[1];
            if (lng2 - lng1).abs() > 180.0 {
                continue;
            }
            let from = projection.project(&LatLng::new(lat1, lng1));
            let to = projection.project(&LatLng::new(lat2, lng2));
            if let (Some(from), Some(to)) = (from, to) {
                canvas.draw_line(viewport.to_pixel(&from), viewport.to_pixel(&to), color);
            }
        }
    }
}

/// Robinson map background: land/ocean shading, coastlines and map outline
pub struct BasemapLayer {
    properties: LayerProperties,
    projection: Robinson,
    mask: Arc<LandMask>,
}

impl BasemapLayer {
    pub fn new(mask: Arc<LandMask>) -> Self {
        Self {
            properties: LayerProperties::new("basemap", "World map", LayerType::Basemap),
            projection: Robinson::default(),
            mask,
        }
    }

    fn draw_outline(&self, canvas: &mut Canvas, viewport: &Viewport) {
        let mut outline = Vec::new();
        // Eastern edge north to south, western edge south to north
        for step in 0..=180 {
            outline.push(LatLng::new(90.0 - step as f64, 180.0));
        }
        for step in 0..=180 {
            outline.push(LatLng::new(-90.0 + step as f64, -180.0));
        }
        outline.push(LatLng::new(90.0, 180.0));

        let pixels: Vec<Point> = outline
            .iter()
            .filter_map(|location| self.projection.project(location))
            .map(|projected| viewport.to_pixel(&projected))
            .collect();
        for segment in pixels.windows(2) {
            canvas.draw_line(segment[0], segment[1], BOUNDARY);
        }
    }
}

impl Layer for BasemapLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn render(&mut self, canvas: &mut Canvas, frame: &FrameContext<'_>) -> Result<()> {
        let viewport = frame.layout.map;
        let painted = shade_surface(canvas, &self.projection, &viewport, &self.mask);
        draw_coastlines(canvas, &self.projection, &viewport, COASTLINES, COASTLINE);
        self.draw_outline(canvas, &viewport);
        log::debug!("Basemap shaded {} pixels", painted);
        Ok(())
    }
}
