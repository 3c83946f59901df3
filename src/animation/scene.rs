//! Frame composition
//!
//! The figure is split into three tiers:
//!
//! * a static background (basemap, title, colorbar) drawn once;
//! * a persistent map canvas that accumulates revealed events;
//! * per-frame overlays (globe inset, year label) drawn on a copy of it.

use crate::animation::schedule::FrameSchedule;
use crate::core::config::AnimationConfig;
use crate::data::catalog::EventCatalog;
use crate::layers::{
    BasemapLayer, ColorbarLayer, FrameContext, GlobeLayer, Layer, LayerStack, MarkerSet,
    ScatterLayer, TitleLayer, YearLabelLayer,
};
use crate::rendering::canvas::WHITE;
use crate::rendering::{Canvas, Colormap, FigureLayout, TextRenderer};
use crate::spatial::LandMask;
use crate::{constants, QuakeError, Result};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What a rendered frame shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInfo {
    pub index: usize,
    /// Events on the main map
    pub revealed: usize,
    /// Year on the label after this frame
    pub year: Option<i64>,
    pub globe_longitude: f64,
}

pub struct Scene {
    catalog: EventCatalog,
    schedule: FrameSchedule,
    layout: FigureLayout,
    background: Canvas,
    accumulated: Canvas,
    scatter: ScatterLayer,
    year_label: YearLabelLayer,
    overlays: LayerStack,
    last_index: Option<usize>,
}

impl Scene {
    pub fn new(catalog: EventCatalog, schedule: FrameSchedule, config: &AnimationConfig) -> Result<Self> {
        config.validate()?;
        if schedule.events != catalog.len() {
            return Err(QuakeError::InvalidSchedule(format!(
                "schedule covers {} events but the catalog holds {}",
                schedule.events,
                catalog.len()
            )));
        }

        let layout = FigureLayout::new(config);
        let text = Arc::new(TextRenderer::new(layout.pixels_per_point)?);
        let mask = Arc::new(LandMask::new(config.land_cells_per_degree));
        let colormap = Colormap::or_rd();
        let markers = Arc::new(MarkerSet::new(
            &catalog,
            &colormap,
            config.marker_scale,
            config.marker_alpha,
        ));

        let mut statics = LayerStack::new();
        statics.add_layer(Box::new(BasemapLayer::new(mask.clone())));
        statics.add_layer(Box::new(TitleLayer::new(
            text.clone(),
            constants::CITATION,
            config.title_wrap,
        )));
        statics.add_layer(Box::new(ColorbarLayer::new(
            text.clone(),
            colormap,
            markers.norm,
        )));

        let mut background = Canvas::new(layout.width, layout.height, WHITE);
        statics.render(&mut background, &FrameContext::initial(&catalog, &layout))?;
        log::info!(
            "Composed {}x{} background with {} static layers",
            layout.width,
            layout.height,
            statics.len()
        );

        let scatter = ScatterLayer::new(&catalog, markers.clone(), &layout, config.main_marker_factor);
        let mut overlays = LayerStack::new();
        overlays.add_layer(Box::new(GlobeLayer::new(mask, markers)));

        Ok(Self {
            accumulated: background.clone(),
            background,
            catalog,
            schedule,
            layout,
            scatter,
            year_label: YearLabelLayer::new(text),
            overlays,
            last_index: None,
        })
    }

    pub fn schedule(&self) -> &FrameSchedule {
        &self.schedule
    }

    pub fn layout(&self) -> &FigureLayout {
        &self.layout
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Frame size in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        (self.layout.width, self.layout.height)
    }

    /// Renders frame `index` into `frame`, resizing it if needed.
    ///
    /// Frames are cheapest in increasing order; going back redraws the
    /// accumulated map from the background.
    pub fn update(&mut self, index: usize, frame: &mut RgbaImage) -> Result<FrameInfo> {
        if !self.schedule.contains(index) {
            return Err(QuakeError::InvalidSchedule(format!(
                "frame {} is outside the {} frame schedule",
                index, self.schedule.frames
            )));
        }

        if self.last_index.is_some_and(|last| index < last) {
            log::debug!("Frame {} precedes the last rendered frame, redrawing map", index);
            self.accumulated.copy_from(self.background.image());
            self.scatter.reset();
            self.year_label.reset();
        }

        let context = FrameContext {
            index,
            revealed: self.schedule.revealed_count(index),
            globe_longitude: self.schedule.rotation_longitude(index),
            catalog: &self.catalog,
            layout: &self.layout,
        };

        self.scatter.render(&mut self.accumulated, &context)?;

        let mut canvas = Canvas::from_image(std::mem::take(frame));
        canvas.copy_from(self.accumulated.image());
        self.overlays.render(&mut canvas, &context)?;
        self.year_label.render(&mut canvas, &context)?;
        *frame = canvas.into_image();

        self.last_index = Some(index);
        log::debug!(
            "Frame {}/{}: {} events, globe at {:.1}°",
            index + 1,
            self.schedule.frames,
            context.revealed,
            context.globe_longitude
        );

        Ok(FrameInfo {
            index,
            revealed: context.revealed,
            year: self.year_label.year(),
            globe_longitude: context.globe_longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RenderProfile;
    use crate::core::geo::LatLng;
    use crate::data::catalog::QuakeEvent;

    fn small_scene() -> Scene {
        let catalog = EventCatalog::from_unfiltered(vec![
            QuakeEvent::new(Some(1755.0), 8.7, LatLng::new(36.0, -11.0)),
            QuakeEvent::new(None, 6.1, LatLng::new(14.0, 121.0)),
            QuakeEvent::new(Some(2004.0), 9.1, LatLng::new(3.3, 95.9)),
        ]);
        let mut config = AnimationConfig::default().with_profile(RenderProfile::Draft);
        config.dpi = 30.0;
        let schedule = FrameSchedule::new(catalog.len(), config.duration_secs, config.target_fps).unwrap();
        Scene::new(catalog, schedule, &config).unwrap()
    }

    #[test]
    fn test_update_reports_frame_state() {
        let mut scene = small_scene();
        let mut frame = RgbaImage::new(0, 0);

        let first = scene.update(0, &mut frame).unwrap();
        assert_eq!(frame.dimensions(), scene.dimensions());
        assert_eq!(first.revealed, 1);
        assert_eq!(first.year, Some(1755));
        assert_eq!(first.globe_longitude, 720.0);

        let second = scene.update(1, &mut frame).unwrap();
        assert_eq!(second.year, Some(1755));

        let last = scene.update(2, &mut frame).unwrap();
        assert_eq!(last.revealed, 3);
        assert_eq!(last.year, Some(2004));
        assert!(last.globe_longitude < second.globe_longitude);
    }

    #[test]
    fn test_out_of_range_frame() {
        let mut scene = small_scene();
        let mut frame = RgbaImage::new(0, 0);
        assert!(matches!(
            scene.update(3, &mut frame),
            Err(QuakeError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_rewinding_matches_fresh_render() {
        let mut fresh = small_scene();
        let mut expected = RgbaImage::new(0, 0);
        fresh.update(0, &mut expected).unwrap();

        let mut scene = small_scene();
        let mut frame = RgbaImage::new(0, 0);
        scene.update(0, &mut frame).unwrap();
        scene.update(2, &mut frame).unwrap();
        let info = scene.update(0, &mut frame).unwrap();
        assert_eq!(info.revealed, 1);
        assert!(frame == expected);
    }

    #[test]
    fn test_mismatched_schedule_rejected() {
        let catalog = EventCatalog::from_unfiltered(vec![QuakeEvent::new(
            Some(1900.0),
            7.0,
            LatLng::new(0.0, 0.0),
        )]);
        let config = AnimationConfig::default().with_profile(RenderProfile::Draft);
        let schedule = FrameSchedule::new(5, 30.0, 20.0).unwrap();
        assert!(Scene::new(catalog, schedule, &config).is_err());
    }
}
