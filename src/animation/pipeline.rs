//! End-to-end rendering: dataset in, encoded animation out

use crate::animation::func_animation::FuncAnimation;
use crate::animation::scene::Scene;
use crate::animation::schedule::FrameSchedule;
use crate::core::config::AnimationConfig;
use crate::data::catalog::EventCatalog;
use crate::data::loader::load_catalog;
use crate::encoding::{open_sink, EncoderSettings, FrameSink};
use crate::Result;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Outcome of a finished render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSummary {
    /// Events drawn
    pub events: usize,
    /// Data rows in the source, including those without intensity
    pub source_rows: usize,
    pub frames: usize,
    pub fps: f64,
    /// Events revealed on the last frame
    pub final_revealed: usize,
}

/// Frame schedule for a catalog under the configured timing and rotation
pub fn plan(events: usize, config: &AnimationConfig) -> Result<FrameSchedule> {
    Ok(FrameSchedule::new(events, config.duration_secs, config.target_fps)?
        .with_rotation(config.globe_start_longitude, config.globe_turns))
}

/// Renders every frame of `catalog` into `sink`
pub fn render_catalog(
    catalog: EventCatalog,
    schedule: FrameSchedule,
    config: &AnimationConfig,
    sink: &mut dyn FrameSink,
) -> Result<RenderSummary> {
    let events = catalog.len();
    let source_rows = catalog.source_rows();
    let mut scene = Scene::new(catalog, schedule, config)?;
    let (width, height) = scene.dimensions();

    let mut final_revealed = 0;
    let frames = FuncAnimation::new(schedule.frames, width, height, |index, frame: &mut RgbaImage| {
        final_revealed = scene.update(index, frame)?.revealed;
        Ok(())
    })
    .save(sink)?;

    Ok(RenderSummary {
        events,
        source_rows,
        frames,
        fps: schedule.fps,
        final_revealed,
    })
}

/// Loads the configured dataset and writes the configured output
pub fn run(config: &AnimationConfig) -> Result<RenderSummary> {
    config.validate()?;
    let catalog = load_catalog(&config.input)?;
    let schedule = plan(catalog.len(), config)?;

    let (width, height) = config.figure_pixels();
    let settings = EncoderSettings::new(width, height, schedule.fps, config.codec.clone());
    let mut sink = open_sink(&config.output, settings)?;

    let summary = render_catalog(catalog, schedule, config, sink.as_mut())?;
    log::info!(
        "Animated {} of {} events in {} frames ({:.3} fps) to {}",
        summary.events,
        summary.source_rows,
        summary.frames,
        summary.fps,
        config.output.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RenderProfile;
    use crate::core::geo::LatLng;
    use crate::data::catalog::QuakeEvent;
    use crate::encoding::MemorySink;
    use crate::QuakeError;

    #[test]
    fn test_plan_applies_rotation() {
        let mut config = AnimationConfig::default();
        config.globe_start_longitude = 0.0;
        config.globe_turns = 1.0;
        let schedule = plan(10, &config).unwrap();
        assert_eq!(schedule.rotation_longitude(0), 0.0);
        assert!(matches!(plan(0, &config), Err(QuakeError::InvalidSchedule(_))));
    }

    #[test]
    fn test_render_catalog_into_memory() {
        let catalog = EventCatalog::from_unfiltered(vec![
            QuakeEvent::new(Some(1960.0), 9.5, LatLng::new(-38.2, -73.0)),
            QuakeEvent::new(Some(1964.0), 9.2, LatLng::new(61.0, -147.7)),
        ]);
        let mut config = AnimationConfig::default().with_profile(RenderProfile::Draft);
        config.dpi = 24.0;
        config.duration_secs = 1.0;

        let schedule = plan(catalog.len(), &config).unwrap();
        let mut sink = MemorySink::new();
        let summary = render_catalog(catalog, schedule, &config, &mut sink).unwrap();

        assert_eq!(summary.frames, 2);
        assert_eq!(summary.final_revealed, 2);
        assert_eq!(sink.frame_count(), 2);
        assert_eq!(sink.frames()[0].dimensions(), config.figure_pixels());
        assert!(sink.is_finished());
    }
}
