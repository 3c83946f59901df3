use crate::core::constants::{GLOBE_START_LONGITUDE, GLOBE_TURNS};
use crate::{QuakeError, Result};
use serde::{Deserialize, Serialize};

/// Maps frame indices to revealed events and globe rotation
///
/// `step` events are revealed per frame so that `frames` frames cover the
/// whole catalog; the output rate is then stretched to hit the requested
/// duration exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSchedule {
    /// Events in the catalog
    pub events: usize,
    /// Events revealed per frame
    pub step: usize,
    /// Total frames
    pub frames: usize,
    /// Playback rate that makes `frames` last `duration_secs`
    pub fps: f64,
    pub duration_secs: f64,
    /// Globe centre longitude at frame zero
    pub start_longitude: f64,
    /// Globe revolutions over the whole animation
    pub turns: f64,
}

impl FrameSchedule {
    pub fn new(events: usize, duration_secs: f64, target_fps: f64) -> Result<Self> {
        if events == 0 {
            return Err(QuakeError::InvalidSchedule(
                "no events with a defined intensity to animate".into(),
            ));
        }
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(QuakeError::InvalidSchedule(format!(
                "duration must be positive, got {}",
                duration_secs
            )));
        }
        if !target_fps.is_finite() || target_fps <= 0.0 {
            return Err(QuakeError::InvalidSchedule(format!(
                "frame rate must be positive, got {}",
                target_fps
            )));
        }

        let step = ((events as f64 / (target_fps * duration_secs)).ceil() as usize).max(1);
        let frames = events.div_ceil(step);
        let fps = frames as f64 / duration_secs;

        log::info!(
            "Schedule: {} events, {} per frame, {} frames at {:.3} fps",
            events,
            step,
            frames,
            fps
        );

        Ok(Self {
            events,
            step,
            frames,
            fps,
            duration_secs,
            start_longitude: GLOBE_START_LONGITUDE,
            turns: GLOBE_TURNS,
        })
    }

    /// Overrides the globe rotation parameters
    pub fn with_rotation(mut self, start_longitude: f64, turns: f64) -> Self {
        self.start_longitude = start_longitude;
        self.turns = turns;
        self
    }

    /// Events shown on the main map at frame `index`; the last frame shows all
    pub fn revealed_count(&self, index: usize) -> usize {
        index
            .saturating_add(1)
            .saturating_mul(self.step)
            .min(self.events)
    }

    /// Catalog index of the most recently revealed event
    pub fn label_index(&self, index: usize) -> usize {
        self.revealed_count(index) - 1
    }

    /// Globe centre longitude at frame `index`, turning westward
    pub fn rotation_longitude(&self, index: usize) -> f64 {
        self.start_longitude - self.turns * 360.0 * index as f64 / self.frames as f64
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.frames
    }
}
