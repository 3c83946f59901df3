//! Configuration system for the animation and its render quality
//!
//! Every tunable of a run lives in [`AnimationConfig`]. Defaults give the
//! standard figure (16x9 inches, 120 DPI, 30 seconds, h264). Presets in
//! [`RenderProfile`] trade resolution for render time.

use crate::core::constants::*;
use crate::{QuakeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderProfile {
    /// Quick previews
    Draft,
    /// 1920x1080 at the default figure size
    Standard,
    /// Print quality
    High,
}

/// Settings a profile resolves to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileOptions {
    pub dpi: f64,
    /// Land mask cells per degree of latitude/longitude
    pub land_cells_per_degree: f64,
}

impl RenderProfile {
    pub fn resolve(&self) -> ProfileOptions {
        match self {
            Self::Draft => ProfileOptions {
                dpi: 60.0,
                land_cells_per_degree: 1.0,
            },
            Self::Standard => ProfileOptions {
                dpi: DEFAULT_DPI,
                land_cells_per_degree: 2.0,
            },
            Self::High => ProfileOptions {
                dpi: 240.0,
                land_cells_per_degree: 4.0,
            },
        }
    }
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self::Standard
    }
}

impl FromStr for RenderProfile {
    type Err = QuakeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "draft" | "low" => Ok(Self::Draft),
            "standard" | "default" => Ok(Self::Standard),
            "high" | "print" => Ok(Self::High),
            other => Err(QuakeError::InvalidConfig(format!(
                "unknown render profile '{}' (expected draft, standard or high)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Tab-delimited earthquake dataset
    pub input: PathBuf,
    /// Output video (extension selects the encoder)
    pub output: PathBuf,
    /// Requested playback length in seconds
    pub duration_secs: f64,
    /// Frame rate the schedule aims for before rounding
    pub target_fps: f64,
    pub dpi: f64,
    /// Figure size in inches (width, height)
    pub figure_size: (f64, f64),
    /// Encoder codec name, passed to ffmpeg as `-c:v`
    pub codec: String,
    pub marker_scale: f64,
    pub main_marker_factor: f64,
    pub marker_alpha: f32,
    pub globe_start_longitude: f64,
    pub globe_turns: f64,
    pub land_cells_per_degree: f64,
    pub title_wrap: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let profile = RenderProfile::default().resolve();
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            duration_secs: DEFAULT_DURATION_SECS,
            target_fps: DEFAULT_TARGET_FPS,
            dpi: profile.dpi,
            figure_size: FIGURE_SIZE_INCHES,
            codec: DEFAULT_CODEC.to_string(),
            marker_scale: MARKER_SCALE,
            main_marker_factor: MAIN_MARKER_FACTOR,
            marker_alpha: MARKER_ALPHA,
            globe_start_longitude: GLOBE_START_LONGITUDE,
            globe_turns: GLOBE_TURNS,
            land_cells_per_degree: profile.land_cells_per_degree,
            title_wrap: TITLE_WRAP,
        }
    }
}

impl AnimationConfig {
    /// Loads a JSON file; absent keys keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Applies the resolution settings of a preset
    pub fn with_profile(mut self, profile: RenderProfile) -> Self {
        let options = profile.resolve();
        self.dpi = options.dpi;
        self.land_cells_per_degree = options.land_cells_per_degree;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(QuakeError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )))
            }
        };

        positive("duration_secs", self.duration_secs)?;
        positive("target_fps", self.target_fps)?;
        positive("dpi", self.dpi)?;
        positive("figure width", self.figure_size.0)?;
        positive("figure height", self.figure_size.1)?;
        positive("land_cells_per_degree", self.land_cells_per_degree)?;
        positive("marker_scale", self.marker_scale)?;
        positive("main_marker_factor", self.main_marker_factor)?;

        if !(0.0..=1.0).contains(&self.marker_alpha) {
            return Err(QuakeError::InvalidConfig(format!(
                "marker_alpha must be within [0, 1], got {}",
                self.marker_alpha
            )));
        }
        if !self.globe_start_longitude.is_finite() {
            return Err(QuakeError::InvalidConfig(format!(
                "globe_start_longitude must be finite, got {}",
                self.globe_start_longitude
            )));
        }
        if !self.globe_turns.is_finite() || self.globe_turns == 0.0 {
            return Err(QuakeError::InvalidConfig(format!(
                "globe_turns must be finite and non-zero, got {}",
                self.globe_turns
            )));
        }
        if self.codec.trim().is_empty() {
            return Err(QuakeError::InvalidConfig("codec must not be empty".into()));
        }
        if self.title_wrap == 0 {
            return Err(QuakeError::InvalidConfig("title_wrap must be at least 1".into()));
        }

        let (width, height) = self.figure_pixels();
        if width < 16 || height < 16 {
            return Err(QuakeError::InvalidConfig(format!(
                "figure of {}x{} pixels is too small to draw",
                width, height
            )));
        }
        Ok(())
    }

    /// Figure size in pixels, rounded down to even numbers for yuv420p encoders
    pub fn figure_pixels(&self) -> (u32, u32) {
        let to_even = |inches: f64| ((inches * self.dpi).round() as u32) & !1;
        (to_even(self.figure_size.0), to_even(self.figure_size.1))
    }

    /// Pixels per typographic point
    pub fn pixels_per_point(&self) -> f64 {
        self.dpi / POINTS_PER_INCH
    }
}
