//! # quakemap
//!
//! Animated visualization of the NOAA/NGDC Significant Earthquake Database.
//!
//! A Robinson world map accumulates earthquake markers frame by frame while
//! an orthographic globe inset rotates underneath the full event set. The
//! frame sequence is handed to a [`FrameSink`](encoding::FrameSink), which
//! normally pipes it into `ffmpeg`.

pub mod animation;
pub mod core;
pub mod data;
pub mod encoding;
pub mod layers;
pub mod prelude;
pub mod projection;
pub mod rendering;
pub mod spatial;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{AnimationConfig, RenderProfile},
    geo::{LatLng, Point},
    viewport::Viewport,
};

pub use data::{catalog::EventCatalog, catalog::QuakeEvent, loader::load_catalog, loader::parse_catalog};

pub use animation::{
    func_animation::FuncAnimation,
    pipeline::{render_catalog, run, RenderSummary},
    scene::{FrameInfo, Scene},
    schedule::FrameSchedule,
};

pub use encoding::{open_sink, EncoderSettings, FrameSink, MemorySink};

pub use projection::{orthographic::Orthographic, robinson::Robinson, Projection};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, QuakeError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum QuakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Line {line}: missing column {column}")]
    MissingColumn { line: u64, column: usize },

    #[error("Line {line}, column {column}: invalid number {value:?}")]
    InvalidNumber {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Encoder error: {0}")]
    Encoder(String),
}

/// Error type alias for convenience
pub type Error = QuakeError;

/// Installs `env_logger` as the `log` backend, honouring `RUST_LOG`.
///
/// Defaults to `info` so a plain run still reports progress.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // A second call (tests, embedding apps) keeps the first logger.
    let _ = env_logger::Builder::from_env(env).try_init();
}
