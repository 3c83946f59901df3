//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    config::{AnimationConfig, ProfileOptions, RenderProfile},
    geo::{LatLng, Point},
    viewport::{PixelRect, Viewport},
};

pub use crate::data::{marker_size, load_catalog, parse_catalog, EventCatalog, QuakeEvent};

pub use crate::animation::{
    plan, render_catalog, run, FrameInfo, FrameSchedule, FuncAnimation, RenderSummary, Scene,
};

pub use crate::encoding::{
    open_sink, EncoderSettings, FfmpegSink, FrameSink, GifSink, MemorySink, PngSequenceSink,
};

pub use crate::layers::{FrameContext, Layer, LayerStack};

pub use crate::projection::{Orthographic, Projection, Robinson};

pub use crate::{Error as QuakeMapError, Result};

pub use std::sync::Arc;
