//! Frame sinks: where rendered frames go
//!
//! [`open_sink`] picks one from the output path: `.gif` writes an animated
//! GIF, a path without extension becomes a directory of numbered PNGs and
//! anything else is handed to `ffmpeg`.

pub mod ffmpeg;
pub mod gif;
pub mod memory;
pub mod png_sequence;

pub use self::ffmpeg::FfmpegSink;
pub use self::gif::GifSink;
pub use self::memory::MemorySink;
pub use self::png_sequence::PngSequenceSink;

use crate::{QuakeError, Result};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Consumer of an ordered frame sequence
pub trait FrameSink {
    fn write_frame(&mut self, frame: &RgbaImage) -> Result<()>;

    /// Flushes and closes the output; no frames may follow
    fn finish(&mut self) -> Result<()>;
}

/// Stream parameters shared by every sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderSettings {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub codec: String,
}

impl EncoderSettings {
    pub fn new(width: u32, height: u32, fps: f64, codec: impl Into<String>) -> Self {
        Self {
            width,
            height,
            fps,
            codec: codec.into(),
        }
    }

    /// Rejects frames whose size differs from the stream
    pub fn check_frame(&self, frame: &RgbaImage) -> Result<()> {
        if frame.dimensions() != (self.width, self.height) {
            return Err(QuakeError::Encoder(format!(
                "frame is {}x{} but the stream is {}x{}",
                frame.width(),
                frame.height(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }
}

/// Opens the sink matching the output path's extension
pub fn open_sink(path: &Path, settings: EncoderSettings) -> Result<Box<dyn FrameSink>> {
    if !settings.fps.is_finite() || settings.fps <= 0.0 {
        return Err(QuakeError::Encoder(format!(
            "frame rate must be positive, got {}",
            settings.fps
        )));
    }

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    let sink: Box<dyn FrameSink> = match extension.as_deref() {
        Some("gif") => Box::new(GifSink::create(path, settings)?),
        None => Box::new(PngSequenceSink::create(path, settings)?),
        Some(_) => Box::new(FfmpegSink::spawn(path, settings)?),
    };
    log::info!("Writing frames to {}", path.display());
    Ok(sink)
}
