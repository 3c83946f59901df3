use super::{EncoderSettings, FrameSink};
use crate::{QuakeError, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Looping animated GIF
pub struct GifSink {
    settings: EncoderSettings,
    path: PathBuf,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    delay: Delay,
    frames: usize,
}

impl GifSink {
    pub fn create(path: &Path, settings: EncoderSettings) -> Result<Self> {
        if !settings.fps.is_finite() || settings.fps <= 0.0 {
            return Err(QuakeError::Encoder(format!(
                "frame rate must be positive, got {}",
                settings.fps
            )));
        }
        let file = BufWriter::new(File::create(path)?);
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite)?;
        let delay = Delay::from_saturating_duration(Duration::from_secs_f64(1.0 / settings.fps));

        Ok(Self {
            settings,
            path: path.to_path_buf(),
            encoder: Some(encoder),
            delay,
            frames: 0,
        })
    }
}

impl FrameSink for GifSink {
    fn write_frame(&mut self, frame: &RgbaImage) -> Result<()> {
        self.settings.check_frame(frame)?;
        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| QuakeError::Encoder("GIF already finished".to_string()))?;
        encoder.encode_frame(Frame::from_parts(frame.clone(), 0, 0, self.delay))?;
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // The trailer is written when the encoder is dropped
        if self.encoder.take().is_some() {
            log::info!("Wrote {} GIF frames to {}", self.frames, self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Rgba};

    #[test]
    fn test_gif_round_trip_frame_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quakes.gif");
        let mut sink = GifSink::create(&path, EncoderSettings::new(8, 6, 10.0, "gif")).unwrap();
        for shade in [0u8, 120, 240] {
            sink.write_frame(&RgbaImage::from_pixel(8, 6, Rgba([shade, 0, 0, 255])))
                .unwrap();
        }
        sink.finish().unwrap();
        assert!(sink.write_frame(&RgbaImage::new(8, 6)).is_err());

        let decoder = GifDecoder::new(File::open(&path).unwrap()).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        assert_eq!(frames.len(), 3);
    }
}
