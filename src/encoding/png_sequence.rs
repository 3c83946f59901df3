use super::{EncoderSettings, FrameSink};
use crate::Result;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Numbered PNG files (`frame_000000.png`, ...) in a directory
pub struct PngSequenceSink {
    settings: EncoderSettings,
    dir: PathBuf,
    frames: usize,
}

impl PngSequenceSink {
    pub fn create(dir: &Path, settings: EncoderSettings) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            settings,
            dir: dir.to_path_buf(),
            frames: 0,
        })
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame_{:06}.png", index))
    }
}

impl FrameSink for PngSequenceSink {
    fn write_frame(&mut self, frame: &RgbaImage) -> Result<()> {
        self.settings.check_frame(frame)?;
        frame.save(self.frame_path(self.frames))?;
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        log::info!(
            "Wrote {} PNG frames to {} ({:.3} fps)",
            self.frames,
            self.dir.display(),
            self.settings.fps
        );
        Ok(())
    }
}
