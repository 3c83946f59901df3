use super::FrameSink;
use crate::{QuakeError, Result};
use image::RgbaImage;

/// Keeps every frame in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    frames: Vec<RgbaImage>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_frames(self) -> Vec<RgbaImage> {
        self.frames
    }
}

impl FrameSink for MemorySink {
    fn write_frame(&mut self, frame: &RgbaImage) -> Result<()> {
        if self.finished {
            return Err(QuakeError::Encoder("sink already finished".to_string()));
        }
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_frames_after_finish() {
        let mut sink = MemorySink::new();
        sink.write_frame(&RgbaImage::new(2, 2)).unwrap();
        sink.finish().unwrap();
        assert!(sink.is_finished());
        assert!(sink.write_frame(&RgbaImage::new(2, 2)).is_err());
        assert_eq!(sink.frame_count(), 1);
    }
}
