use crate::encoding::FrameSink;
use crate::{QuakeError, Result};
use image::RgbaImage;

/// Drives a per-frame callback and streams its output into a sink.
///
/// The callback receives the frame index and a reusable frame buffer, and is
/// called for `0..frames` in increasing order on the calling thread.
pub struct FuncAnimation<F>
where
    F: FnMut(usize, &mut RgbaImage) -> Result<()>,
{
    frames: usize,
    width: u32,
    height: u32,
    callback: F,
}

impl<F> FuncAnimation<F>
where
    F: FnMut(usize, &mut RgbaImage) -> Result<()>,
{
    pub fn new(frames: usize, width: u32, height: u32, callback: F) -> Self {
        Self {
            frames,
            width,
            height,
            callback,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Renders every frame into `sink` and finishes it; returns frames written
    pub fn save(&mut self, sink: &mut dyn FrameSink) -> Result<usize> {
        let mut frame = RgbaImage::new(self.width, self.height);
        let report_every = (self.frames / 10).max(1);

        for index in 0..self.frames {
            (self.callback)(index, &mut frame)?;
            if frame.dimensions() != (self.width, self.height) {
                return Err(QuakeError::Render(format!(
                    "frame {} came back {}x{}, expected {}x{}",
                    index,
                    frame.width(),
                    frame.height(),
                    self.width,
                    self.height
                )));
            }
            sink.write_frame(&frame)?;

            if (index + 1) % report_every == 0 || index + 1 == self.frames {
                log::info!("Rendered frame {}/{}", index + 1, self.frames);
            }
        }

        sink.finish()?;
        Ok(self.frames)
    }
}
