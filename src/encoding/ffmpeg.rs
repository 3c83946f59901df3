use super::{EncoderSettings, FrameSink};
use crate::{QuakeError, Result};
use image::RgbaImage;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

/// Streams raw RGBA frames into an `ffmpeg` child process
pub struct FfmpegSink {
    program: String,
    settings: EncoderSettings,
    output: PathBuf,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    frames: usize,
}

impl FfmpegSink {
    pub fn spawn(output: &Path, settings: EncoderSettings) -> Result<Self> {
        Self::spawn_with("ffmpeg", output, settings)
    }

    /// Starts `program` with ffmpeg's command line for `output`
    pub fn spawn_with(program: &str, output: &Path, settings: EncoderSettings) -> Result<Self> {
        let args = Self::arguments(output, &settings);
        log::debug!("{} {}", program, args.join(" "));

        let mut child = Command::new(program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    QuakeError::Encoder(format!("{} not found on PATH", program))
                }
                _ => QuakeError::Encoder(format!("failed to start {}: {}", program, e)),
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| QuakeError::Encoder(format!("{} stdin unavailable", program)))?;

        log::info!(
            "Encoding {}x{} at {:.3} fps with {}",
            settings.width,
            settings.height,
            settings.fps,
            settings.codec
        );

        Ok(Self {
            program: program.to_string(),
            settings,
            output: output.to_path_buf(),
            child: Some(child),
            stdin: Some(stdin),
            frames: 0,
        })
    }

    /// Command line for a raw RGBA stream on stdin
    pub fn arguments(output: &Path, settings: &EncoderSettings) -> Vec<String> {
        vec![
            "-y".into(),
            "-loglevel".into(),
            "error".into(),
            "-f".into(),
            "rawvideo".into(),
            "-pix_fmt".into(),
            "rgba".into(),
            "-s".into(),
            format!("{}x{}", settings.width, settings.height),
            "-r".into(),
            format!("{}", settings.fps),
            "-i".into(),
            "-".into(),
            "-c:v".into(),
            settings.codec.clone(),
            "-pix_fmt".into(),
            "yuv420p".into(),
            output.to_string_lossy().into_owned(),
        ]
    }

    pub fn frames_written(&self) -> usize {
        self.frames
    }

    /// Reaps a child that closed its input early and reports what it printed
    fn stopped(&mut self, cause: std::io::Error) -> QuakeError {
        drop(self.stdin.take());
        let unexplained = || {
            QuakeError::Encoder(format!("{} stopped accepting frames: {}", self.program, cause))
        };
        let Some(child) = self.child.take() else {
            return unexplained();
        };

        match child.wait_with_output() {
            Ok(output) => QuakeError::Encoder(format!(
                "{} stopped accepting frames ({}): {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )),
            Err(_) => unexplained(),
        }
    }
}

impl FrameSink for FfmpegSink {
    fn write_frame(&mut self, frame: &RgbaImage) -> Result<()> {
        self.settings.check_frame(frame)?;
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| QuakeError::Encoder("encoder already finished".to_string()))?;
        if let Err(e) = stdin.write_all(frame.as_raw()) {
            return Err(self.stopped(e));
        }
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // Closing stdin signals end of stream
        drop(self.stdin.take());
        let Some(child) = self.child.take() else {
            return Ok(());
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(QuakeError::Encoder(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        log::info!("Wrote {} frames to {}", self.frames, self.output.display());
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            log::warn!("Encoder dropped before finishing, stopping {}", self.program);
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
