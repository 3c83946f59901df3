use anyhow::{Context, Result};
use clap::Parser;
use quakemap::{AnimationConfig, RenderProfile};
use std::path::PathBuf;

/// Renders the significant earthquake database as an animated world map
#[derive(Parser, Debug)]
#[command(name = "quakemap-app")]
#[command(version)]
#[command(about = "Animated world map of significant earthquakes with a rotating globe inset", long_about = None)]
struct Cli {
    /// Tab-delimited dataset [default: signif.txt]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file; .gif writes a GIF, no extension writes PNG frames [default: Quakes.mp4]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Playback length in seconds [default: 30]
    #[arg(short, long)]
    duration: Option<f64>,

    /// Target frame rate before rounding [default: 20]
    #[arg(short, long)]
    fps: Option<f64>,

    /// Output resolution [default: 120]
    #[arg(long)]
    dpi: Option<f64>,

    /// Video codec passed to ffmpeg [default: h264]
    #[arg(short, long)]
    codec: Option<String>,

    /// Quality preset: draft, standard or high
    #[arg(short, long)]
    profile: Option<RenderProfile>,

    /// JSON file with configuration overrides
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then the profile, then explicit flags
    fn into_config(self) -> Result<AnimationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let config = AnimationConfig::from_json_file(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?;
                log::warn!("Settings from {} override built-in defaults", path.display());
                config
            }
            None => AnimationConfig::default(),
        };

        if let Some(profile) = self.profile {
            config = config.with_profile(profile);
        }
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(duration) = self.duration {
            config.duration_secs = duration;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        if let Some(dpi) = self.dpi {
            config.dpi = dpi;
        }
        if let Some(codec) = self.codec {
            config.codec = codec;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    quakemap::init_logging();

    let config = Cli::parse().into_config()?;
    let summary = quakemap::run(&config)
        .with_context(|| format!("failed to animate {}", config.input.display()))?;

    println!(
        "{}: {} events, {} frames at {:.3} fps",
        config.output.display(),
        summary.events,
        summary.frames,
        summary.fps
    );
    Ok(())
}
