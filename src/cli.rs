//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use crate::params::{
    CameraPreset, DriftCamera, FixedCamera, OrbitCamera, RecordingConfig, RenderConfig,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "oceanmarch")]
#[command(about = "Render a raymarched procedural ocean to PNG", long_about = None)]
pub struct Args {
    /// Image width (pixels)
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Image height (pixels)
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Vertical field of view (degrees)
    #[arg(long, value_name = "DEGREES", default_value_t = 40.0)]
    pub fov: f32,

    /// Elapsed time of the (first) frame
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Render a frame sequence of this length instead of a single frame
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f32>,

    /// Frame rate for sequences
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Output PNG path, or output directory for sequences
    #[arg(long, short, default_value = "ocean.png")]
    pub output: PathBuf,

    /// Camera preset: fixed (default), orbit, drift
    #[arg(long, value_name = "PRESET", default_value = "fixed")]
    pub camera_preset: String,

    /// Camera elevation for the fixed preset (meters)
    #[arg(long, value_name = "METERS")]
    pub elevation: Option<f32>,

    /// Pointer x for the orbit preset, in [-1, 1]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pointer_x: f32,

    /// Pointer y for the orbit preset, in [-1, 1]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pointer_y: f32,

    /// Average 2x2 sub-pixel samples per pixel
    #[arg(long)]
    pub antialias: bool,

    /// Noise texture image (red channel); generated from --seed when absent
    #[arg(long, value_name = "PATH")]
    pub noise_image: Option<PathBuf>,

    /// Seed for the generated noise texture
    #[arg(long, default_value_t = 42)]
    pub seed: u32,
}

impl Args {
    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera_preset.to_lowercase().as_str() {
            "fixed" => {
                let mut fixed = FixedCamera::default();
                if let Some(elevation) = self.elevation {
                    fixed.position[1] = elevation;
                }
                log::info!("Camera: Fixed (position: {:?})", fixed.position);
                CameraPreset::Fixed(fixed)
            }
            "orbit" => {
                log::info!(
                    "Camera: Orbit (pointer: {:.2}, {:.2})",
                    self.pointer_x,
                    self.pointer_y
                );
                CameraPreset::Orbit(OrbitCamera::default())
            }
            "drift" => {
                log::info!("Camera: Drift (straight-line flight)");
                CameraPreset::Drift(DriftCamera::default())
            }
            other => {
                log::warn!("Unknown camera preset '{}', using fixed", other);
                CameraPreset::Fixed(FixedCamera::default())
            }
        }
    }

    pub fn pointer(&self) -> Vec2 {
        Vec2::new(self.pointer_x, self.pointer_y)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            fov_degrees: self.fov,
            antialias: self.antialias,
        }
    }

    /// Create recording configuration if sequence mode is enabled
    pub fn create_recording_config(&self) -> Option<RecordingConfig> {
        self.duration.map(|duration| {
            let mut config = RecordingConfig::new(duration, self.output.clone());
            config.fps = self.fps;
            config.start_time_s = self.time;
            config
        })
    }
}
