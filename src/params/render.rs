//! Rendering, ray marching and recording configuration.

use std::path::PathBuf;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width (pixels)
    pub width: u32,

    /// Image height (pixels)
    pub height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Average a 2x2 grid of sub-pixel samples per pixel
    pub antialias: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov_degrees: 40.0,
            antialias: false,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Resolution must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(format!(
                "Field of view must be in (0, 180) degrees, got {}",
                self.fov_degrees
            ));
        }
        Ok(())
    }
}

/// Ray marching budget and tolerances
#[derive(Debug, Clone)]
pub struct MarchParams {
    /// Step budget per ray
    pub max_steps: usize,

    /// Distance past which a ray counts as a miss (meters)
    pub max_dist: f32,

    /// Convergence tolerance on |sample.y - wave height| (meters)
    pub epsilon: f32,

    /// Iterations of bisection once the surface is bracketed
    pub bisection_steps: usize,

    /// Fraction of the vertical gap advanced per step
    pub step_relaxation: f32,

    /// Marching starts at y = ceiling_factor * wave height
    pub ceiling_factor: f32,
}

impl Default for MarchParams {
    fn default() -> Self {
        Self {
            max_steps: 300,
            max_dist: 1800.0,
            epsilon: 1e-4,
            bisection_steps: 8,
            step_relaxation: 0.5,
            ceiling_factor: 1.1,
        }
    }
}

impl MarchParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_steps == 0 {
            return Err("Step budget must be > 0".to_string());
        }
        if !(self.max_dist > 0.0) {
            return Err(format!("Max distance must be > 0, got {}", self.max_dist));
        }
        if !(self.epsilon > 0.0) {
            return Err(format!("Epsilon must be > 0, got {}", self.epsilon));
        }
        if !(self.step_relaxation > 0.0 && self.step_relaxation <= 1.0) {
            return Err(format!(
                "Step relaxation must be in (0, 1], got {}",
                self.step_relaxation
            ));
        }
        if !(self.ceiling_factor >= 1.0) {
            return Err(format!(
                "Ceiling factor must be >= 1, got {}",
                self.ceiling_factor
            ));
        }
        Ok(())
    }
}

/// Frame sequence configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Elapsed time of the first frame (seconds)
    pub start_time_s: f32,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            duration_secs,
            start_time_s: 0.0,
            output_dir: output_dir.into(),
            fps: 30,
        }
    }

    /// Total number of frames to render
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Elapsed time for a frame (seconds)
    pub fn frame_time_s(&self, index: usize) -> f32 {
        self.start_time_s + index as f32 / self.fps as f32
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of a single frame image
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", index))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.fps == 0 {
            return Err("Frame rate must be > 0".to_string());
        }
        if !(self.duration_secs > 0.0) {
            return Err(format!(
                "Recording duration must be > 0, got {}",
                self.duration_secs
            ));
        }
        Ok(())
    }
}
