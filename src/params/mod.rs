//! Parameter definitions with physical units and documented semantics.
//!
//! All tuned constants of the renderer live here with:
//! - Physical units (meters, seconds, radians, etc.)
//! - Documented ranges and meanings
//! - A `validate` check where a bad value would break the kernel's bounds

mod camera;
mod lighting;
mod ocean;
mod render;

// Re-export all types
pub use camera::{CameraPreset, DriftCamera, FixedCamera, OrbitCamera};
pub use lighting::LightingParams;
pub use ocean::{WaveParams, MAX_OCTAVES};
pub use render::{MarchParams, RecordingConfig, RenderConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(WaveParams::default().validate().is_ok());
        assert!(LightingParams::default().validate().is_ok());
        assert!(MarchParams::default().validate().is_ok());
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_octave_budget_rejected_above_max() {
        let mut waves = WaveParams::default();
        waves.normal_octaves = MAX_OCTAVES + 1;
        let err = waves.validate().unwrap_err();
        assert!(err.contains("normal octaves"), "unexpected error: {}", err);

        waves.normal_octaves = 8;
        waves.shape_octaves = 0;
        assert!(waves.validate().is_err());
    }

    #[test]
    fn test_render_config_rejects_degenerate_view() {
        let mut config = RenderConfig::default();
        config.height = 0;
        assert!(config.validate().is_err());

        let mut config = RenderConfig::default();
        config.fov_degrees = 180.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_normal_octaves_switch_with_distance() {
        let waves = WaveParams::default();
        let max_dist = MarchParams::default().max_dist;

        assert_eq!(waves.normal_octaves_at(10.0, max_dist), 8);
        assert_eq!(waves.normal_octaves_at(0.3 * max_dist + 1.0, max_dist), 4);
    }

    #[test]
    fn test_sun_direction_is_unit_and_above_horizon() {
        let sun = LightingParams::default().sun_direction();
        assert!((sun.length() - 1.0).abs() < 1e-6);
        assert!(sun.y > 0.0);
        // Azimuth 0 points along +z
        assert!(sun.x.abs() < 1e-6);
        assert!(sun.z > 0.0);
    }

    #[test]
    fn test_recording_frames() {
        let config = RecordingConfig::new(2.0, "out");
        assert_eq!(config.total_frames(), 60);
        assert_eq!(config.frame_time_s(0), 0.0);
        assert!((config.frame_time_s(15) - 0.5).abs() < 1e-6);
        assert_eq!(
            config.frame_path(7),
            std::path::Path::new("out/frames/frame_00007.png")
        );
        assert!(config.validate().is_ok());
    }
}
