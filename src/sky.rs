//! Sky background and sun glow.

use glam::Vec3;

use crate::params::LightingParams;

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Sky colour seen along `dir`
///
/// White haze at the horizon fading into the sky colour, darker towards the zenith.
pub fn sky_colour(dir: Vec3, sky: Vec3) -> Vec3 {
    let zenith = sky.lerp(0.2 * sky, dir.y);
    Vec3::ONE.lerp(zenith, smoothstep(-0.5, 0.25, dir.y))
}

/// Glow around the sun for a ray along `dir`
pub fn sun_glow(dir: Vec3, light_dir: Vec3, lighting: &LightingParams) -> Vec3 {
    let dist = (1.0 - dir.dot(light_dir)).max(1e-6);
    lighting.sun_light_colour * (lighting.sun_glow_radius / dist).powf(lighting.sun_glow_intensity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_is_white_below() {
        let sky = LightingParams::default().sky_colour;
        assert_eq!(sky_colour(Vec3::new(0.0, -0.6, 0.8), sky), Vec3::ONE);
    }

    #[test]
    fn test_zenith_darker_than_low_sky() {
        let sky = LightingParams::default().sky_colour;
        let zenith = sky_colour(Vec3::Y, sky);
        let low = sky_colour(Vec3::new(0.0, 0.26, 1.0).normalize(), sky);

        assert!(zenith.abs_diff_eq(0.2 * sky, 1e-6));
        assert!(low.length() > zenith.length());
    }

    #[test]
    fn test_sky_blends_smoothly() {
        let sky = LightingParams::default().sky_colour;
        let mut prev = sky_colour(Vec3::new(0.0, -0.5, 1.0).normalize(), sky);
        for i in 1..100 {
            let y = -0.5 + i as f32 * 0.01;
            let c = sky_colour(Vec3::new(0.0, y, 1.0).normalize(), sky);
            assert!((c - prev).length() < 0.1, "jump at y = {}", y);
            prev = c;
        }
    }

    #[test]
    fn test_glow_peaks_at_sun() {
        let lighting = LightingParams::default();
        let sun = lighting.sun_direction();

        let at_sun = sun_glow(sun, sun, &lighting);
        let away = sun_glow(-sun, sun, &lighting);

        assert!(at_sun.x.is_finite());
        assert!(at_sun.x > 1.0);
        assert!(away.x < 1e-3);
    }
}
