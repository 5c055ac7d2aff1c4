//! Lighting, scattering and sky colour parameters.

use glam::Vec3;

/// Lighting model constants
#[derive(Debug, Clone)]
pub struct LightingParams {
    /// Zenith sky colour (linear RGB)
    pub sky_colour: Vec3,

    /// Colour of direct sunlight and of the visible sun disk
    pub sun_light_colour: Vec3,

    /// Colour of the specular highlight
    pub specular_colour: Vec3,

    /// Multiplier on the specular term
    pub specular_strength: f32,

    /// Blinn-Phong exponent
    pub shininess: f32,

    /// Sun position around the horizon (radians, full circle = 2π)
    pub sun_azimuth_rad: f32,

    /// Sun height (0: horizon, 1: zenith), vertical component before normalisation
    pub sun_height: f32,

    /// Base water colour for direct light
    pub diffuse_colour: Vec3,

    /// Weight of the view-dependent ambient colour
    pub ambient_strength: f32,

    /// Ambient water colour looking straight down
    pub ambient_colour: Vec3,

    /// Colour of light transmitted through wave crests
    pub scatter_colour: Vec3,

    /// Exponent of the subsurface scattering lobe
    pub scatter_power: f32,

    /// Scale of the subsurface scattering lobe
    pub scatter_scale: f32,

    /// Normal distortion of the scattering half-vector
    pub scatter_distortion: f32,

    /// Overall subsurface scattering weight
    pub scatter_strength: f32,

    /// Angular radius of the sun glow (in 1 - cos units)
    pub sun_glow_radius: f32,

    /// Falloff exponent of the sun glow
    pub sun_glow_intensity: f32,

    /// Fresnel reflectance at normal incidence (water ≈ 0.02)
    pub fresnel_f0: f32,
}

impl Default for LightingParams {
    fn default() -> Self {
        let diffuse_colour = 0.2 * Vec3::new(0.05, 0.45, 0.65);
        Self {
            sky_colour: Vec3::new(0.09, 0.33, 0.81),
            sun_light_colour: Vec3::ONE,
            specular_colour: Vec3::ONE,
            specular_strength: 100.0,
            shininess: 2048.0,
            sun_azimuth_rad: 0.0,
            sun_height: 0.35,
            diffuse_colour,
            ambient_strength: 0.5,
            ambient_colour: 0.5 * diffuse_colour,
            scatter_colour: Vec3::new(0.05, 0.8, 0.7),
            scatter_power: 8.0,
            scatter_scale: 0.4,
            scatter_distortion: 0.2,
            scatter_strength: 0.3,
            sun_glow_radius: 0.0005,
            sun_glow_intensity: 1.0,
            fresnel_f0: 0.02,
        }
    }
}

impl LightingParams {
    /// Unit vector pointing towards the sun
    pub fn sun_direction(&self) -> Vec3 {
        Vec3::new(
            self.sun_azimuth_rad.sin(),
            self.sun_height,
            self.sun_azimuth_rad.cos(),
        )
        .normalize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.shininess > 0.0) {
            return Err(format!("Shininess must be > 0, got {}", self.shininess));
        }
        if !(self.sun_glow_radius >= 0.0) {
            return Err(format!(
                "Sun glow radius must be >= 0, got {}",
                self.sun_glow_radius
            ));
        }
        if !(0.0..=1.0).contains(&self.fresnel_f0) {
            return Err(format!("Fresnel F0 must be in [0, 1], got {}", self.fresnel_f0));
        }
        Ok(())
    }
}
