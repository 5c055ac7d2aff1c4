//! Water surface shading.
//!
//! Direct analytic approximation: Blinn-Phong sun highlight, diffuse sun and
//! sky light, view-dependent ambient, fake subsurface scattering through the
//! wave crests and a Fresnel-weighted sky reflection.

use glam::Vec3;

use crate::camera::Ray;
use crate::params::LightingParams;
use crate::sky::sky_colour;

/// A ray/surface hit ready for shading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub position: Vec3,
    /// Unit surface normal
    pub normal: Vec3,
    /// Distance travelled along the ray
    pub distance: f32,
}

fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Schlick's approximation of the reflected fraction seen from `camera_pos`
pub fn fresnel_schlick(camera_pos: Vec3, position: Vec3, normal: Vec3, f0: f32) -> f32 {
    let cos_theta = normal.dot((camera_pos - position).normalize());
    f0 + (1.0 - f0) * (1.0 - cos_theta).powi(5)
}

/// Colour of the water at `hit`, seen along `ray`
///
/// # Arguments
/// * `ray` - Camera ray that produced the hit
/// * `hit` - Hit position, normal and distance
/// * `light_dir` - Unit vector towards the sun
/// * `lighting` - Lighting constants
/// * `wave_height_m` - Peak wave elevation, for the crest scattering weight
/// * `max_dist` - March distance limit, for the scattering falloff
pub fn shade_surface(
    ray: &Ray,
    hit: &SurfaceHit,
    light_dir: Vec3,
    lighting: &LightingParams,
    wave_height_m: f32,
    max_dist: f32,
) -> Vec3 {
    let normal = hit.normal;
    let ray_dir = ray.direction;

    let halfway_dir = (light_dir - ray_dir).normalize();
    let spec = normal.dot(halfway_dir).max(0.0).powf(lighting.shininess);
    let specular = spec * lighting.specular_colour * lighting.sun_light_colour;

    let sun = normal.dot(light_dir).max(0.0);
    let sun_light = sun * lighting.sun_light_colour;

    let sky = normal.dot(Vec3::Y).max(0.0);
    let sky_light = sky * lighting.sky_colour;

    let mut result = 0.1 * sun_light + 0.1 * sky_light;

    let height_fraction = (hit.position.y + wave_height_m) / (2.0 * wave_height_m);

    // Lighter towards the horizon, darker straight down
    let ambient = lighting.ambient_colour.lerp(
        0.5 * lighting.scatter_colour,
        (0.5 + 0.5 * ray_dir.y).powi(2),
    );

    result *= lighting.diffuse_colour;
    result += lighting.ambient_strength * ambient + lighting.specular_strength * specular;

    // Light leaking through the crests towards the viewer
    let h = (-light_dir + normal * lighting.scatter_distortion).normalize();
    let v_dot_h =
        saturate(ray_dir.dot(-h)).powf(lighting.scatter_power) * lighting.scatter_scale;

    result += lighting.scatter_strength
        * (1.0 - hit.distance / max_dist).powi(4)
        * height_fraction
        * v_dot_h
        * lighting.scatter_colour;

    // Reflection blend must come last: it replaces part of everything above
    let reflected_dir = reflect(ray_dir, normal).normalize();
    let reflected = sky_colour(reflected_dir, lighting.sky_colour);
    let fresnel = saturate(fresnel_schlick(
        ray.origin,
        hit.position,
        normal,
        lighting.fresnel_f0,
    ));

    result.lerp(0.5 * reflected, fresnel)
}
