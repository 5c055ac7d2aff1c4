//! Camera presets, view basis and per-pixel ray construction.

use glam::{Mat3, Vec2, Vec3};

use crate::params::{CameraPreset, DriftCamera, FixedCamera, OrbitCamera};

/// A ray through one pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Camera state for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Columns: right, up, backward (the camera looks along -z)
    pub basis: Mat3,
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,
}

impl Camera {
    /// Camera at `position` looking along `target_dir`, with +y kept up
    pub fn look_at(position: Vec3, target_dir: Vec3, fov_degrees: f32) -> Self {
        Self {
            position,
            basis: view_basis(target_dir, Vec3::Y),
            fov_degrees,
        }
    }

    /// Unit world-space direction through `frag_coord` (pixels, origin bottom-left)
    pub fn ray_direction(&self, frag_coord: Vec2, resolution: Vec2) -> Vec3 {
        let xy = frag_coord - resolution / 2.0;
        let z = (0.5 * resolution.y) / (self.fov_degrees.to_radians() / 2.0).tan();
        let view_dir = Vec3::new(xy.x, xy.y, -z).normalize();
        (self.basis * view_dir).normalize()
    }

    pub fn ray(&self, frag_coord: Vec2, resolution: Vec2) -> Ray {
        Ray {
            origin: self.position,
            direction: self.ray_direction(frag_coord, resolution),
        }
    }
}

/// Rotation taking camera space (looking down -z) to world space
fn view_basis(target_dir: Vec3, up: Vec3) -> Mat3 {
    let zaxis = target_dir.normalize();
    let mut side = zaxis.cross(up);
    if side.length_squared() < 1e-12 {
        // Looking straight up or down: any horizontal reference works
        side = zaxis.cross(Vec3::Z);
    }
    let xaxis = side.normalize();
    let yaxis = xaxis.cross(zaxis);

    Mat3::from_cols(xaxis, yaxis, -zaxis)
}

/// Camera driven by a preset, time and pointer
pub struct CameraSystem {
    preset: CameraPreset,
}

impl CameraSystem {
    /// Create new camera system with specified preset
    pub fn new(preset: CameraPreset) -> Self {
        Self { preset }
    }

    /// Compute camera position and look-at target
    ///
    /// # Arguments
    /// * `time_s` - Elapsed time in seconds
    /// * `pointer` - Pointer position, normalised to [-1, 1] on both axes
    ///
    /// # Returns
    /// Tuple of (eye_position, target_position)
    pub fn compute_position_and_target(&self, time_s: f32, pointer: Vec2) -> (Vec3, Vec3) {
        match &self.preset {
            CameraPreset::Fixed(params) => Self::compute_fixed(params),
            CameraPreset::Orbit(params) => Self::compute_orbit(params, pointer),
            CameraPreset::Drift(params) => Self::compute_drift(params, time_s),
        }
    }

    /// Camera for a frame, ready for ray generation
    pub fn camera(&self, time_s: f32, pointer: Vec2, fov_degrees: f32) -> Camera {
        let (eye, target) = self.compute_position_and_target(time_s, pointer);
        Camera::look_at(eye, target - eye, fov_degrees)
    }

    fn compute_fixed(p: &FixedCamera) -> (Vec3, Vec3) {
        (Vec3::from_array(p.position), Vec3::from_array(p.target))
    }

    /// Orbit the origin: pointer x sweeps the full circle, pointer y the elevation range
    fn compute_orbit(p: &OrbitCamera, pointer: Vec2) -> (Vec3, Vec3) {
        let pointer = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
        let yaw = pointer.x * std::f32::consts::PI;
        let t = 0.5 * (pointer.y + 1.0);
        let elevation = (p.min_elevation_deg + (p.max_elevation_deg - p.min_elevation_deg) * t)
            .to_radians();

        let eye = p.radius_m
            * Vec3::new(
                elevation.cos() * yaw.sin(),
                elevation.sin(),
                elevation.cos() * yaw.cos(),
            );

        (eye, Vec3::ZERO)
    }

    /// Straight line along +z at constant altitude
    fn compute_drift(p: &DriftCamera, time_s: f32) -> (Vec3, Vec3) {
        let eye = Vec3::new(0.0, p.altitude_m, time_s * p.forward_speed_m_per_s);

        // Look ahead and down at a point 40% lower than the camera
        let target = Vec3::new(eye.x, eye.y * 0.6, eye.z + p.look_ahead_m);

        (eye, target)
    }
}
