//! Surface normals from central differences of the height field.

use glam::Vec3;

/// Smallest differencing step (meters); keeps hits right under the camera well defined
const MIN_NORMAL_EPSILON: f32 = 1e-3;

/// Differencing step for a hit `distance` meters away on a `resolution_y` pixel tall image
///
/// Grows with distance so far, under-sampled water is smoothed instead of aliasing.
pub fn normal_epsilon(distance: f32, resolution_y: f32) -> f32 {
    ((0.05 / resolution_y) * distance.max(0.0).powf(1.55)).max(MIN_NORMAL_EPSILON)
}

/// Unit surface normal at `p`
///
/// # Arguments
/// * `p` - Point on (or near) the surface
/// * `distance` - Distance from the camera used to pick the differencing step
/// * `resolution_y` - Image height in pixels
/// * `height_at` - Surface elevation under a world position
pub fn estimate_normal<F>(p: Vec3, distance: f32, resolution_y: f32, height_at: F) -> Vec3
where
    F: Fn(Vec3) -> f32,
{
    let eps = normal_epsilon(distance, resolution_y);

    Vec3::new(
        height_at(Vec3::new(p.x - eps, p.y, p.z)) - height_at(Vec3::new(p.x + eps, p.y, p.z)),
        2.0 * eps,
        height_at(Vec3::new(p.x, p.y, p.z - eps)) - height_at(Vec3::new(p.x, p.y, p.z + eps)),
    )
    .normalize()
}
