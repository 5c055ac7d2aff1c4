//! Ray / wave surface intersection.
//!
//! Rays are marched against an implicit height function: each step advances
//! by a fraction of the vertical gap to the surface below the sample point.
//! Once a sample ends up under the water, the crossing is bracketed between
//! the last two samples and refined by bisection.

use glam::Vec3;

use crate::params::MarchParams;

/// Distance along a ray to a plane, if the plane is hit in front of the origin
///
/// Rays nearly parallel to the plane, or approaching it from behind its
/// normal, count as misses.
pub fn plane_intersection(origin: Vec3, dir: Vec3, plane_point: Vec3, normal: Vec3) -> Option<f32> {
    let denom = normal.dot(dir);
    if denom > 1e-6 {
        let t = (plane_point - origin).dot(normal) / denom;
        if t >= 0.0 {
            return Some(t);
        }
    }
    None
}

/// Distance along the ray to the first surface crossing, or `march.max_dist`
///
/// A ray that runs out of `march.max_steps` before passing `march.max_dist`
/// is reported as a miss too. Grazing rays near the horizon take many short
/// steps, so a few of them can come back as sky pixels scattered among water.
///
/// # Arguments
/// * `origin` - Ray origin (camera position)
/// * `dir` - Unit ray direction
/// * `march` - Step budget and tolerances
/// * `ceiling_m` - Height of a plane above every possible crest
/// * `height_at` - Surface elevation under a world position
pub fn find_intersection<F>(
    origin: Vec3,
    dir: Vec3,
    march: &MarchParams,
    ceiling_m: f32,
    height_at: F,
) -> f32
where
    F: Fn(Vec3) -> f32,
{
    // Nothing to hit above the crests: skip straight to the ceiling plane
    let mut dist = plane_intersection(
        origin,
        dir,
        Vec3::new(0.0, ceiling_m, 0.0),
        Vec3::NEG_Y,
    )
    .unwrap_or(0.0);
    let mut step_size = 0.0;

    for i in 0..march.max_steps {
        let p = origin + dir * dist;
        let height = height_at(p);
        let diff = (p.y - height).abs();

        if diff < march.epsilon {
            return dist;
        }

        if p.y < height {
            if i == 0 {
                // Origin is under the water; the surface is never seen from below
                return march.max_dist;
            }
            return bisect(origin, dir, dist - step_size, dist, march, &height_at);
        }

        step_size = diff * march.step_relaxation;
        dist += step_size;

        if dist > march.max_dist {
            return march.max_dist;
        }
    }

    march.max_dist
}

/// Refine a surface crossing known to lie in `[near, far]` along the ray
///
/// Returns the final bracket midpoint. Stops early once the sample is within
/// `march.epsilon` of the surface.
pub fn bisect<F>(origin: Vec3, dir: Vec3, near: f32, far: f32, march: &MarchParams, height_at: F) -> f32
where
    F: Fn(Vec3) -> f32,
{
    let mut near = near;
    let mut far = far;
    let mut midpoint = (far + near) * 0.5;

    for _ in 0..march.bisection_steps {
        let p = origin + dir * midpoint;
        let diff = p.y - height_at(p);

        if diff.abs() < march.epsilon {
            break;
        }

        // Compared against epsilon rather than zero, as the reference renders
        // were produced. Past the check above |diff| >= epsilon, so both read
        // the same except at diff == epsilon exactly.
        if diff < march.epsilon {
            // Below the surface: crossing is in the near half
            far = midpoint;
        } else {
            near = midpoint;
        }
        midpoint = (far + near) * 0.5;
    }

    midpoint
}
