//! Animated ocean surface: height field, ray intersection and normals.

mod field;
mod march;
mod normal;

// Re-export public types
pub use field::HeightField;
pub use march::{bisect, find_intersection, plane_intersection};
pub use normal::{estimate_normal, normal_epsilon};
