//! Filmic tone mapping and display encoding.

use glam::{Vec3, Vec4};

const GAMMA: f32 = 2.2;

/// ACES filmic curve (Narkowicz fit), clamped to [0, 1]
pub fn aces_film(x: Vec3) -> Vec3 {
    ((x * (2.51 * x + 0.03)) / (x * (2.43 * x + 0.59) + 0.14)).clamp(Vec3::ZERO, Vec3::ONE)
}

/// HDR linear colour to display colour
pub fn tonemap(hdr: Vec3) -> Vec3 {
    aces_film(hdr).powf(1.0 / GAMMA)
}

/// Display colour as opaque RGBA
pub fn to_rgba(colour: Vec3) -> Vec4 {
    colour.extend(1.0)
}

/// Quantise a display colour in [0, 1] to 8 bits per channel
pub fn to_rgba8(colour: Vec4) -> [u8; 4] {
    let c = (colour.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_stays_black() {
        assert_eq!(tonemap(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_output_in_unit_range() {
        for &v in &[0.0, 1e-4, 0.1, 0.5, 1.0, 4.0, 100.0, 1e6] {
            let c = tonemap(Vec3::splat(v));
            assert!(
                c.min_element() >= 0.0 && c.max_element() <= 1.0,
                "{} mapped to {:?}",
                v,
                c
            );
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = 0.0;
        for i in 1..2000 {
            let v = i as f32 * 0.01;
            let c = tonemap(Vec3::splat(v)).x;
            assert!(c >= prev, "not monotonic at {}: {} < {}", v, c, prev);
            prev = c;
        }
        // Bright input saturates to white
        assert_eq!(tonemap(Vec3::splat(50.0)), Vec3::ONE);
    }

    #[test]
    fn test_rgba8_alpha_opaque() {
        assert_eq!(to_rgba8(to_rgba(Vec3::ONE)), [255, 255, 255, 255]);
        assert_eq!(to_rgba8(to_rgba(Vec3::ZERO)), [0, 0, 0, 255]);
        assert_eq!(to_rgba8(to_rgba(Vec3::new(0.5, 2.0, -1.0))), [128, 255, 0, 255]);
    }
}
