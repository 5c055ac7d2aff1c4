//! Fractal wave height field built from octaves of the noise texture.

use glam::{Mat2, Vec2, Vec3, Vec3Swizzles};

use crate::noise::NoiseField;
use crate::params::{WaveParams, MAX_OCTAVES};

/// Animated ocean surface: elevation as a function of (x, z) and time
#[derive(Debug, Clone)]
pub struct HeightField {
    noise: NoiseField,
    params: WaveParams,
    rotation: Mat2,
}

impl HeightField {
    pub fn new(noise: NoiseField, params: WaveParams) -> Self {
        let (s, c) = params.octave_rotation_rad.sin_cos();
        // Applied to row vectors: xz' = (c*x + s*z, -s*x + c*z)
        let rotation = Mat2::from_cols(Vec2::new(c, -s), Vec2::new(s, c));
        Self {
            noise,
            params,
            rotation,
        }
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Rotation between consecutive octaves
    pub fn octave_rotation(&self) -> Mat2 {
        self.rotation
    }

    /// Sum of `limit` noise octaves at `xz` (noise space), within (-1, 1)
    ///
    /// Lower octaves drift faster than higher ones, so the large swells and the
    /// fine chop move at different speeds.
    pub fn fbm(&self, mut xz: Vec2, time_s: f32, limit: usize) -> f32 {
        let mut res = 0.0;
        let mut freq = 1.0;
        let mut amp = 1.0;

        for i in 0..limit.min(MAX_OCTAVES) {
            let drift = time_s * self.params.wave_speed * (MAX_OCTAVES - i + 1) as f32;
            res += self.noise.sample(freq * (xz + Vec2::splat(drift))) * amp;

            freq *= self.params.lacunarity;
            amp *= self.params.gain;

            xz = self.rotation * xz;
        }
        res
    }

    /// Wave elevation (meters) under `pos`; only x and z are used
    pub fn height(&self, pos: Vec3, time_s: f32, limit: usize) -> f32 {
        self.params.height_m * self.fbm(self.params.scale * pos.xz(), time_s, limit)
    }
}
