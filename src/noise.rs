//! Tileable value-noise texture sampled with smooth bilinear interpolation.
//!
//! The texture holds one pseudo-random value in [0, 1] per texel. Sampling
//! between texels blends the four surrounding lattice values, so the result is
//! continuous everywhere and wraps around at the texture edges.

use std::path::Path;

use glam::Vec2;
use noise::{NoiseFn, Value};

/// Side length of the baked noise texture (texels)
pub const NOISE_TEXTURE_SIZE: usize = 256;

/// Precomputed noise lattice used as the source of every wave octave
#[derive(Debug, Clone)]
pub struct NoiseField {
    width: usize,
    height: usize,
    texels: Vec<f32>,
}

impl NoiseField {
    /// Bake a `size` x `size` texture from a seeded value-noise lattice
    pub fn generate(seed: u32, size: usize) -> Self {
        let size = size.max(1);
        let value = Value::new(seed);

        // Value noise evaluated on integer coordinates returns the raw lattice
        // value in [-1, 1], i.e. white noise per texel.
        let texels = (0..size * size)
            .map(|i| {
                let x = (i % size) as f64;
                let y = (i / size) as f64;
                let v = value.get([x, y]) as f32;
                ((v + 1.0) * 0.5).clamp(0.0, 1.0)
            })
            .collect();

        Self {
            width: size,
            height: size,
            texels,
        }
    }

    /// Load a noise texture from an image file (red channel)
    pub fn from_image(path: &Path) -> Result<Self, String> {
        let img = image::open(path)
            .map_err(|e| format!("Failed to load noise image {}: {}", path.display(), e))?
            .to_rgb32f();

        let (width, height) = img.dimensions();
        let texels = img.pixels().map(|p| p.0[0].clamp(0.0, 1.0)).collect();

        log::info!(
            "Loaded noise texture {} ({}x{})",
            path.display(),
            width,
            height
        );
        Self::from_texels(width as usize, height as usize, texels)
    }

    /// Wrap raw texel values (row-major, `width * height` entries in [0, 1])
    pub fn from_texels(width: usize, height: usize, texels: Vec<f32>) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "Noise texture must be non-empty, got {}x{}",
                width, height
            ));
        }
        if texels.len() != width * height {
            return Err(format!(
                "Noise texture has {} texels, expected {}x{} = {}",
                texels.len(),
                width,
                height,
                width * height
            ));
        }
        if let Some(i) = texels.iter().position(|t| !t.is_finite()) {
            return Err(format!("Noise texel {} is not finite", i));
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Raw texel value at an integer lattice point, wrapping at the edges
    pub fn texel(&self, x: i64, y: i64) -> f32 {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        self.texels[y * self.width + x]
    }

    /// Smooth noise at `p`, centred on zero (range [-0.5, 0.5])
    pub fn sample(&self, p: Vec2) -> f32 {
        let cell = p.floor();
        let f = p - cell;
        let u = f * f * (Vec2::splat(3.0) - 2.0 * f);

        let x = cell.x as i64;
        let y = cell.y as i64;
        let a = self.texel(x, y);
        let b = self.texel(x + 1, y);
        let c = self.texel(x, y + 1);
        let d = self.texel(x + 1, y + 1);

        a + (b - a) * u.x + (c - a) * u.y + (a - b - c + d) * u.x * u.y - 0.5
    }
}
