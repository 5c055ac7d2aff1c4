//! Wave shape parameters for the ocean height field.

/// Hard upper bound on FBM octaves. Loops over octaves never exceed this.
pub const MAX_OCTAVES: usize = 9;

/// Wave height field parameters
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Peak wave elevation in meters (HEIGHT). The surface stays within ±height_m.
    pub height_m: f32,

    /// Horizontal frequency scale applied to world xz before noise lookup (1/meters)
    pub scale: f32,

    /// Advection speed of the noise layers (noise texels per second, per octave weight)
    pub wave_speed: f32,

    /// Rotation applied to the sampling position between octaves (radians)
    pub octave_rotation_rad: f32,

    /// Frequency multiplier per octave
    pub lacunarity: f32,

    /// Amplitude multiplier per octave
    pub gain: f32,

    /// Octaves used while searching for the surface (coarse envelope)
    pub shape_octaves: usize,

    /// Octaves used for surface normals close to the camera
    pub normal_octaves: usize,

    /// Octaves used for surface normals far from the camera
    pub far_normal_octaves: usize,

    /// Fraction of the march distance beyond which far_normal_octaves is used
    pub far_normal_fraction: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            height_m: 24.0,
            scale: 0.035,
            wave_speed: 0.005,
            octave_rotation_rad: 3.14,
            lacunarity: 1.75,
            gain: 0.5,
            shape_octaves: 3,
            normal_octaves: 8,
            far_normal_octaves: 4,
            far_normal_fraction: 0.3,
        }
    }
}

impl WaveParams {
    /// Height of the flat plane above every possible crest; marching starts there
    pub fn ceiling_m(&self, ceiling_factor: f32) -> f32 {
        ceiling_factor * self.height_m
    }

    /// Pick the normal octave budget for a hit at `xz_distance` from the camera
    pub fn normal_octaves_at(&self, xz_distance: f32, max_dist: f32) -> usize {
        if xz_distance > self.far_normal_fraction * max_dist {
            self.far_normal_octaves
        } else {
            self.normal_octaves
        }
    }

    /// Validate configuration (octave budgets within MAX_OCTAVES, positive extents)
    pub fn validate(&self) -> Result<(), String> {
        if !(self.height_m > 0.0) {
            return Err(format!("Wave height must be > 0, got {}", self.height_m));
        }
        if !(self.scale > 0.0) {
            return Err(format!("Wave scale must be > 0, got {}", self.scale));
        }
        if !(self.gain > 0.0 && self.gain <= 0.5) {
            // Gain above 0.5 lets the octave sum leave [-height_m, height_m]
            return Err(format!("Octave gain must be in (0, 0.5], got {}", self.gain));
        }
        for (name, octaves) in [
            ("shape", self.shape_octaves),
            ("normal", self.normal_octaves),
            ("far normal", self.far_normal_octaves),
        ] {
            if octaves == 0 || octaves > MAX_OCTAVES {
                return Err(format!(
                    "{} octaves must be in 1..={}, got {}",
                    name, MAX_OCTAVES, octaves
                ));
            }
        }
        Ok(())
    }
}
