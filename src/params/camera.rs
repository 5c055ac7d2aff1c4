//! Camera configuration and presets.

/// Fixed camera position
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (meters)
    pub position: [f32; 3],

    /// Look-at target (meters)
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 60.0, -250.0], // Well above the crests, facing the sun
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Pointer-driven orbit around the world origin
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Distance from the origin (meters)
    pub radius_m: f32,

    /// Elevation with the pointer at the bottom edge (degrees above horizon)
    pub min_elevation_deg: f32,

    /// Elevation with the pointer at the top edge (degrees above horizon)
    pub max_elevation_deg: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius_m: 260.0,
            min_elevation_deg: 8.0, // Never dip below the crests
            max_elevation_deg: 80.0,
        }
    }
}

/// Straight-line flight at constant altitude
#[derive(Debug, Clone)]
pub struct DriftCamera {
    /// Constant altitude (meters)
    pub altitude_m: f32,

    /// Forward movement speed (meters per second)
    pub forward_speed_m_per_s: f32,

    /// Look-ahead distance (meters)
    pub look_ahead_m: f32,
}

impl Default for DriftCamera {
    fn default() -> Self {
        Self {
            altitude_m: 45.0,
            forward_speed_m_per_s: 12.0,
            look_ahead_m: 150.0,
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Fixed preset: stationary camera looking at a target
    Fixed(FixedCamera),

    /// Orbit preset: yaw and elevation follow the pointer
    Orbit(OrbitCamera),

    /// Drift preset: moves forward over the water with time
    Drift(DriftCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Fixed(FixedCamera::default())
    }
}
