//! Per-pixel ocean kernel and parallel CPU frame rendering.
//!
//! Every pixel is an independent, side-effect-free evaluation of
//! (pixel, time, camera, resolution) -> colour. Frames are rendered by
//! splitting the image into scanlines and shading them on the rayon pool.

use std::path::Path;
use std::time::Instant;

use glam::{Vec2, Vec3, Vec3Swizzles, Vec4};
use image::RgbaImage;
use rayon::prelude::*;

use crate::camera::{Camera, Ray};
use crate::lighting::{shade_surface, SurfaceHit};
use crate::ocean::{estimate_normal, find_intersection, HeightField};
use crate::params::{LightingParams, MarchParams, RenderConfig};
use crate::sky::{sky_colour, sun_glow};
use crate::tonemap::{to_rgba, to_rgba8, tonemap};

/// Sub-pixel offsets of the 2x2 supersampling grid
const AA_OFFSETS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, 0.5),
    Vec2::new(0.5, 0.0),
    Vec2::new(0.5, 0.5),
];

/// Distance to the water along `ray`, or `march.max_dist`
///
/// Only rays pointing down can reach the water; any other ray is a miss
/// without sampling the surface.
pub fn water_distance<F>(ray: &Ray, march: &MarchParams, ceiling_m: f32, height_at: F) -> f32
where
    F: Fn(Vec3) -> f32,
{
    if ray.direction.y < 0.0 {
        find_intersection(ray.origin, ray.direction, march, ceiling_m, height_at)
    } else {
        march.max_dist
    }
}

/// Everything that changes between frames
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs {
    /// Elapsed time (seconds)
    pub time_s: f32,
    /// Image width (pixels)
    pub width: u32,
    /// Image height (pixels)
    pub height: u32,
    pub camera: Camera,
}

impl FrameInputs {
    pub fn new(time_s: f32, render_config: &RenderConfig, camera: Camera) -> Self {
        Self {
            time_s,
            width: render_config.width,
            height: render_config.height,
            camera,
        }
    }

    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Outcome of tracing a single ray (linear HDR colour)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trace {
    /// No water along the ray
    Sky { colour: Vec3 },
    /// Ray hit the water
    Water { colour: Vec3, hit: SurfaceHit },
}

impl Trace {
    pub fn colour(&self) -> Vec3 {
        match self {
            Trace::Sky { colour } | Trace::Water { colour, .. } => *colour,
        }
    }
}

/// Ocean renderer holding the immutable scene description
pub struct OceanRenderer {
    field: HeightField,
    lighting: LightingParams,
    march: MarchParams,
    light_dir: Vec3,
    antialias: bool,
}

impl OceanRenderer {
    pub fn new(field: HeightField, lighting: LightingParams, march: MarchParams) -> Self {
        let light_dir = lighting.sun_direction();
        Self {
            field,
            lighting,
            march,
            light_dir,
            antialias: false,
        }
    }

    /// Average a 2x2 sub-pixel grid per pixel
    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    pub fn field(&self) -> &HeightField {
        &self.field
    }

    /// Trace one ray against the water at `frame.time_s`
    pub fn trace(&self, ray: &Ray, frame: &FrameInputs) -> Trace {
        let waves = self.field.params();
        let max_dist = self.march.max_dist;

        let dist = water_distance(
            ray,
            &self.march,
            waves.ceiling_m(self.march.ceiling_factor),
            |p| self.field.height(p, frame.time_s, waves.shape_octaves),
        );

        if dist >= max_dist {
            return Trace::Sky {
                colour: sky_colour(ray.direction, self.lighting.sky_colour),
            };
        }

        let position = ray.at(dist);
        let xz_dist = (ray.origin.xz() - position.xz()).length();
        let limit = waves.normal_octaves_at(xz_dist, max_dist);
        let normal = estimate_normal(position, xz_dist, frame.height as f32, |p| {
            self.field.height(p, frame.time_s, limit)
        });

        let hit = SurfaceHit {
            position,
            normal,
            distance: dist,
        };
        let colour = shade_surface(
            ray,
            &hit,
            self.light_dir,
            &self.lighting,
            waves.height_m,
            max_dist,
        );

        Trace::Water { colour, hit }
    }

    /// Display colour (RGBA, alpha 1) of the pixel at `frag_coord`
    ///
    /// `frag_coord` is in pixels with the origin at the bottom-left corner.
    pub fn shade_pixel(&self, frag_coord: Vec2, frame: &FrameInputs) -> Vec4 {
        let offsets: &[Vec2] = if self.antialias {
            &AA_OFFSETS
        } else {
            &AA_OFFSETS[..1]
        };
        let resolution = frame.resolution();

        let mut colour = Vec3::ZERO;
        let mut sky_visible = false;
        let mut last_dir = Vec3::NEG_Z;

        for offset in offsets {
            let ray = frame.camera.ray(frag_coord + *offset, resolution);
            let trace = self.trace(&ray, frame);
            sky_visible |= matches!(trace, Trace::Sky { .. });
            colour += trace.colour();
            last_dir = ray.direction;
        }
        colour /= offsets.len() as f32;

        // Sun disk, added once after averaging
        if sky_visible {
            colour += sun_glow(last_dir, self.light_dir, &self.lighting);
        }

        to_rgba(tonemap(colour))
    }

    /// Render a full frame on the rayon thread pool
    pub fn render_frame(&self, frame: &FrameInputs) -> RgbaImage {
        let start = Instant::now();
        let mut image = RgbaImage::new(frame.width, frame.height);
        if frame.width == 0 || frame.height == 0 {
            return image;
        }
        let row_len = frame.width as usize * 4;
        let height = frame.height;

        let buffer: &mut [u8] = &mut image;
        buffer
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, pixels)| {
                // Image rows run top-down, pixel coordinates bottom-up
                let y = (height - 1 - row as u32) as f32 + 0.5;
                for (x, pixel) in pixels.chunks_exact_mut(4).enumerate() {
                    let frag_coord = Vec2::new(x as f32 + 0.5, y);
                    pixel.copy_from_slice(&to_rgba8(self.shade_pixel(frag_coord, frame)));
                }
            });

        log::debug!(
            "Rendered {}x{} frame at t={:.2}s in {:.1}ms",
            frame.width,
            frame.height,
            frame.time_s,
            start.elapsed().as_secs_f64() * 1000.0
        );

        image
    }
}

/// Save a rendered frame as PNG
pub fn save_frame(image: &RgbaImage, path: &Path) -> Result<(), String> {
    image
        .save(path)
        .map_err(|e| format!("Failed to save frame {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::camera::CameraSystem;
    use crate::noise::{NoiseField, NOISE_TEXTURE_SIZE};
    use crate::params::{CameraPreset, WaveParams};

    fn renderer() -> OceanRenderer {
        let field = HeightField::new(
            NoiseField::generate(42, NOISE_TEXTURE_SIZE),
            WaveParams::default(),
        );
        OceanRenderer::new(field, LightingParams::default(), MarchParams::default())
    }

    fn frame(width: u32, height: u32) -> FrameInputs {
        let camera = CameraSystem::new(CameraPreset::default()).camera(0.0, Vec2::ZERO, 40.0);
        FrameInputs {
            time_s: 0.0,
            width,
            height,
            camera,
        }
    }

    #[test]
    fn test_straight_down_hits_water() {
        let renderer = renderer();
        let frame = frame(64, 64);
        let ray = Ray {
            origin: Vec3::new(0.0, 50.0, 0.0),
            direction: Vec3::NEG_Y,
        };

        match renderer.trace(&ray, &frame) {
            Trace::Water { colour, hit } => {
                assert!((hit.distance - 50.0).abs() <= 24.0, "distance {}", hit.distance);
                assert!((hit.normal.length() - 1.0).abs() < 1e-5);
                assert!(hit.normal.y > 0.0);
                assert!(colour.is_finite());
            }
            sky => panic!("expected a water hit, got {:?}", sky),
        }
    }

    #[test]
    fn test_upward_ray_returns_sky() {
        let renderer = renderer();
        let frame = frame(64, 64);
        let dir = Vec3::new(0.2, 0.4, 1.0).normalize();
        let ray = Ray {
            origin: Vec3::new(0.0, 50.0, 0.0),
            direction: dir,
        };

        let trace = renderer.trace(&ray, &frame);
        assert_eq!(
            trace,
            Trace::Sky {
                colour: sky_colour(dir, LightingParams::default().sky_colour)
            }
        );
    }

    #[test]
    fn test_non_descending_rays_skip_the_surface() {
        let march = MarchParams::default();
        let samples = Cell::new(0);
        let counted = |_: Vec3| {
            samples.set(samples.get() + 1);
            0.0
        };

        for dir in [Vec3::Y, Vec3::Z, Vec3::new(0.3, 0.2, -1.0).normalize()] {
            let ray = Ray {
                origin: Vec3::new(0.0, 50.0, 0.0),
                direction: dir,
            };
            let d = water_distance(&ray, &march, 26.4, counted);
            assert_eq!(d, march.max_dist);
            assert_eq!(samples.get(), 0, "surface sampled for direction {:?}", dir);
        }

        let down = Ray {
            origin: Vec3::new(0.0, 50.0, 0.0),
            direction: Vec3::NEG_Y,
        };
        let d = water_distance(&down, &march, 26.4, |_| {
            samples.set(samples.get() + 1);
            0.0
        });
        assert!((d - 50.0).abs() < 1e-2, "distance {}", d);
        assert!(samples.get() > 0);
    }

    #[test]
    fn test_pixel_evaluation_is_deterministic() {
        let renderer = renderer();
        let frame = frame(160, 90);
        for &coord in &[Vec2::new(80.5, 10.5), Vec2::new(3.5, 44.5), Vec2::new(150.5, 85.5)] {
            let a = renderer.shade_pixel(coord, &frame);
            let b = renderer.shade_pixel(coord, &frame);
            assert_eq!(a.to_array().map(f32::to_bits), b.to_array().map(f32::to_bits));
        }
    }

    #[test]
    fn test_pixel_colour_is_displayable() {
        let renderer = renderer().with_antialias(true);
        let frame = frame(160, 90);
        for y in (0..90).step_by(9) {
            let c = renderer.shade_pixel(Vec2::new(80.5, y as f32 + 0.5), &frame);
            assert_eq!(c.w, 1.0);
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0, "{:?}", c);
        }
    }

    #[test]
    fn test_antialias_close_to_single_sample_in_open_sky() {
        let plain = renderer();
        let smooth = renderer().with_antialias(true);
        let mut frame = frame(64, 64);
        frame.camera = Camera::look_at(Vec3::new(0.0, 50.0, 0.0), Vec3::new(0.0, 1.0, 0.3), 40.0);

        let coord = Vec2::new(32.5, 32.5);
        let a = plain.shade_pixel(coord, &frame);
        let b = smooth.shade_pixel(coord, &frame);
        assert!((a - b).abs().max_element() < 0.02, "{:?} vs {:?}", a, b);
    }

    #[test]
    fn test_render_frame_sky_above_water_below() {
        let renderer = renderer();
        let frame = frame(32, 18);

        let first = renderer.render_frame(&frame);
        let second = renderer.render_frame(&frame);
        assert_eq!(first.dimensions(), (32, 18));
        assert_eq!(first.as_raw(), second.as_raw());
        assert!(first.pixels().all(|p| p.0[3] == 255));

        // Default camera looks slightly down: sky on the top row, water on the bottom
        let top = first.get_pixel(16, 0).0;
        let bottom = first.get_pixel(16, 17).0;
        assert!(top[2] > top[0], "top pixel {:?} is not sky blue", top);
        assert_ne!(top, bottom);

        let top_ray = frame.camera.ray(Vec2::new(16.5, 17.5), frame.resolution());
        let bottom_ray = frame.camera.ray(Vec2::new(16.5, 0.5), frame.resolution());
        assert!(matches!(renderer.trace(&top_ray, &frame), Trace::Sky { .. }));
        assert!(matches!(renderer.trace(&bottom_ray, &frame), Trace::Water { .. }));
    }

    #[test]
    fn test_render_empty_frame() {
        let renderer = renderer();

        let image = renderer.render_frame(&frame(0, 4));
        assert_eq!(image.dimensions(), (0, 4));
        assert!(image.as_raw().is_empty());

        let image = renderer.render_frame(&frame(4, 0));
        assert_eq!(image.dimensions(), (4, 0));
    }

    #[test]
    fn test_save_frame_writes_png() {
        let renderer = renderer();
        let frame = frame(8, 4);
        let image = renderer.render_frame(&frame);

        let path = std::env::temp_dir().join("oceanmarch_frame_test.png");
        save_frame(&image, &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.as_raw(), image.as_raw());

        let _ = std::fs::remove_file(&path);
    }
}
