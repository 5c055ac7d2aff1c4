//! Oceanmarch - Raymarched procedural ocean
//!
//! Waves are a fractal sum of noise octaves; every pixel marches a camera ray
//! onto them and shades the hit with sun, sky, scattering and reflection.

use std::time::Instant;

use clap::Parser;

use oceanmarch::camera::CameraSystem;
use oceanmarch::cli::Args;
use oceanmarch::noise::{NoiseField, NOISE_TEXTURE_SIZE};
use oceanmarch::ocean::HeightField;
use oceanmarch::params::{LightingParams, MarchParams, WaveParams};
use oceanmarch::rendering::{save_frame, FrameInputs, OceanRenderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    println!("Oceanmarch - Raymarched procedural ocean");
    println!("Initializing scene...\n");

    // Configuration
    let render_config = args.render_config();
    let waves = WaveParams::default();
    let lighting = LightingParams::default();
    let march = MarchParams::default();
    render_config.validate()?;
    waves.validate()?;
    lighting.validate()?;
    march.validate()?;

    // Scene
    let noise = match &args.noise_image {
        Some(path) => NoiseField::from_image(path)?,
        None => NoiseField::generate(args.seed, NOISE_TEXTURE_SIZE),
    };
    let field = HeightField::new(noise, waves);
    let renderer =
        OceanRenderer::new(field, lighting, march).with_antialias(render_config.antialias);
    let camera = CameraSystem::new(args.parse_camera_preset());
    let pointer = args.pointer();

    let start = Instant::now();

    match args.create_recording_config() {
        Some(recording) => {
            recording.validate()?;
            std::fs::create_dir_all(recording.frames_dir())?;

            let total = recording.total_frames();
            log::info!(
                "Rendering {} frames at {} fps into {}",
                total,
                recording.fps,
                recording.frames_dir().display()
            );

            for index in 0..total {
                let time_s = recording.frame_time_s(index);
                let frame = FrameInputs::new(
                    time_s,
                    &render_config,
                    camera.camera(time_s, pointer, render_config.fov_degrees),
                );
                let image = renderer.render_frame(&frame);
                save_frame(&image, &recording.frame_path(index))?;
                log::info!("Frame {}/{} (t={:.2}s)", index + 1, total, time_s);
            }

            println!("  Output: {}", recording.frames_dir().display());
            println!("  Frames: {}", total);
        }
        None => {
            let frame = FrameInputs::new(
                args.time,
                &render_config,
                camera.camera(args.time, pointer, render_config.fov_degrees),
            );
            let image = renderer.render_frame(&frame);
            save_frame(&image, &args.output)?;

            println!("  Output: {}", args.output.display());
        }
    }

    println!("  Size: {}x{}", render_config.width, render_config.height);
    println!("  Time: {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
