//! Oceanmarch library - Raymarched procedural ocean renderer

pub mod camera;
pub mod cli;
pub mod lighting;
pub mod noise;
pub mod ocean;
pub mod params;
pub mod rendering;
pub mod sky;
pub mod tonemap;
