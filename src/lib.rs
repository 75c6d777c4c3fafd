// src/lib.rs
//! Surfgen
//!
//! Procedural generation of parametric surface meshes (box, plane, sphere,
//! cylinder, torus) and a time-driven wave-surface uniform pipeline, built
//! on wgpu.

pub mod config;
pub mod geometry;
pub mod gfx;
pub mod water;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use config::{ConfigSource, MeshConfig, WaterConfig};
pub use geometry::{MeshBuffers, ShapeKind};
pub use gfx::{GeneratedMesh, MeshHandle, RenderTarget};
pub use water::{WaterSurface, WaveUniforms};
