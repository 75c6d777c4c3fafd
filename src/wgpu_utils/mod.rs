// src/wgpu_utils/mod.rs
//! WGPU utility helpers
//!
//! Convenient wrappers for common wgpu operations.

pub mod uniform_buffer;

pub use uniform_buffer::UniformBuffer;
