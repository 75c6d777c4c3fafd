//! Water-surface facade
//!
//! Owns the fixed high-resolution plane the wave shader displaces and the
//! uniform set it reads. The plane is generated once at construction and
//! never rebuilt: every visual change flows through the uniforms — `time`
//! each frame, the four tunables on configuration change.

use crate::config::WaterConfig;
use crate::geometry::{plane_indices, plane_vertices, MeshBuffers};
use crate::water::uniforms::WaveUniforms;
use crate::wgpu_utils::UniformBuffer;
use log::debug;

/// Extent of the water plane along both axes, in world units.
pub const PLANE_EXTENT: f32 = 100.0;
/// Subdivisions of the water plane along both axes.
pub const PLANE_SEGMENTS: u32 = 2000;

/// The water surface: a dense plane plus the wave uniforms evaluated over it.
pub struct WaterSurface {
    buffers: MeshBuffers,
    uniforms: WaveUniforms,
}

impl WaterSurface {
    /// Builds the surface at the standard plane density.
    ///
    /// `elapsed_seconds` seeds the initial `time` uniform so the first frame
    /// starts from the current clock reading rather than zero.
    pub fn new(config: &WaterConfig, elapsed_seconds: f32) -> Self {
        Self::with_plane(PLANE_EXTENT, PLANE_SEGMENTS, config, elapsed_seconds)
    }

    /// Builds the surface with an explicit plane extent and density.
    pub fn with_plane(
        extent: f32,
        segments: u32,
        config: &WaterConfig,
        elapsed_seconds: f32,
    ) -> Self {
        let buffers = MeshBuffers {
            vertices: plane_vertices(extent, extent, segments, segments),
            indices: plane_indices(segments, segments),
        };
        debug!(
            "water plane: {} vertices, {} triangles",
            buffers.vertex_count(),
            buffers.triangle_count()
        );

        Self {
            buffers,
            uniforms: WaveUniforms::new(config, elapsed_seconds),
        }
    }

    /// The fixed plane buffers. Never regenerated.
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Current uniform values.
    pub fn uniforms(&self) -> &WaveUniforms {
        &self.uniforms
    }

    /// Per-frame update: advances only the `time` uniform. No allocation.
    pub fn tick(&mut self, elapsed_seconds: f32) {
        self.uniforms.tick(elapsed_seconds);
    }

    /// Applies an edited configuration to the uniforms.
    ///
    /// Safe to call from a change-event callback at any frame boundary; the
    /// render loop and the callback share one thread, so the next uniform
    /// read simply observes whichever update ran last.
    pub fn apply_config(&mut self, config: &WaterConfig) {
        debug!(
            "water config: speed={} iterations={} amplitude={} frequency={}",
            config.speed,
            config.iteration_count,
            config.amplitude_multiplier,
            config.frequency_multiplier
        );
        self.uniforms.apply_config(config);
    }

    /// Pushes the current uniform values to their GPU buffer.
    ///
    /// Call once per frame after [`tick`](Self::tick); unchanged values cost
    /// nothing beyond the byte comparison.
    pub fn sync_gpu(&self, queue: &wgpu::Queue, buffer: &mut UniformBuffer<WaveUniforms>) {
        buffer.update_content(queue, self.uniforms);
    }
}
