//! wgpu-backed render target
//!
//! Uploads generated buffer pairs into GPU vertex/index buffers and tracks
//! which meshes are currently part of the rendered scene. Device acquisition
//! is headless — no window surface is required, so the same path serves
//! offscreen rendering and tooling.

use crate::geometry::MeshBuffers;
use crate::gfx::target::{GfxError, MeshHandle, RenderTarget};
use log::debug;
use std::collections::HashMap;
use wgpu::util::DeviceExt;

/// A wgpu device/queue pair acquired without a window surface.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Acquires a device on the first suitable adapter.
    pub fn new() -> Result<Self, GfxError> {
        pollster::block_on(Self::request())
    }

    async fn request() -> Result<Self, GfxError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| GfxError::AdapterUnavailable)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("surfgen device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|err| GfxError::DeviceRequest(err.to_string()))?;

        Ok(Self { device, queue })
    }
}

/// GPU residency of one uploaded mesh.
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// [`RenderTarget`] implementation over a wgpu device.
pub struct WgpuTarget {
    context: GpuContext,
    meshes: HashMap<u64, GpuMesh>,
    attached: Vec<u64>,
    next_id: u64,
}

impl WgpuTarget {
    pub fn new(context: GpuContext) -> Self {
        Self {
            context,
            meshes: HashMap::new(),
            attached: Vec::new(),
            next_id: 0,
        }
    }

    /// Vertex layout of uploaded buffers: position-only Float32x3 at
    /// shader location 0.
    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }

    /// Meshes currently attached to the scene, in attach order.
    ///
    /// A draw pass binds each mesh's buffers and issues one indexed draw.
    pub fn attached_meshes(&self) -> impl Iterator<Item = &GpuMesh> {
        self.attached.iter().filter_map(|id| self.meshes.get(id))
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.context.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.context.queue
    }
}

impl RenderTarget for WgpuTarget {
    fn upload(&mut self, buffers: &MeshBuffers) -> Result<MeshHandle, GfxError> {
        let vertex_buffer =
            self.context
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("surfgen vertex buffer"),
                    contents: bytemuck::cast_slice(&buffers.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });

        let index_buffer =
            self.context
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("surfgen index buffer"),
                    contents: bytemuck::cast_slice(&buffers.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });

        let id = self.next_id;
        self.next_id += 1;
        self.meshes.insert(
            id,
            GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: buffers.indices.len() as u32,
            },
        );

        debug!(
            "uploaded mesh {}: {} vertices, {} indices",
            id,
            buffers.vertex_count(),
            buffers.indices.len()
        );
        Ok(MeshHandle::new(id))
    }

    fn attach(&mut self, handle: MeshHandle) -> Result<(), GfxError> {
        if !self.meshes.contains_key(&handle.id()) {
            return Err(GfxError::UnknownHandle(handle.id()));
        }
        if !self.attached.contains(&handle.id()) {
            self.attached.push(handle.id());
        }
        Ok(())
    }

    fn detach(&mut self, handle: MeshHandle) -> Result<(), GfxError> {
        if !self.meshes.contains_key(&handle.id()) {
            return Err(GfxError::UnknownHandle(handle.id()));
        }
        self.attached.retain(|&id| id != handle.id());
        Ok(())
    }

    fn dispose(&mut self, handle: MeshHandle) -> Result<(), GfxError> {
        let mesh = self
            .meshes
            .remove(&handle.id())
            .ok_or(GfxError::UnknownHandle(handle.id()))?;

        self.attached.retain(|&id| id != handle.id());
        mesh.vertex_buffer.destroy();
        mesh.index_buffer.destroy();
        debug!("disposed mesh {}", handle.id());
        Ok(())
    }
}
