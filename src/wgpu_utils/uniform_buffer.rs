//! Typed uniform-buffer wrapper
//!
//! Holds one `Pod` value in a GPU uniform buffer and keeps the last written
//! bytes around so a per-frame update that changed nothing skips the queue
//! write entirely.

use std::marker::PhantomData;

/// A GPU uniform buffer holding one value of type `Content`.
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    last_written: Vec<u8>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    fn name() -> &'static str {
        let type_name = std::any::type_name::<Content>();
        type_name.rsplit(':').next().unwrap_or(type_name)
    }

    /// Creates the buffer with an initial value.
    pub fn new_with_data(device: &wgpu::Device, initial_content: &Content) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("UniformBuffer: {}", Self::name())),
            size: std::mem::size_of::<Content>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: true,
        });

        buffer
            .slice(..)
            .get_mapped_range_mut()
            .clone_from_slice(bytemuck::bytes_of(initial_content));
        buffer.unmap();

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            last_written: bytemuck::bytes_of(initial_content).to_vec(),
        }
    }

    /// Writes a new value, skipping the queue write when unchanged.
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let new_content = bytemuck::bytes_of(&content);
        if self.last_written == new_content {
            return;
        }
        queue.write_buffer(&self.buffer, 0, new_content);
        self.last_written = new_content.to_vec();
    }

    /// Binding resource for bind group creation.
    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Buffer size in bytes.
    pub fn size(&self) -> u64 {
        self.buffer.size()
    }
}
