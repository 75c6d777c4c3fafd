//! Generated-mesh facade
//!
//! Manages the lifecycle of one procedurally generated mesh on a render
//! target: initial generation, and regeneration whenever the shape or
//! resolution configuration changes.

use crate::config::MeshConfig;
use crate::geometry::MeshBuffers;
use crate::gfx::target::{GfxError, MeshHandle, RenderTarget};
use log::debug;

/// One generated mesh and the configuration it was built from.
///
/// Regeneration follows acquire-then-release: the replacement buffers are
/// built, uploaded and attached before the previous mesh is detached and
/// disposed, so no frame renders without a mesh. If the upload or attach of
/// the replacement fails, the previous mesh stays in place untouched.
pub struct GeneratedMesh {
    handle: Option<MeshHandle>,
    config: MeshConfig,
}

impl GeneratedMesh {
    /// Generates the initial mesh and attaches it to the target.
    pub fn new(target: &mut dyn RenderTarget, config: MeshConfig) -> Result<Self, GfxError> {
        let buffers = MeshBuffers::generate(config.shape, config.resolution);
        let handle = target.upload(&buffers)?;
        target.attach(handle)?;

        Ok(Self { handle: Some(handle), config })
    }

    /// Regenerates the mesh for a new configuration.
    ///
    /// Generation is synchronous and completes within the calling
    /// change-event handler; the old resource is released only after the new
    /// one is live.
    pub fn rebuild(
        &mut self,
        target: &mut dyn RenderTarget,
        config: MeshConfig,
    ) -> Result<(), GfxError> {
        debug!(
            "rebuilding mesh: shape={:?} resolution={}",
            config.shape, config.resolution
        );

        let buffers = MeshBuffers::generate(config.shape, config.resolution);
        let new_handle = target.upload(&buffers)?;
        target.attach(new_handle)?;

        if let Some(old) = self.handle.take() {
            target.detach(old)?;
            target.dispose(old)?;
        }

        self.handle = Some(new_handle);
        self.config = config;
        Ok(())
    }

    /// Detaches and releases the mesh.
    pub fn release(&mut self, target: &mut dyn RenderTarget) -> Result<(), GfxError> {
        if let Some(handle) = self.handle.take() {
            target.detach(handle)?;
            target.dispose(handle)?;
        }
        Ok(())
    }

    /// Handle of the currently attached mesh, if any.
    pub fn handle(&self) -> Option<MeshHandle> {
        self.handle
    }

    /// Configuration the current mesh was generated from.
    pub fn config(&self) -> MeshConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeKind;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Upload(u64),
        Attach(u64),
        Detach(u64),
        Dispose(u64),
    }

    /// In-memory target that records every lifecycle call.
    #[derive(Default)]
    struct RecordingTarget {
        next_id: u64,
        live: HashMap<u64, MeshBuffers>,
        attached: Vec<u64>,
        ops: Vec<Op>,
        fail_uploads: bool,
    }

    impl RenderTarget for RecordingTarget {
        fn upload(&mut self, buffers: &MeshBuffers) -> Result<MeshHandle, GfxError> {
            if self.fail_uploads {
                return Err(GfxError::DeviceRequest("simulated loss".into()));
            }
            let id = self.next_id;
            self.next_id += 1;
            self.live.insert(id, buffers.clone());
            self.ops.push(Op::Upload(id));
            Ok(MeshHandle::new(id))
        }

        fn attach(&mut self, handle: MeshHandle) -> Result<(), GfxError> {
            if !self.live.contains_key(&handle.id()) {
                return Err(GfxError::UnknownHandle(handle.id()));
            }
            self.attached.push(handle.id());
            self.ops.push(Op::Attach(handle.id()));
            Ok(())
        }

        fn detach(&mut self, handle: MeshHandle) -> Result<(), GfxError> {
            if !self.live.contains_key(&handle.id()) {
                return Err(GfxError::UnknownHandle(handle.id()));
            }
            self.attached.retain(|&id| id != handle.id());
            self.ops.push(Op::Detach(handle.id()));
            Ok(())
        }

        fn dispose(&mut self, handle: MeshHandle) -> Result<(), GfxError> {
            if self.live.remove(&handle.id()).is_none() {
                return Err(GfxError::UnknownHandle(handle.id()));
            }
            self.ops.push(Op::Dispose(handle.id()));
            Ok(())
        }
    }

    fn config(shape: ShapeKind, resolution: u32) -> MeshConfig {
        MeshConfig { shape: Some(shape), resolution }
    }

    #[test]
    fn new_uploads_and_attaches() {
        let mut target = RecordingTarget::default();
        let mesh = GeneratedMesh::new(&mut target, config(ShapeKind::Box, 1)).unwrap();

        assert_eq!(target.ops, vec![Op::Upload(0), Op::Attach(0)]);
        assert_eq!(mesh.handle().map(|h| h.id()), Some(0));
        assert_eq!(target.live[&0].vertex_count(), 8);
    }

    #[test]
    fn rebuild_attaches_new_before_releasing_old() {
        let mut target = RecordingTarget::default();
        let mut mesh = GeneratedMesh::new(&mut target, config(ShapeKind::Box, 1)).unwrap();

        mesh.rebuild(&mut target, config(ShapeKind::Sphere, 8)).unwrap();

        assert_eq!(
            target.ops,
            vec![
                Op::Upload(0),
                Op::Attach(0),
                Op::Upload(1),
                Op::Attach(1),
                Op::Detach(0),
                Op::Dispose(0),
            ]
        );
        assert_eq!(target.attached, vec![1]);
        assert_eq!(mesh.config().shape, Some(ShapeKind::Sphere));
    }

    #[test]
    fn failed_rebuild_keeps_the_old_mesh() {
        let mut target = RecordingTarget::default();
        let mut mesh = GeneratedMesh::new(&mut target, config(ShapeKind::Box, 1)).unwrap();

        target.fail_uploads = true;
        assert!(mesh.rebuild(&mut target, config(ShapeKind::Torus, 10)).is_err());

        assert_eq!(target.attached, vec![0]);
        assert_eq!(mesh.handle().map(|h| h.id()), Some(0));
        assert_eq!(mesh.config().shape, Some(ShapeKind::Box));
    }

    #[test]
    fn rebuild_with_unset_shape_attaches_empty_buffers() {
        let mut target = RecordingTarget::default();
        let mut mesh = GeneratedMesh::new(&mut target, config(ShapeKind::Plane, 4)).unwrap();

        mesh.rebuild(&mut target, MeshConfig { shape: None, resolution: 4 }).unwrap();

        assert!(target.live[&1].is_empty());
        assert_eq!(target.attached, vec![1]);
    }

    #[test]
    fn release_detaches_and_disposes() {
        let mut target = RecordingTarget::default();
        let mut mesh = GeneratedMesh::new(&mut target, config(ShapeKind::Cylinder, 6)).unwrap();

        mesh.release(&mut target).unwrap();

        assert!(target.live.is_empty());
        assert!(target.attached.is_empty());
        assert_eq!(mesh.handle(), None);

        // Releasing twice is a no-op
        mesh.release(&mut target).unwrap();
    }
}
