//! Render-target seam
//!
//! Defines the interface the mesh facade uses to hand generated buffers to a
//! rendering collaborator, without knowing whether that collaborator is a
//! GPU device, a recording fake in a test, or something else entirely.

use crate::geometry::MeshBuffers;
use thiserror::Error;

/// Opaque identifier for a mesh resource held by a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(u64);

impl MeshHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw identifier, mostly useful for logging.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Failures at the render-target boundary.
#[derive(Debug, Error)]
pub enum GfxError {
    #[error("mesh handle {0} is not known to this target")]
    UnknownHandle(u64),
    #[error("no suitable GPU adapter available")]
    AdapterUnavailable,
    #[error("GPU device request failed: {0}")]
    DeviceRequest(String),
}

/// A rendering collaborator that accepts generated mesh buffers.
///
/// The lifecycle is upload → attach → (detach → dispose). Attach and detach
/// control scene membership; dispose releases the underlying resource and
/// invalidates the handle. A disposed handle must not be reused.
pub trait RenderTarget {
    /// Uploads a buffer pair and returns a handle to the new mesh resource.
    ///
    /// The mesh is not visible until attached.
    fn upload(&mut self, buffers: &MeshBuffers) -> Result<MeshHandle, GfxError>;

    /// Adds an uploaded mesh to the rendered scene.
    fn attach(&mut self, handle: MeshHandle) -> Result<(), GfxError>;

    /// Removes a mesh from the rendered scene without releasing it.
    fn detach(&mut self, handle: MeshHandle) -> Result<(), GfxError>;

    /// Releases the mesh resource. The handle becomes invalid.
    fn dispose(&mut self, handle: MeshHandle) -> Result<(), GfxError>;
}
