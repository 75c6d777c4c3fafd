//! # Graphics Module
//!
//! Graphics-facing half of the crate: the seam to the rendering
//! collaborator, the generated-mesh facade that drives it, and a wgpu-backed
//! implementation of that seam.
//!
//! - **Render target** ([`target`]) - upload/attach/detach/dispose interface
//!   plus the opaque mesh handle
//! - **Mesh facade** ([`mesh`]) - owns one generated mesh and regenerates it
//!   on configuration change
//! - **wgpu target** ([`wgpu_target`]) - GPU buffer uploads over a headless
//!   device

pub mod mesh;
pub mod target;
pub mod wgpu_target;

pub use mesh::GeneratedMesh;
pub use target::{GfxError, MeshHandle, RenderTarget};
pub use wgpu_target::{GpuContext, GpuMesh, WgpuTarget};
