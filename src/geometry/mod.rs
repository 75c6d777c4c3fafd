//! # Procedural Surface Generation
//!
//! This module generates the raw vertex and index buffers for a small family
//! of parametric surfaces: box, plane, sphere, cylinder and torus.
//!
//! ## Usage
//!
//! ```rust
//! use surfgen::geometry::{MeshBuffers, ShapeKind};
//!
//! // Generate a sphere at resolution 16 (rings and segments)
//! let sphere = MeshBuffers::generate(Some(ShapeKind::Sphere), 16);
//! assert_eq!(sphere.vertex_count(), 2 + 16 * 16);
//!
//! // An unset shape yields empty buffers instead of an error
//! let none = MeshBuffers::generate(None, 16);
//! assert!(none.is_empty());
//! ```

pub mod primitives;

pub use primitives::*;

use log::debug;
use thiserror::Error;

/// Radius used for generated spheres.
pub const SPHERE_RADIUS: f32 = 5.0;
/// Extent of generated planes along both axes.
pub const PLANE_EXTENT: f32 = 10.0;
/// Radius of generated cylinders.
pub const CYLINDER_RADIUS: f32 = 5.0;
/// Height of generated cylinders.
pub const CYLINDER_HEIGHT: f32 = 10.0;
/// Distance from a generated torus center to the center of its tube.
pub const TORUS_MAJOR_RADIUS: f32 = 5.0;
/// Tube cross-section radius of generated tori.
pub const TORUS_MINOR_RADIUS: f32 = 1.0;

/// The closed set of surfaces this crate can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Sphere,
    Plane,
    Cylinder,
    Torus,
}

impl ShapeKind {
    /// Parses a configuration tag into a shape kind.
    ///
    /// Unknown or empty tags return `None`; the configuration UI may hold a
    /// transiently unset value, so this is not an error.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "box" => Some(Self::Box),
            "sphere" => Some(Self::Sphere),
            "plane" => Some(Self::Plane),
            "cylinder" => Some(Self::Cylinder),
            "torus" => Some(Self::Torus),
            _ => None,
        }
    }

    /// The configuration tag for this shape kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Plane => "plane",
            Self::Cylinder => "cylinder",
            Self::Torus => "torus",
        }
    }
}

/// Buffer-invariant violations reported by [`MeshBuffers::validate`].
///
/// The builders themselves are total over their numeric domain and never
/// produce these; the check exists for buffers assembled by hand or received
/// from outside the crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("vertex buffer length {0} is not a multiple of 3")]
    PartialVertex(usize),
    #[error("index buffer length {0} is not a multiple of 3")]
    PartialTriangle(usize),
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// A generated vertex/index buffer pair ready for GPU upload.
///
/// `vertices` is a flat `[x, y, z, ...]` sequence; `indices` holds triangle
/// triples referencing it. Both are immutable once produced — regeneration
/// replaces the pair wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffers {
    /// Flat vertex positions, length = 3 × vertex count
    pub vertices: Vec<f32>,
    /// Triangle indices, length a multiple of 3
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// An empty buffer pair.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Generates the buffer pair for a shape at the given resolution.
    ///
    /// The resolution drives both subdivision axes of every shape that has
    /// them (rings and segments, width and height, radial and tubular); the
    /// box has fixed topology and ignores it. `None` — the permissive
    /// fallback for an unrecognized configuration tag — yields empty buffers.
    pub fn generate(shape: Option<ShapeKind>, resolution: u32) -> Self {
        let buffers = Self {
            vertices: shape_vertices(shape, resolution),
            indices: shape_indices(shape, resolution),
        };
        debug!(
            "generated {}: {} vertices, {} triangles",
            shape.map_or("<none>", |kind| kind.tag()),
            buffers.vertex_count(),
            buffers.triangle_count()
        );
        buffers
    }

    /// Number of vertices in the buffer pair.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles in the buffer pair.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the pair holds no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Checks the structural invariants of the pair.
    ///
    /// Verifies that both buffers hold whole elements and that every index
    /// references an existing vertex.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.vertices.len() % 3 != 0 {
            return Err(GeometryError::PartialVertex(self.vertices.len()));
        }
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::PartialTriangle(self.indices.len()));
        }

        let vertex_count = self.vertex_count();
        for &index in &self.indices {
            if index as usize >= vertex_count {
                return Err(GeometryError::IndexOutOfRange { index, vertex_count });
            }
        }

        Ok(())
    }
}

/// Vertex positions for a shape at the given resolution.
///
/// Applies the fixed world-space parameters of each shape (see the module
/// constants) with `resolution` on both subdivision axes.
pub fn shape_vertices(shape: Option<ShapeKind>, resolution: u32) -> Vec<f32> {
    match shape {
        Some(ShapeKind::Box) => cube_vertices(),
        Some(ShapeKind::Sphere) => sphere_vertices(SPHERE_RADIUS, resolution, resolution),
        Some(ShapeKind::Plane) => {
            plane_vertices(PLANE_EXTENT, PLANE_EXTENT, resolution, resolution)
        }
        Some(ShapeKind::Cylinder) => {
            cylinder_vertices(CYLINDER_RADIUS, CYLINDER_HEIGHT, resolution, resolution)
        }
        Some(ShapeKind::Torus) => {
            torus_vertices(TORUS_MAJOR_RADIUS, TORUS_MINOR_RADIUS, resolution, resolution)
        }
        None => Vec::new(),
    }
}

/// Triangle indices for a shape at the given resolution.
///
/// Independent of [`shape_vertices`] — only the shared resolution parameter
/// ties the two together.
pub fn shape_indices(shape: Option<ShapeKind>, resolution: u32) -> Vec<u32> {
    match shape {
        Some(ShapeKind::Box) => cube_indices(),
        Some(ShapeKind::Sphere) => sphere_indices(resolution, resolution),
        Some(ShapeKind::Plane) => plane_indices(resolution, resolution),
        Some(ShapeKind::Cylinder) => cylinder_indices(resolution, resolution),
        Some(ShapeKind::Torus) => torus_indices(resolution, resolution),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const ALL_SHAPES: [ShapeKind; 5] = [
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Plane,
        ShapeKind::Cylinder,
        ShapeKind::Torus,
    ];

    #[test]
    fn tags_round_trip() {
        for shape in ALL_SHAPES {
            assert_eq!(ShapeKind::from_tag(shape.tag()), Some(shape));
        }
        assert_eq!(ShapeKind::from_tag(""), None);
        assert_eq!(ShapeKind::from_tag("teapot"), None);
    }

    #[test]
    fn unknown_shape_yields_empty_buffers() {
        let buffers = MeshBuffers::generate(None, 16);
        assert!(buffers.is_empty());
        assert!(buffers.validate().is_ok());
    }

    #[test]
    fn every_shape_validates_across_resolutions() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rng = rand::rng();

        for shape in ALL_SHAPES {
            for _ in 0..8 {
                let resolution = rng.random_range(1..=24);
                let buffers = MeshBuffers::generate(Some(shape), resolution);

                buffers.validate().unwrap_or_else(|err| {
                    panic!("{:?} at resolution {}: {}", shape, resolution, err)
                });
                assert_eq!(buffers.indices.len() % 3, 0);
                assert!(!buffers.is_empty());
            }
        }
    }

    #[test]
    fn degenerate_resolution_never_panics() {
        for shape in ALL_SHAPES {
            let buffers = MeshBuffers::generate(Some(shape), 0);
            assert!(buffers.validate().is_ok(), "{:?} at resolution 0", shape);
        }
    }

    #[test]
    fn generation_is_idempotent() {
        for shape in ALL_SHAPES {
            let first = MeshBuffers::generate(Some(shape), 12);
            let second = MeshBuffers::generate(Some(shape), 12);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn validate_reports_out_of_range_index() {
        let buffers = MeshBuffers {
            vertices: vec![0.0; 9],
            indices: vec![0, 1, 3],
        };
        assert_eq!(
            buffers.validate(),
            Err(GeometryError::IndexOutOfRange { index: 3, vertex_count: 3 })
        );
    }

    #[test]
    fn validate_reports_partial_elements() {
        let partial_vertex = MeshBuffers { vertices: vec![0.0; 4], indices: vec![] };
        assert_eq!(partial_vertex.validate(), Err(GeometryError::PartialVertex(4)));

        let partial_triangle = MeshBuffers { vertices: vec![0.0; 9], indices: vec![0, 1] };
        assert_eq!(partial_triangle.validate(), Err(GeometryError::PartialTriangle(2)));
    }
}
