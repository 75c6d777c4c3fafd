//! # Primitive Surface Builders
//!
//! Pure vertex/index builders for the supported parametric surfaces.
//! Every builder is deterministic, allocates its output up front from the
//! closed-form element count, and never fails for in-range numeric input.
//!
//! Vertex buffers are flat `[x, y, z, x, y, z, ...]` float sequences; index
//! buffers are triangle triples referencing the paired vertex buffer.
//! Vertex ordering and triangle winding are part of the contract of each
//! builder pair and must not be reordered.

use cgmath::Vector3;
use std::f32::consts::PI;

/// Generates the vertex positions of a cube centered at the origin.
///
/// The cube spans [-1, 1] on every axis. Vertices v0..v3 are the back face
/// (z = -1) and v4..v7 the front face (z = +1), in the same (x, y) order.
///
/// # Returns
/// A flat array of 24 floats (8 vertices).
pub fn cube_vertices() -> Vec<f32> {
    vec![
        -1.0, -1.0, -1.0, // v0
        1.0, -1.0, -1.0, // v1
        1.0, 1.0, -1.0, // v2
        -1.0, 1.0, -1.0, // v3
        -1.0, -1.0, 1.0, // v4
        1.0, -1.0, 1.0, // v5
        1.0, 1.0, 1.0, // v6
        -1.0, 1.0, 1.0, // v7
    ]
}

/// Generates the triangle indices of the cube produced by [`cube_vertices`].
///
/// Each face quad is split into two triangles sharing the diagonal from its
/// first to third listed corner:
/// - Back: (v0, v1, v2, v3)
/// - Front: (v4, v5, v6, v7)
/// - Bottom: (v0, v1, v5, v4)
/// - Top: (v2, v3, v7, v6)
/// - Left: (v0, v3, v7, v4)
/// - Right: (v1, v2, v6, v5)
///
/// # Returns
/// 36 indices (12 triangles, 2 per face).
pub fn cube_indices() -> Vec<u32> {
    vec![
        0, 1, 2, 2, 3, 0, // back face
        4, 5, 6, 6, 7, 4, // front face
        0, 1, 5, 5, 4, 0, // bottom face
        2, 3, 7, 7, 6, 2, // top face
        0, 3, 7, 7, 4, 0, // left face
        1, 2, 6, 6, 5, 1, // right face
    ]
}

/// Generates the vertex positions of a subdivided plane centered at the origin.
///
/// The plane lies in the XY plane (z = 0) and spans -width/2..+width/2 along X
/// and -height/2..+height/2 along Y. Vertices are emitted row-major with the
/// outer loop walking the width axis.
///
/// Zero segments on an axis collapses that axis to its starting corner rather
/// than dividing by zero.
///
/// # Arguments
/// * `width` - Total extent along X in world units
/// * `height` - Total extent along Y in world units
/// * `width_segments` - Number of subdivisions along X
/// * `height_segments` - Number of subdivisions along Y
///
/// # Returns
/// A flat array of (width_segments + 1) × (height_segments + 1) vertices.
pub fn plane_vertices(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Vec<f32> {
    let vertex_count = (width_segments as usize + 1) * (height_segments as usize + 1);
    let mut positions = Vec::with_capacity(vertex_count * 3);

    let width_step = if width_segments == 0 { 0.0 } else { width / width_segments as f32 };
    let height_step = if height_segments == 0 { 0.0 } else { height / height_segments as f32 };

    for i in 0..=width_segments {
        for j in 0..=height_segments {
            let x = i as f32 * width_step - width / 2.0;
            let y = j as f32 * height_step - height / 2.0;
            positions.extend_from_slice(&[x, y, 0.0]);
        }
    }

    positions
}

/// Generates the triangle indices of the plane produced by [`plane_vertices`].
///
/// Each quad cell is split into two triangles:
/// ```text
///  tl ---- tr
///   |    / |
///   |   /  |
///   |  /   |
///  bl ---- br
/// ```
/// emitted as (bl, br, tl) then (br, tr, tl).
///
/// # Returns
/// width_segments × height_segments × 6 indices.
pub fn plane_indices(width_segments: u32, height_segments: u32) -> Vec<u32> {
    let cell_count = width_segments as usize * height_segments as usize;
    let mut indices = Vec::with_capacity(cell_count * 6);

    for w in 0..width_segments {
        for h in 0..height_segments {
            let curr = w * (height_segments + 1) + h;

            let bl = curr;
            let br = bl + 1;
            let tl = curr + height_segments + 1;
            let tr = tl + 1;

            indices.extend_from_slice(&[bl, br, tl]);
            indices.extend_from_slice(&[br, tr, tl]);
        }
    }

    indices
}

/// Generates the vertex positions of a sphere centered at the origin.
///
/// Pole-first ordering:
/// 1. North pole (0, 0, +radius)
/// 2. Rings of vertices by increasing polar angle, north to south
/// 3. South pole (0, 0, -radius)
///
/// Ring vertex (ring, segment) sits at spherical angles
/// θ = ring · π / (rings + 1), φ = segment · 2π / segments with 1-based loop
/// variables on both axes.
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `rings` - Number of latitude rings between the poles
/// * `segments` - Number of longitude subdivisions per ring
///
/// # Returns
/// A flat array of 2 + rings × segments vertices. Zero rings or segments
/// yields the two poles only.
pub fn sphere_vertices(radius: f32, rings: u32, segments: u32) -> Vec<f32> {
    let vertex_count = 2 + rings as usize * segments as usize;
    let mut positions = Vec::with_capacity(vertex_count * 3);

    // North pole
    positions.extend_from_slice(&[0.0, 0.0, radius]);

    let theta_step = PI / (rings + 1) as f32;
    let phi_step = if segments == 0 { 0.0 } else { 2.0 * PI / segments as f32 };

    // Rings between the poles
    for ring in 1..=rings {
        let theta = theta_step * ring as f32;

        for segment in 1..=segments {
            let phi = phi_step * segment as f32;

            let x = radius * theta.sin() * phi.cos();
            let y = radius * theta.sin() * phi.sin();
            let z = radius * theta.cos();

            positions.extend_from_slice(&[x, y, z]);
        }
    }

    // South pole
    positions.extend_from_slice(&[0.0, 0.0, -radius]);

    positions
}

/// Generates the triangle indices of the sphere produced by [`sphere_vertices`].
///
/// Three sections: a top cap fanning from the north pole to the first ring,
/// rings − 1 middle bands of two triangles per segment, and a bottom cap
/// fanning from the south pole to the last ring. The bottom cap lists its
/// corners as (last, base + next, base + current) — reversed relative to the
/// top cap so both caps wind outward.
///
/// # Returns
/// rings × segments × 6 indices; empty when either count is zero.
pub fn sphere_indices(rings: u32, segments: u32) -> Vec<u32> {
    revolved_indices(rings, segments)
}

/// Generates the vertex positions of a cylinder centered at the origin.
///
/// The cylinder extends along Z from -height/2 to +height/2 and is closed by
/// a single point vertex at each end (a conical cap, not a flat disk).
/// Ordering matches the sphere: top point, rings from top to bottom, bottom
/// point. Ring `ring` sits at z = height/2 − height · ring / (rings + 1) at
/// constant radius.
///
/// # Arguments
/// * `radius` - Ring radius
/// * `height` - Total extent along Z
/// * `rings` - Number of body rings between the cap points
/// * `segments` - Number of subdivisions around the circumference
///
/// # Returns
/// A flat array of 2 + rings × segments vertices.
pub fn cylinder_vertices(radius: f32, height: f32, rings: u32, segments: u32) -> Vec<f32> {
    let vertex_count = 2 + rings as usize * segments as usize;
    let mut positions = Vec::with_capacity(vertex_count * 3);

    // Top point
    positions.extend_from_slice(&[0.0, 0.0, height / 2.0]);

    let phi_step = if segments == 0 { 0.0 } else { 2.0 * PI / segments as f32 };

    // Body rings, top to bottom
    for ring in 1..=rings {
        let z = height / 2.0 - height * ring as f32 / (rings + 1) as f32;

        for segment in 1..=segments {
            let phi = phi_step * segment as f32;

            let x = radius * phi.cos();
            let y = radius * phi.sin();

            positions.extend_from_slice(&[x, y, z]);
        }
    }

    // Bottom point
    positions.extend_from_slice(&[0.0, 0.0, -height / 2.0]);

    positions
}

/// Generates the triangle indices of the cylinder produced by
/// [`cylinder_vertices`].
///
/// Identical topology to the sphere: point cap, side-wall bands, point cap,
/// with the same bottom-cap winding reversal.
pub fn cylinder_indices(rings: u32, segments: u32) -> Vec<u32> {
    revolved_indices(rings, segments)
}

/// Cap/band/cap index scheme shared by the sphere and cylinder.
///
/// Vertex layout assumed: index 0 is the top pole, ring `r` (0-based) starts
/// at 1 + r · segments, and the bottom pole is the final vertex.
fn revolved_indices(rings: u32, segments: u32) -> Vec<u32> {
    if rings == 0 || segments == 0 {
        return Vec::new();
    }

    let mut indices = Vec::with_capacity(rings as usize * segments as usize * 6);

    // Top cap
    for segment in 0..segments {
        indices.extend_from_slice(&[0, 1 + segment, 1 + (segment + 1) % segments]);
    }

    // Middle bands
    for ring in 0..rings.saturating_sub(1) {
        for segment in 0..segments {
            let bl = 1 + ring * segments + segment;
            let br = 1 + ring * segments + (segment + 1) % segments;
            let tl = bl + segments;
            let tr = br + segments;

            indices.extend_from_slice(&[bl, tl, br]);
            indices.extend_from_slice(&[br, tl, tr]);
        }
    }

    // Bottom cap, corner order reversed to keep the winding facing outward
    let last = 2 + rings * segments - 1;
    let base = 1 + (rings - 1) * segments;

    for segment in 0..segments {
        indices.extend_from_slice(&[last, base + (segment + 1) % segments, base + segment]);
    }

    indices
}

/// Generates the vertex positions of a torus centered at the origin.
///
/// Vertices form a radial_segments × tubular_segments grid with no pole or
/// seam vertices. Loop variables are 1-based on both axes: the major circle
/// angle is θ = i · 2π / radial_segments and the tube angle
/// φ = j · 2π / tubular_segments, with the tube offset added onto the major
/// circle point at θ.
///
/// # Arguments
/// * `major_radius` - Distance from the torus center to the tube center
/// * `minor_radius` - Radius of the tube cross-section
/// * `radial_segments` - Subdivisions around the major circle
/// * `tubular_segments` - Subdivisions around the tube cross-section
pub fn torus_vertices(
    major_radius: f32,
    minor_radius: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> Vec<f32> {
    let vertex_count = radial_segments as usize * tubular_segments as usize;
    let mut positions = Vec::with_capacity(vertex_count * 3);

    let theta_step = if radial_segments == 0 { 0.0 } else { 2.0 * PI / radial_segments as f32 };
    let phi_step = if tubular_segments == 0 { 0.0 } else { 2.0 * PI / tubular_segments as f32 };

    for i in 1..=radial_segments {
        let theta = theta_step * i as f32;

        let base = Vector3::new(
            major_radius * theta.cos(),
            major_radius * theta.sin(),
            0.0,
        );

        for j in 1..=tubular_segments {
            let phi = phi_step * j as f32;

            let offset = Vector3::new(
                minor_radius * phi.sin() * theta.cos(),
                minor_radius * phi.sin() * theta.sin(),
                minor_radius * phi.cos(),
            );

            let position = base + offset;
            positions.extend_from_slice(&[position.x, position.y, position.z]);
        }
    }

    positions
}

/// Generates the triangle indices of the torus produced by [`torus_vertices`].
///
/// Each grid cell emits (br, tr, tl, br, tl, bl) with modulo wraparound on
/// both axes, so the last ring connects back to ring 0 and the last segment
/// back to segment 0 without duplicated seam vertices.
pub fn torus_indices(radial_segments: u32, tubular_segments: u32) -> Vec<u32> {
    if radial_segments == 0 || tubular_segments == 0 {
        return Vec::new();
    }

    let cell_count = radial_segments as usize * tubular_segments as usize;
    let mut indices = Vec::with_capacity(cell_count * 6);

    for i in 0..radial_segments {
        for j in 0..tubular_segments {
            let bl = i * tubular_segments + j;
            let br = i * tubular_segments + (j + 1) % tubular_segments;
            let tl = ((i + 1) % radial_segments) * tubular_segments + j;
            let tr = ((i + 1) % radial_segments) * tubular_segments + (j + 1) % tubular_segments;

            // Two triangles forming one quad
            indices.extend_from_slice(&[br, tr, tl, br, tl, bl]);
        }
    }

    indices
}
