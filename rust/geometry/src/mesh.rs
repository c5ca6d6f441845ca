// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::{Point3, Vector3};

/// Triangle mesh
///
/// Positions and normals are flat xyz buffers in `f32`, math is done in
/// `f64`. The index buffer is optional: `None` means triangles are formed
/// from consecutive runs of three vertices, which matches what renderers
/// hand over for non-indexed buffer geometry.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz); may be empty until computed
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2), `None` for consecutive-triple meshes
    pub indices: Option<Vec<u32>>,
}

/// Read-only triangle access over any vertex/index buffer representation.
///
/// The fitting algorithms only ever need vertex positions and triangle
/// connectivity, so this is the whole coupling surface to a concrete
/// renderer's buffer format. Positions are local coordinates; the world
/// transform is threaded explicitly by the caller.
pub trait TriangleSource {
    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// Local position of vertex `index`
    fn position(&self, index: usize) -> Point3<f64>;

    /// Index buffer, if the mesh has one
    fn triangle_indices(&self) -> Option<&[u32]>;

    /// Number of triangles
    fn triangle_count(&self) -> usize {
        match self.triangle_indices() {
            Some(indices) => indices.len() / 3,
            None => self.vertex_count() / 3,
        }
    }

    /// Vertex ids of triangle `triangle`, in buffer order
    fn triangle(&self, triangle: usize) -> [usize; 3] {
        match self.triangle_indices() {
            Some(indices) => [
                indices[triangle * 3] as usize,
                indices[triangle * 3 + 1] as usize,
                indices[triangle * 3 + 2] as usize,
            ],
            None => [triangle * 3, triangle * 3 + 1, triangle * 3 + 2],
        }
    }
}

impl TriMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with capacity; `index_count == 0` leaves the mesh
    /// non-indexed
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            indices: if index_count > 0 {
                Some(Vec::with_capacity(index_count))
            } else {
                None
            },
        }
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
    }

    /// Add a triangle, promoting the mesh to indexed if needed
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        let indices = self.indices.get_or_insert_with(Vec::new);
        indices.push(i0);
        indices.push(i1);
        indices.push(i2);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.vertex_count() / 3,
        }
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Local position of vertex `index`, widened to `f64`
    #[inline]
    pub fn position(&self, index: usize) -> Point3<f64> {
        Point3::new(
            self.positions[index * 3] as f64,
            self.positions[index * 3 + 1] as f64,
            self.positions[index * 3 + 2] as f64,
        )
    }

    /// Calculate bounds (min, max) - optimized with chunk iteration
    #[inline]
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);

        self.positions.chunks_exact(3).for_each(|chunk| {
            let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        });

        (min, max)
    }
}

impl TriangleSource for TriMesh {
    fn vertex_count(&self) -> usize {
        TriMesh::vertex_count(self)
    }

    fn position(&self, index: usize) -> Point3<f64> {
        TriMesh::position(self, index)
    }

    fn triangle_indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }
}

/// Recompute vertex normals.
///
/// Indexed meshes get smooth normals accumulated over shared vertices;
/// non-indexed meshes get the flat face normal repeated for each corner.
pub fn calculate_normals(mesh: &mut TriMesh) {
    let vertex_count = mesh.vertex_count();
    if vertex_count == 0 {
        return;
    }

    let mut normals = vec![Vector3::zeros(); vertex_count];

    for t in 0..mesh.triangle_count() {
        let [i0, i1, i2] = TriangleSource::triangle(mesh, t);

        let v0 = mesh.position(i0);
        let v1 = mesh.position(i1);
        let v2 = mesh.position(i2);

        let normal = (v1 - v0).cross(&(v2 - v0));
        normals[i0] += normal;
        normals[i1] += normal;
        normals[i2] += normal;
    }

    mesh.normals.clear();
    mesh.normals.reserve(vertex_count * 3);

    for normal in normals {
        let normalized = normal.try_normalize(1e-12).unwrap_or_else(Vector3::zeros);
        mesh.normals.push(normalized.x as f32);
        mesh.normals.push(normalized.y as f32);
        mesh.normals.push(normalized.z as f32);
    }
}
