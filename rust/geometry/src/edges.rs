// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sharp edge extraction
//!
//! Collects the unique edges of a mesh whose adjacent faces meet at more
//! than a threshold angle, as flat line-segment vertex data for a wireframe
//! frame. Vertices are welded by quantized position so a non-indexed soup
//! still yields one edge per physical edge.

use crate::mesh::TriangleSource;
use nalgebra::{Point3, Vector3};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

// Welding snaps coordinates to 1e-4, comfortably below any real facet size
// and above f32 buffer noise.
const WELD_SCALE: f64 = 1e4;

#[inline]
fn weld_key(point: &Point3<f64>) -> (i64, i64, i64) {
    (
        (point.x * WELD_SCALE).round() as i64,
        (point.y * WELD_SCALE).round() as i64,
        (point.z * WELD_SCALE).round() as i64,
    )
}

/// Extract boundary and sharp edges as line-segment endpoints.
///
/// An edge is kept when only one face uses it, or when the angle between
/// its two face normals exceeds `threshold_deg`. Returns a flat xyz buffer,
/// six floats per segment.
pub fn extract_edges<S: TriangleSource + ?Sized>(source: &S, threshold_deg: f64) -> Vec<f32> {
    let threshold_dot = threshold_deg.to_radians().cos();

    let mut ids: FxHashMap<(i64, i64, i64), u32> = FxHashMap::default();
    let mut welded: Vec<Point3<f64>> = Vec::new();
    let mut faces_by_edge: FxHashMap<(u32, u32), SmallVec<[Vector3<f64>; 2]>> =
        FxHashMap::default();

    for t in 0..source.triangle_count() {
        let corners = source.triangle(t).map(|i| source.position(i));

        let normal = match (corners[1] - corners[0])
            .cross(&(corners[2] - corners[0]))
            .try_normalize(1e-12)
        {
            Some(n) => n,
            None => continue, // zero-area triangle carries no edge information
        };

        let welded_ids = corners.map(|p| {
            let key = weld_key(&p);
            *ids.entry(key).or_insert_with(|| {
                welded.push(p);
                (welded.len() - 1) as u32
            })
        });

        for k in 0..3 {
            let a = welded_ids[k];
            let b = welded_ids[(k + 1) % 3];
            if a == b {
                continue; // edge collapsed by welding
            }
            let key = (a.min(b), a.max(b));
            faces_by_edge.entry(key).or_default().push(normal);
        }
    }

    let mut segments = Vec::new();
    for ((a, b), normals) in &faces_by_edge {
        let sharp = match normals.len() {
            2 => normals[0].dot(&normals[1]) <= threshold_dot,
            _ => true, // boundary or non-manifold edge
        };
        if !sharp {
            continue;
        }
        for &id in &[*a, *b] {
            let p = &welded[id as usize];
            segments.push(p.x as f32);
            segments.push(p.y as f32);
            segments.push(p.z as f32);
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::TriMesh;
    use crate::primitives::{dodecahedron, icosahedron};

    #[test]
    fn test_dodecahedron_frame_has_thirty_edges() {
        let shell = dodecahedron(0.8).unwrap();
        let segments = extract_edges(&shell, 1.0);
        // 30 physical edges; face-internal diagonals are coplanar and drop out
        assert_eq!(segments.len(), 30 * 2 * 3);
    }

    #[test]
    fn test_icosahedron_frame_has_thirty_edges() {
        let shell = icosahedron(1.0).unwrap();
        let segments = extract_edges(&shell, 1.0);
        assert_eq!(segments.len(), 30 * 2 * 3);
    }

    #[test]
    fn test_single_triangle_is_all_boundary() {
        let mut mesh = TriMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::y());
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::y());
        mesh.add_vertex(Point3::new(0.0, 0.0, 1.0), Vector3::y());

        let segments = extract_edges(&mesh, 1.0);
        assert_eq!(segments.len(), 3 * 2 * 3);
    }

    #[test]
    fn test_empty_mesh_has_no_edges() {
        let mesh = TriMesh::new();
        assert!(extract_edges(&mesh, 1.0).is_empty());
    }
}
