// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Slab extrusion - converting a 2D footprint to a solid volume

use crate::error::{Error, Result};
use crate::mesh::TriMesh;
use crate::profile::{Profile2D, Triangulation};
use nalgebra::{Point2, Point3, Vector3};

/// Extrude a footprint into a vertical slab with flat, unbeveled caps.
///
/// The footprint lives in the horizontal plane: profile `(x, y)` maps to
/// world `(x, z)`, with the boundary wound counter-clockwise in that plane.
/// The slab is centered on the footprint plane, spanning
/// `[-thickness / 2, +thickness / 2]` along the vertical axis.
#[inline]
pub fn extrude_slab(profile: &Profile2D, thickness: f64) -> Result<TriMesh> {
    if thickness <= 0.0 {
        return Err(Error::InvalidExtrusion(
            "Thickness must be positive".to_string(),
        ));
    }

    let triangulation = profile.triangulate()?;

    let n = profile.outer.len();
    let mut mesh = TriMesh::with_capacity(
        triangulation.points.len() * 2 + n * 4,
        triangulation.indices.len() * 2 + n * 6,
    );

    let bottom = -thickness / 2.0;
    let top = thickness / 2.0;

    create_cap(&triangulation, bottom, Vector3::new(0.0, -1.0, 0.0), &mut mesh);
    create_cap(&triangulation, top, Vector3::new(0.0, 1.0, 0.0), &mut mesh);
    create_side_walls(&profile.outer, bottom, top, &mut mesh);

    Ok(mesh)
}

/// Create a cap at height `y` from the footprint triangulation.
///
/// Counter-clockwise footprint triangles face downward once lifted into the
/// x-z plane, so the top cap reverses winding.
#[inline]
fn create_cap(triangulation: &Triangulation, y: f64, normal: Vector3<f64>, mesh: &mut TriMesh) {
    let base_index = mesh.vertex_count() as u32;

    for point in &triangulation.points {
        mesh.add_vertex(Point3::new(point.x, y, point.y), normal);
    }

    for tri in triangulation.indices.chunks_exact(3) {
        let i0 = base_index + tri[0] as u32;
        let i1 = base_index + tri[1] as u32;
        let i2 = base_index + tri[2] as u32;

        if normal.y > 0.0 {
            mesh.add_triangle(i0, i2, i1);
        } else {
            mesh.add_triangle(i0, i1, i2);
        }
    }
}

/// Create side walls between the bottom and top boundary loops
#[inline]
fn create_side_walls(boundary: &[Point2<f64>], bottom: f64, top: f64, mesh: &mut TriMesh) {
    let base_index = mesh.vertex_count() as u32;
    let mut quad_count = 0u32;

    for i in 0..boundary.len() {
        let j = (i + 1) % boundary.len();

        let p0 = &boundary[i];
        let p1 = &boundary[j];

        // Outward normal of this edge for a counter-clockwise footprint.
        // Use try_normalize to handle degenerate edges (duplicate consecutive points)
        let edge = Vector3::new(p1.x - p0.x, 0.0, p1.y - p0.y);
        let normal = match Vector3::new(edge.z, 0.0, -edge.x).try_normalize(1e-10) {
            Some(n) => n,
            None => continue, // Skip degenerate edge
        };

        let v0_bottom = Point3::new(p0.x, bottom, p0.y);
        let v1_bottom = Point3::new(p1.x, bottom, p1.y);
        let v0_top = Point3::new(p0.x, top, p0.y);
        let v1_top = Point3::new(p1.x, top, p1.y);

        // Add 4 vertices for this quad
        let idx = base_index + (quad_count * 4);
        mesh.add_vertex(v0_bottom, normal);
        mesh.add_vertex(v1_bottom, normal);
        mesh.add_vertex(v1_top, normal);
        mesh.add_vertex(v0_top, normal);

        // Add 2 triangles for the quad, wound to face outward
        mesh.add_triangle(idx, idx + 2, idx + 1);
        mesh.add_triangle(idx, idx + 3, idx + 2);

        quad_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_profile(half: f64) -> Profile2D {
        Profile2D::new(vec![
            Point2::new(-half, -half),
            Point2::new(half, -half),
            Point2::new(half, half),
            Point2::new(-half, half),
        ])
    }

    #[test]
    fn test_extrude_square_slab() {
        let mesh = extrude_slab(&square_profile(1.0), 0.5).unwrap();

        // 4 vertices per cap, 4 per wall quad
        assert_eq!(mesh.vertex_count(), 4 * 2 + 4 * 4);
        // 2 triangles per cap, 2 per wall quad
        assert_eq!(mesh.triangle_count(), 2 * 2 + 4 * 2);

        let (min, max) = mesh.bounds();
        assert!((min.x - -1.0).abs() < 1e-6);
        assert!((max.x - 1.0).abs() < 1e-6);
        assert!((min.y - -0.25).abs() < 1e-6);
        assert!((max.y - 0.25).abs() < 1e-6);
        assert!((min.z - -1.0).abs() < 1e-6);
        assert!((max.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_slab_normals_are_unit_length() {
        let mesh = extrude_slab(&square_profile(2.0), 1.0).unwrap();
        for chunk in mesh.normals.chunks_exact(3) {
            let len = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cap_windings_face_out() {
        let mesh = extrude_slab(&square_profile(1.0), 0.5).unwrap();
        let indices = mesh.indices.as_deref().unwrap();

        // recompute each triangle's geometric normal and compare with the
        // stored vertex normal
        for tri in indices.chunks_exact(3) {
            let v0 = mesh.position(tri[0] as usize);
            let v1 = mesh.position(tri[1] as usize);
            let v2 = mesh.position(tri[2] as usize);
            let geometric = (v1 - v0).cross(&(v2 - v0)).normalize();

            let stored = Vector3::new(
                mesh.normals[tri[0] as usize * 3] as f64,
                mesh.normals[tri[0] as usize * 3 + 1] as f64,
                mesh.normals[tri[0] as usize * 3 + 2] as f64,
            );
            assert!(
                geometric.dot(&stored) > 0.99,
                "winding disagrees with stored normal: {:?} vs {:?}",
                geometric,
                stored
            );
        }
    }

    #[test]
    fn test_invalid_thickness() {
        assert!(extrude_slab(&square_profile(1.0), 0.0).is_err());
        assert!(extrude_slab(&square_profile(1.0), -0.1).is_err());
    }

    #[test]
    fn test_degenerate_profile_propagates() {
        let profile = Profile2D::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(extrude_slab(&profile, 0.5).is_err());
    }
}
