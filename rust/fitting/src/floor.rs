// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor height and boundary polygon extraction

use nalgebra::{distance_squared, Point2, Vector3};
use terrafit_geometry::{profile, Transform, TriangleSource};

use crate::face::select_extremal_face;

/// Floor descriptor: world-space height of the lowest face and its ordered
/// boundary polygon projected onto the horizontal plane. Recomputed fresh
/// per orientation, never cached across realignments.
#[derive(Debug, Clone)]
pub struct FloorProfile {
    /// World-space height of the lowest face
    pub height: f64,
    /// Ordered, deduplicated boundary corners in the `(x, z)` plane
    pub polygon: Vec<Point2<f64>>,
}

impl FloorProfile {
    /// Too few corners to carry a filler volume
    pub fn is_degenerate(&self) -> bool {
        self.polygon.len() < 3
    }
}

/// Mean world-space height of the most downward-facing triangle, or
/// `fallback` when the mesh has no triangles.
///
/// Call with the post-alignment transform, so the lowest face is already
/// horizontal and the triangle mean equals the face height.
pub fn floor_height<S: TriangleSource + ?Sized>(
    source: &S,
    world: &Transform,
    direction: &Vector3<f64>,
    fallback: f64,
) -> f64 {
    select_extremal_face(source, world, direction)
        .map(|scan| scan.mean_height())
        .unwrap_or(fallback)
}

/// Ordered boundary polygon of the vertices lying on the floor plane.
///
/// Every vertex within `height_tolerance` of `floor_height` is projected to
/// `(x, z)`; a candidate is dropped when an already kept point lies closer
/// than `dedup_epsilon`, which collapses corners shared by several faces
/// into one boundary point. Fewer than three survivors are returned
/// unsorted - the degenerate-floor sentinel.
///
/// The centroid-relative angular sort yields a simple polygon only for
/// points on a convex boundary, which the convex-shell contract guarantees.
pub fn floor_polygon<S: TriangleSource + ?Sized>(
    source: &S,
    world: &Transform,
    floor_height: f64,
    height_tolerance: f64,
    dedup_epsilon: f64,
) -> Vec<Point2<f64>> {
    let epsilon_sq = dedup_epsilon * dedup_epsilon;
    let mut points: Vec<Point2<f64>> = Vec::new();

    for i in 0..source.vertex_count() {
        let vertex = world.transform_point(&source.position(i));
        if (vertex.y - floor_height).abs() >= height_tolerance {
            continue;
        }
        let projected = Point2::new(vertex.x, vertex.z);
        if points
            .iter()
            .all(|kept| distance_squared(&projected, kept) >= epsilon_sq)
        {
            points.push(projected);
        }
    }

    if points.len() < 3 {
        return points;
    }

    let center = profile::centroid(&points);
    points.sort_by(|p1, p2| {
        let a1 = (p1.y - center.y).atan2(p1.x - center.x);
        let a2 = (p2.y - center.y).atan2(p2.x - center.x);
        a1.total_cmp(&a2)
    });
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use std::f64::consts::TAU;
    use terrafit_geometry::TriMesh;

    fn down() -> Vector3<f64> {
        -Vector3::y()
    }

    /// Downward square face at y = -1, as a soup with shared corners
    fn square_floor_soup() -> TriMesh {
        let corners = [
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, 1.0),
            Point3::new(-1.0, -1.0, 1.0),
        ];
        let mut mesh = TriMesh::new();
        // wound to face -y
        for &i in &[0usize, 1, 3, 1, 2, 3] {
            mesh.add_vertex(corners[i], Vector3::zeros());
        }
        mesh
    }

    #[test]
    fn test_floor_height_of_square() {
        let mesh = square_floor_soup();
        let height = floor_height(&mesh, &Transform::identity(), &down(), -0.56);
        assert_relative_eq!(height, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_floor_height_fallback_for_empty_mesh() {
        let mesh = TriMesh::new();
        let height = floor_height(&mesh, &Transform::identity(), &down(), -0.56);
        assert_eq!(height, -0.56);
    }

    #[test]
    fn test_square_polygon_dedups_shared_corners() {
        let mesh = square_floor_soup();
        let polygon = floor_polygon(&mesh, &Transform::identity(), -1.0, 1e-3, 1e-3);
        // 6 soup vertices collapse to 4 corners
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_polygon_is_sorted_by_angle() {
        let mesh = square_floor_soup();
        let polygon = floor_polygon(&mesh, &Transform::identity(), -1.0, 1e-3, 1e-3);
        let center = profile::centroid(&polygon);

        let angles: Vec<f64> = polygon
            .iter()
            .map(|p| (p.y - center.y).atan2(p.x - center.x))
            .collect();
        for pair in angles.windows(2) {
            assert!(pair[0] < pair[1]);
        }

        // consecutive gaps wrap once around the full turn
        let total: f64 = (0..angles.len())
            .map(|i| {
                let next = angles[(i + 1) % angles.len()];
                (next - angles[i]).rem_euclid(TAU)
            })
            .sum();
        assert_relative_eq!(total, TAU, epsilon = 1e-9);
    }

    #[test]
    fn test_vertices_off_the_floor_are_excluded() {
        let mut mesh = square_floor_soup();
        // apex well above the floor band
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::zeros());
        mesh.add_vertex(Point3::new(0.1, 1.0, 0.0), Vector3::zeros());
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.1), Vector3::zeros());

        let polygon = floor_polygon(&mesh, &Transform::identity(), -1.0, 1e-3, 1e-3);
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_near_coincident_corners_collapse_to_degenerate_floor() {
        // a sliver whose third corner welds onto the first
        let mut mesh = TriMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::zeros());
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::zeros());
        mesh.add_vertex(Point3::new(0.0005, 0.0, 0.0005), Vector3::zeros());

        let polygon = floor_polygon(&mesh, &Transform::identity(), 0.0, 1e-3, 1e-3);
        assert_eq!(polygon.len(), 2);
    }

    #[test]
    fn test_world_transform_is_honored() {
        let mesh = square_floor_soup();
        let world = Transform::from_translation(Vector3::new(5.0, 2.0, -3.0));
        let height = floor_height(&mesh, &world, &down(), -0.56);
        assert_relative_eq!(height, 1.0, epsilon = 1e-12);

        let polygon = floor_polygon(&mesh, &world, height, 1e-3, 1e-3);
        let center = profile::centroid(&polygon);
        assert_relative_eq!(center, Point2::new(5.0, -3.0), epsilon = 1e-9);
    }
}
