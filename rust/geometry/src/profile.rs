// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D footprint profiles and their triangulation

use crate::error::{Error, Result};
use nalgebra::Point2;

/// Arithmetic mean of a point set; the origin for an empty set.
pub fn centroid(points: &[Point2<f64>]) -> Point2<f64> {
    if points.is_empty() {
        return Point2::origin();
    }
    let sum = points
        .iter()
        .fold(Point2::origin(), |acc, p| acc + p.coords);
    sum / points.len() as f64
}

/// 2D footprint profile
#[derive(Debug, Clone)]
pub struct Profile2D {
    /// Boundary polygon (counter-clockwise)
    pub outer: Vec<Point2<f64>>,
}

impl Profile2D {
    /// Create a new profile
    pub fn new(outer: Vec<Point2<f64>>) -> Self {
        Self { outer }
    }

    /// Centroid of the boundary
    pub fn centroid(&self) -> Point2<f64> {
        centroid(&self.outer)
    }

    /// Triangulate the profile.
    /// Returns triangle indices into the boundary vertex array.
    pub fn triangulate(&self) -> Result<Triangulation> {
        let n = self.outer.len();

        if n < 3 {
            return Err(Error::InvalidProfile(
                "Profile must have at least 3 vertices".to_string(),
            ));
        }

        // FAST PATH: triangle and quad need no ear clipping
        if n == 3 {
            return Ok(Triangulation {
                points: self.outer.clone(),
                indices: vec![0, 1, 2],
            });
        }
        if n == 4 {
            return Ok(Triangulation {
                points: self.outer.clone(),
                indices: vec![0, 1, 2, 0, 2, 3],
            });
        }

        // FAST PATH: small convex boundary - fan triangulation
        if n <= 8 && is_convex(&self.outer) {
            return Ok(Triangulation {
                points: self.outer.clone(),
                indices: fan_triangulate(n),
            });
        }

        // Flatten vertices for earcutr
        let mut vertices = Vec::with_capacity(n * 2);
        for p in &self.outer {
            vertices.push(p.x);
            vertices.push(p.y);
        }

        let indices = earcutr::earcut(&vertices, &[], 2)
            .map_err(|e| Error::TriangulationError(format!("{:?}", e)))?;

        Ok(Triangulation {
            points: self.outer.clone(),
            indices,
        })
    }
}

/// Triangulated profile result
#[derive(Debug, Clone)]
pub struct Triangulation {
    /// Boundary vertices
    pub points: Vec<Point2<f64>>,
    /// Triangle indices
    pub indices: Vec<usize>,
}

/// Check if a polygon is convex (all cross products have same sign)
#[inline]
fn is_convex(points: &[Point2<f64>]) -> bool {
    if points.len() < 3 {
        return false;
    }

    let n = points.len();
    let mut sign = 0i8;

    for i in 0..n {
        let p0 = &points[i];
        let p1 = &points[(i + 1) % n];
        let p2 = &points[(i + 2) % n];

        let cross = (p1.x - p0.x) * (p2.y - p1.y) - (p1.y - p0.y) * (p2.x - p1.x);

        if cross.abs() > 1e-10 {
            let current_sign = if cross > 0.0 { 1i8 } else { -1i8 };
            if sign == 0 {
                sign = current_sign;
            } else if sign != current_sign {
                return false;
            }
        }
    }

    true
}

/// Simple fan triangulation for convex polygons
#[inline]
fn fan_triangulate(n: usize) -> Vec<usize> {
    let mut indices = Vec::with_capacity((n - 2) * 3);
    for i in 1..n - 1 {
        indices.push(0);
        indices.push(i);
        indices.push(i + 1);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular_polygon(n: usize, radius: f64) -> Vec<Point2<f64>> {
        (0..n)
            .map(|i| {
                let angle = i as f64 / n as f64 * std::f64::consts::TAU;
                Point2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect()
    }

    #[test]
    fn test_centroid_of_square() {
        let square = vec![
            Point2::new(1.0, 1.0),
            Point2::new(3.0, 1.0),
            Point2::new(3.0, 3.0),
            Point2::new(1.0, 3.0),
        ];
        assert_eq!(centroid(&square), Point2::new(2.0, 2.0));
        assert_eq!(Profile2D::new(square).centroid(), Point2::new(2.0, 2.0));
    }

    #[test]
    fn test_centroid_of_nothing_is_origin() {
        assert_eq!(centroid(&[]), Point2::origin());
    }

    #[test]
    fn test_triangulate_too_few_points() {
        let profile = Profile2D::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(profile.triangulate().is_err());
    }

    #[test]
    fn test_triangulate_pentagon_fan() {
        let profile = Profile2D::new(regular_polygon(5, 1.0));
        let tri = profile.triangulate().unwrap();
        assert_eq!(tri.points.len(), 5);
        assert_eq!(tri.indices.len(), 9);
        // fan keeps the boundary orientation
        assert_eq!(&tri.indices[..3], &[0, 1, 2]);
    }

    #[test]
    fn test_triangulate_concave_boundary() {
        // L-shape, counter-clockwise
        let profile = Profile2D::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        let tri = profile.triangulate().unwrap();
        assert_eq!(tri.indices.len(), (6 - 2) * 3);
    }
}
