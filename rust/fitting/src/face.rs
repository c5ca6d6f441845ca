// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extremal face selection

use nalgebra::Vector3;
use terrafit_geometry::{Transform, TriangleSource};

/// Best-scoring face candidate from a triangle scan
#[derive(Debug, Clone, Copy)]
pub struct FaceScan {
    /// Unit face normal in world space
    pub normal: Vector3<f64>,
    /// Alignment score, `normal . direction`
    pub score: f64,
    /// Sum of the world-space heights of the winning triangle's vertices
    pub height_sum: f64,
    /// Number of heights accumulated into `height_sum`
    pub samples: u32,
}

impl FaceScan {
    /// Mean world-space height of the winning triangle
    pub fn mean_height(&self) -> f64 {
        self.height_sum / f64::from(self.samples)
    }
}

/// Find the triangle whose world-space normal is most aligned with
/// `direction`.
///
/// Triangles are visited in buffer order (via indices when present,
/// consecutive triples otherwise) and ties keep the first candidate, so the
/// scan is deterministic for a given mesh encoding. Zero-area triangles are
/// skipped. Returns `None` when the mesh has no usable triangles.
///
/// Normals come from the world-transformed vertices, which keeps selection
/// correct for any starting orientation and any (even non-uniform) scale.
pub fn select_extremal_face<S: TriangleSource + ?Sized>(
    source: &S,
    world: &Transform,
    direction: &Vector3<f64>,
) -> Option<FaceScan> {
    (0..source.triangle_count())
        .filter_map(|t| scan_triangle(source, world, t, direction))
        .fold(None, |best, candidate| match best {
            Some(best) if candidate.score <= best.score => Some(best),
            _ => Some(candidate),
        })
}

fn scan_triangle<S: TriangleSource + ?Sized>(
    source: &S,
    world: &Transform,
    triangle: usize,
    direction: &Vector3<f64>,
) -> Option<FaceScan> {
    let [ia, ib, ic] = source.triangle(triangle);
    let a = world.transform_point(&source.position(ia));
    let b = world.transform_point(&source.position(ib));
    let c = world.transform_point(&source.position(ic));

    let normal = (b - a).cross(&(c - a)).try_normalize(1e-12)?;

    Some(FaceScan {
        normal,
        score: normal.dot(direction),
        height_sum: a.y + b.y + c.y,
        samples: 3,
    })
}
