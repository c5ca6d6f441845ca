// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Convex polyhedral shell primitives
//!
//! Regular polyhedra sampled onto a circumsphere, emitted as non-indexed
//! triangle soups with flat normals - the buffer layout the fitting
//! pipeline receives from renderers for faceted shells.

use crate::error::{Error, Result};
use crate::mesh::{calculate_normals, TriMesh};
use nalgebra::{Point3, Vector3};

// Golden ratio and its inverse, the coordinates regular dodecahedra and
// icosahedra are built from.
const PHI: f64 = 1.618033988749895;
const INV_PHI: f64 = 0.618033988749895;

#[rustfmt::skip]
const DODECAHEDRON_VERTICES: [f64; 60] = [
    // (±1, ±1, ±1)
    -1.0, -1.0, -1.0,    -1.0, -1.0,  1.0,
    -1.0,  1.0, -1.0,    -1.0,  1.0,  1.0,
     1.0, -1.0, -1.0,     1.0, -1.0,  1.0,
     1.0,  1.0, -1.0,     1.0,  1.0,  1.0,

    // (0, ±1/φ, ±φ)
    0.0, -INV_PHI, -PHI,    0.0, -INV_PHI, PHI,
    0.0,  INV_PHI, -PHI,    0.0,  INV_PHI, PHI,

    // (±1/φ, ±φ, 0)
    -INV_PHI, -PHI, 0.0,    -INV_PHI, PHI, 0.0,
     INV_PHI, -PHI, 0.0,     INV_PHI, PHI, 0.0,

    // (±φ, 0, ±1/φ)
    -PHI, 0.0, -INV_PHI,     PHI, 0.0, -INV_PHI,
    -PHI, 0.0,  INV_PHI,     PHI, 0.0,  INV_PHI,
];

// 12 pentagonal faces, 3 triangles each
#[rustfmt::skip]
const DODECAHEDRON_INDICES: [u32; 108] = [
     3, 11,  7,     3,  7, 15,     3, 15, 13,
     7, 19, 17,     7, 17,  6,     7,  6, 15,
    17,  4,  8,    17,  8, 10,    17, 10,  6,
     8,  0, 16,     8, 16,  2,     8,  2, 10,
     0, 12,  1,     0,  1, 18,     0, 18, 16,
     6, 10,  2,     6,  2, 13,     6, 13, 15,
     2, 16, 18,     2, 18,  3,     2,  3, 13,
    18,  1,  9,    18,  9, 11,    18, 11,  3,
     4, 14, 12,     4, 12,  0,     4,  0,  8,
    11,  9,  5,    11,  5, 19,    11, 19,  7,
    19,  5, 14,    19, 14,  4,    19,  4, 17,
     1, 12, 14,     1, 14,  5,     1,  5,  9,
];

#[rustfmt::skip]
const ICOSAHEDRON_VERTICES: [f64; 36] = [
    -1.0,  PHI, 0.0,     1.0,  PHI, 0.0,    -1.0, -PHI, 0.0,     1.0, -PHI, 0.0,
     0.0, -1.0, PHI,     0.0,  1.0, PHI,     0.0, -1.0, -PHI,    0.0,  1.0, -PHI,
     PHI,  0.0, -1.0,    PHI,  0.0,  1.0,   -PHI,  0.0, -1.0,   -PHI,  0.0,  1.0,
];

#[rustfmt::skip]
const ICOSAHEDRON_INDICES: [u32; 60] = [
    0, 11,  5,    0,  5,  1,    0,  1,  7,    0,  7, 10,    0, 10, 11,
    1,  5,  9,    5, 11,  4,   11, 10,  2,   10,  7,  6,    7,  1,  8,
    3,  9,  4,    3,  4,  2,    3,  2,  6,    3,  6,  8,    3,  8,  9,
    4,  9,  5,    2,  4, 11,    6,  2, 10,    8,  6,  7,    9,  8,  1,
];

/// Regular dodecahedron shell: 12 flat pentagonal faces, 36 triangles,
/// every vertex on the circumsphere of `radius`.
pub fn dodecahedron(radius: f64) -> Result<TriMesh> {
    polyhedron(&DODECAHEDRON_VERTICES, &DODECAHEDRON_INDICES, radius)
}

/// Regular icosahedron shell: 20 flat triangular faces, every vertex on
/// the circumsphere of `radius`.
pub fn icosahedron(radius: f64) -> Result<TriMesh> {
    polyhedron(&ICOSAHEDRON_VERTICES, &ICOSAHEDRON_INDICES, radius)
}

/// Emit a base vertex/index table as a non-indexed soup, each vertex
/// projected onto the circumsphere.
fn polyhedron(vertices: &[f64], indices: &[u32], radius: f64) -> Result<TriMesh> {
    if radius <= 0.0 {
        return Err(Error::InvalidPrimitive(format!(
            "Radius must be positive: {}",
            radius
        )));
    }

    let mut mesh = TriMesh::with_capacity(indices.len(), 0);

    for &index in indices {
        let i = index as usize * 3;
        let on_sphere =
            Vector3::new(vertices[i], vertices[i + 1], vertices[i + 2]).normalize() * radius;
        mesh.add_vertex(Point3::from(on_sphere), Vector3::zeros());
    }

    calculate_normals(&mut mesh);
    Ok(mesh)
}
