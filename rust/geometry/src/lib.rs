// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Terrafit geometry substrate
//!
//! Triangle mesh buffers, 2D profiles and vertical slab extrusion used by
//! the shell fitting pipeline, using earcutr for cap triangulation and
//! nalgebra for transforms.

pub mod edges;
pub mod error;
pub mod extrusion;
pub mod mesh;
pub mod primitives;
pub mod profile;
pub mod transform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use edges::extract_edges;
pub use error::{Error, Result};
pub use extrusion::extrude_slab;
pub use mesh::{calculate_normals, TriMesh, TriangleSource};
pub use primitives::{dodecahedron, icosahedron};
pub use profile::{Profile2D, Triangulation};
pub use transform::Transform;
