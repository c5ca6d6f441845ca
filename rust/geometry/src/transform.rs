// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! World transforms
//!
//! Placement of a mesh in the scene, kept decomposed as rotation,
//! translation and scale so the fitting pipeline can rotate a shell about
//! its own origin without touching its position.

use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

/// Mapping from a mesh's local vertex coordinates into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Orientation
    pub rotation: UnitQuaternion<f64>,
    /// Position of the local origin in world space
    pub translation: Vector3<f64>,
    /// Per-axis scale, applied before rotation
    pub scale: Vector3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity placement
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Placement that only rotates
    pub fn from_rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            rotation,
            ..Self::identity()
        }
    }

    /// Placement that only translates
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    /// Compose into the usual translate * rotate * scale matrix
    pub fn matrix(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&self.translation)
            * self.rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// Map a local point to world space
    #[inline]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let scaled = Point3::from(point.coords.component_mul(&self.scale));
        self.rotation.transform_point(&scaled) + self.translation
    }

    /// Rotate about the world axes through the local origin.
    ///
    /// Translation and scale pass through untouched, so the mesh turns
    /// rigidly in place.
    #[inline]
    pub fn prepend_rotation(&self, rotation: &UnitQuaternion<f64>) -> Self {
        Self {
            rotation: rotation * self.rotation,
            ..*self
        }
    }
}
