// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shortest-arc shell alignment

use nalgebra::{Unit, UnitQuaternion, Vector3};
use terrafit_geometry::Transform;

/// Shortest-arc rotation taking `from` onto `to`.
///
/// Antiparallel inputs have no unique arc; a half turn about a fixed axis
/// perpendicular to `to` is used so the result stays deterministic and
/// finite.
pub fn shortest_arc(from: &Vector3<f64>, to: &Vector3<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between(from, to).unwrap_or_else(|| {
        let axis = if to.x.abs() < 0.9 {
            Vector3::x_axis().cross(to)
        } else {
            Vector3::z_axis().cross(to)
        };
        UnitQuaternion::from_axis_angle(&Unit::new_normalize(axis), std::f64::consts::PI)
    })
}

/// Rotate `world` so that `normal` maps onto `direction`.
///
/// The arc is premultiplied onto the current orientation, turning the mesh
/// rigidly about its own origin; translation and scale pass through. The
/// caller owns pushing the returned transform back to its render object
/// before any further world-space queries.
pub fn align_to_direction(
    world: &Transform,
    normal: &Vector3<f64>,
    direction: &Vector3<f64>,
) -> Transform {
    world.prepend_rotation(&shortest_arc(normal, direction))
}
