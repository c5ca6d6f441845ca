// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Soil volume generation

use nalgebra::{Point2, UnitQuaternion, Vector3};
use terrafit_geometry::{extrude_slab, profile, Profile2D, Transform, TriMesh};
use tracing::warn;

use crate::config::FitConfig;

/// Soil slab: a local-frame mesh plus the placement transform that seats it
/// on the shell floor. Owns no reference back to the shell; the placement
/// data is all the coupling there is.
#[derive(Debug, Clone)]
pub struct SoilVolume {
    /// Slab mesh, footprint centered on the origin, vertical span
    /// `[-thickness / 2, +thickness / 2]`
    pub mesh: TriMesh,
    /// World placement: yaw plus translation onto the floor
    pub placement: Transform,
}

/// Build the soil slab for a floor polygon.
///
/// Returns `None` for a degenerate polygon (fewer than three corners) and
/// when slab construction fails; both leave the shell usable, just bare.
///
/// The footprint is the polygon scaled toward its centroid by
/// `inset_factor` so the slab nearly touches the walls without clipping
/// through them, extruded by `soil_thickness`, yawed by `yaw_offset_deg`,
/// and translated so the slab center sits at
/// `floor_height + soil_thickness / 2 - sink_offset`. The underside then
/// rests `sink_offset` below the floor plane, hiding the coplanar seam.
pub fn build_soil(
    polygon: &[Point2<f64>],
    floor_height: f64,
    config: &FitConfig,
) -> Option<SoilVolume> {
    if polygon.len() < 3 {
        return None;
    }

    let center = profile::centroid(polygon);
    let footprint: Vec<Point2<f64>> = polygon
        .iter()
        .map(|&p| Point2::from((p - center) * config.inset_factor))
        .collect();

    let mesh = match extrude_slab(&Profile2D::new(footprint), config.soil_thickness) {
        Ok(mesh) => mesh,
        Err(error) => {
            warn!(%error, "soil slab construction failed");
            return None;
        }
    };

    let placement = Transform {
        rotation: UnitQuaternion::from_axis_angle(
            &Vector3::y_axis(),
            config.yaw_offset_deg.to_radians(),
        ),
        translation: Vector3::new(
            center.x,
            floor_height + config.soil_thickness / 2.0 - config.sink_offset,
            center.y,
        ),
        scale: Vector3::new(1.0, 1.0, 1.0),
    };

    Some(SoilVolume { mesh, placement })
}
