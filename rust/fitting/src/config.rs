// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fitting configuration
//!
//! Every constant the engine consumes is supplied here rather than
//! hardwired into the algorithms. Defaults reproduce the reference
//! terrarium: a dodecahedron shell of circumradius 0.8 with a 0.12-thick
//! soil bed.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Configuration for the shell fitting pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Reference gravity direction the floor face is matched against
    pub down: [f64; 3],
    /// Absolute world-space band around the floor height deciding whether a
    /// vertex belongs to the floor face. Independent of mesh scale; rescale
    /// it together with the shell.
    pub height_tolerance: f64,
    /// Planar distance under which two projected floor vertices collapse
    /// into one boundary corner
    pub dedup_epsilon: f64,
    /// Floor height substituted when the shell has no triangles
    pub fallback_floor: f64,
    /// Scale toward the footprint centroid so the soil clears the shell
    /// walls; must stay in (0, 1]
    pub inset_factor: f64,
    /// Vertical thickness of the soil slab
    pub soil_thickness: f64,
    /// How far below the floor plane the slab underside is sunk to keep the
    /// coplanar faces from z-fighting
    pub sink_offset: f64,
    /// Cosmetic yaw of the slab around the vertical axis, in degrees
    pub yaw_offset_deg: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            down: [0.0, -1.0, 0.0],
            height_tolerance: 1e-3,
            dedup_epsilon: 1e-3,
            fallback_floor: -0.56,
            inset_factor: 0.996,
            soil_thickness: 0.12,
            sink_offset: 1e-3,
            yaw_offset_deg: 36.0,
        }
    }
}

impl FitConfig {
    /// Reference direction as a unit vector
    pub fn down_axis(&self) -> Vector3<f64> {
        Vector3::new(self.down[0], self.down[1], self.down[2]).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_down_is_negative_y() {
        let config = FitConfig::default();
        assert_eq!(config.down_axis(), -Vector3::y());
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: FitConfig =
            serde_json::from_str(r#"{ "soil_thickness": 0.2 }"#).unwrap();
        assert_eq!(config.soil_thickness, 0.2);
        assert_eq!(config.inset_factor, FitConfig::default().inset_factor);
    }
}
