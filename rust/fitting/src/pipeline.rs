// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The fitting pipeline
//!
//! Linear stage order: face selection, alignment, floor profiling, soil
//! generation. Each stage consumes the previous stage's output and nothing
//! is cached across invocations, so re-running on the returned transform
//! reselects the same face and reproduces the floor.

use terrafit_geometry::{Transform, TriangleSource};
use tracing::{debug, warn};

use crate::config::FitConfig;
use crate::face::select_extremal_face;
use crate::floor::{floor_height, floor_polygon, FloorProfile};
use crate::orient::align_to_direction;
use crate::soil::{build_soil, SoilVolume};

/// Everything scene assembly needs to seat a shell: the aligned world
/// transform, the floor descriptor, and the soil volume when one exists.
#[derive(Debug, Clone)]
pub struct ShellFit {
    /// Shell transform with the lowest face rotated flat
    pub world: Transform,
    /// Floor height and boundary polygon under that transform
    pub floor: FloorProfile,
    /// `None` when the floor is degenerate or the mesh empty
    pub soil: Option<SoilVolume>,
}

/// Fit a shell mesh: orient its lowest face flat against gravity and grow a
/// soil slab on it.
///
/// Never fails. An empty mesh keeps its transform and falls back to the
/// configured floor height; a degenerate floor skips the soil; the caller
/// only ever observes "no soil volume". Invoke once per shell instance at
/// construction time, and push the returned transform to the render object
/// before any dependent world-space queries.
pub fn fit_shell<S: TriangleSource + ?Sized>(
    shell: &S,
    world: &Transform,
    config: &FitConfig,
) -> ShellFit {
    let down = config.down_axis();

    let world = match select_extremal_face(shell, world, &down) {
        Some(scan) => {
            debug!(score = scan.score, "aligning extremal face to gravity");
            align_to_direction(world, &scan.normal, &down)
        }
        None => {
            warn!("shell has no triangles, leaving orientation untouched");
            *world
        }
    };

    let height = floor_height(shell, &world, &down, config.fallback_floor);
    let polygon = floor_polygon(
        shell,
        &world,
        height,
        config.height_tolerance,
        config.dedup_epsilon,
    );
    debug!(height, corners = polygon.len(), "floor profiled");

    let soil = build_soil(&polygon, height, config);
    if soil.is_none() {
        debug!("degenerate floor, no soil volume");
    }

    ShellFit {
        world,
        floor: FloorProfile { height, polygon },
        soil,
    }
}
