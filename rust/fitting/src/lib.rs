// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Terrarium shell fitting
//!
//! Given a convex polyhedral shell mesh, find the face most aligned with
//! gravity, rotate the shell so that face lies flat, extract the floor
//! boundary polygon and grow an inset soil slab on it. Pure library: scene
//! assembly owns the renderer objects and applies the returned transforms.

pub mod config;
pub mod face;
pub mod floor;
pub mod orient;
pub mod pipeline;
pub mod soil;

pub use config::FitConfig;
pub use face::{select_extremal_face, FaceScan};
pub use floor::{floor_height, floor_polygon, FloorProfile};
pub use orient::{align_to_direction, shortest_arc};
pub use pipeline::{fit_shell, ShellFit};
pub use soil::{build_soil, SoilVolume};
