// Based on:
//
// - Schaefer, Scott & Warren, Joe. (2004).
// Dual Marching Cubes: Primal Contouring of Dual Grids.
// Computer Graphics Forum. 24. 10.1111/j.1467-8659.2005.00843.x.
//
// - Nielson, Gregory M. (2004).
// Dual Marching Cubes.
// IEEE Visualization 2004. 489-496. 10.1109/VISUAL.2004.28.
//
// - Bourke, Paul. (1994).
// Polygonising a scalar field
// http://paulbourke.net/geometry/polygonise/

// Licensed under the MIT License. You may find a copy of this license in the root directory of the
// crate.

//! Dual Marching Cubes isosurface extraction for scalar fields sampled on regular grids.
//!
//! # Example
//! ```rust
//! use dmc::prelude::*;
//! use cgmath::vec3;
//!
//! // A single sample below the iso-value in the middle of a 3³ grid.
//! let mut field = DenseGrid::new(vec3(3, 3, 3), 1.);
//! field.set(1, 1, 1, 0.);
//!
//! let mesh = mesh_from_field(&field, &DmcConfig::default().with_iso_value(0.5)).unwrap();
//! assert_eq!(mesh.triangles.len(), 12);
//! assert!(mesh.is_closed_manifold());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dmc;
pub mod error;
pub mod field;
pub mod mesh;
pub mod prelude;
pub mod smoothing;
pub mod voxel;

mod ambiguity;
mod circular;
mod classify;
mod tables;
mod util;
