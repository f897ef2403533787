//! Re-exports the types needed for a typical extraction.

pub use crate::config::{Bounds, DmcConfig};
pub use crate::dmc::{mesh_from_field, DualMarchingCubes};
pub use crate::error::DmcError;
pub use crate::field::{DenseGrid, ScalarField};
pub use crate::mesh::Mesh;
