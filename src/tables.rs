//! Static lookup tables of the Dual Marching Cubes construction.
//!
//! Corner `i` of a voxel sits at [`CORNER_OFFSETS`]`[i]` from its minimum corner: corners 0 to 3
//! walk the `z = 0` face counter-clockwise starting at the origin, corners 4 to 7 repeat the walk
//! on the `z = 1` face. Edges 0 to 3 run around the bottom face, 4 to 7 are the vertical edges and
//! 8 to 11 run around the top face (see `EDGE_CORNERS`).
//!
//! Every physical edge is shared by up to four voxels, and only one of them owns it. A voxel owns
//! its edges 6, 9 and 10, which all meet at corner 6.

/// Marks an edge that produces no dual vertex.
pub(crate) const NO_VERTEX: u8 = 0xff;
const N: u8 = NO_VERTEX;

/// Grid offset of each voxel corner from the voxel's minimum corner.
pub(crate) const CORNER_OFFSETS: [[u32; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Corner pair of each local edge, lower corner index first.
#[cfg(test)]
pub(crate) const EDGE_CORNERS: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [0, 3],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
    [4, 5],
    [5, 6],
    [6, 7],
    [4, 7],
];

/// Local edge joining two corners, or [`NO_VERTEX`] when the corners are not adjacent.
pub(crate) const CORNER_PAIR_EDGE: [[u8; 8]; 8] = [
    [N, 0, N, 3, 4, N, N, N],
    [0, N, 1, N, N, 5, N, N],
    [N, 1, N, 2, N, N, 6, N],
    [3, N, 2, N, N, N, N, 7],
    [4, N, N, N, N, 8, N, 11],
    [N, 5, N, N, 8, N, 9, N],
    [N, N, 6, N, N, 9, N, 10],
    [N, N, N, 7, 11, N, 10, N],
];

/// Dual vertex slot of each edge, per voxel config. Voxels of an ambiguous pair must not use it.
pub(crate) const CONFIG_EDGE_LUT1: [[u8; 12]; 256] = [
    [N, N, N, N, N, N, N, N, N, N, N, N],
    [0, N, N, 0, 0, N, N, N, N, N, N, N],
    [0, 0, N, N, N, 0, N, N, N, N, N, N],
    [N, 0, N, 0, 0, 0, N, N, N, N, N, N],
    [N, 0, 0, N, N, N, 0, N, N, N, N, N],
    [0, 0, 0, 0, 0, N, 0, N, N, N, N, N],
    [0, N, 0, N, N, 0, 0, N, N, N, N, N],
    [N, N, 0, 0, 0, 0, 0, N, N, N, N, N],
    [N, N, 0, 0, N, N, N, 0, N, N, N, N],
    [0, N, 0, N, 0, N, N, 0, N, N, N, N],
    [0, 0, 0, 0, N, 0, N, 0, N, N, N, N],
    [N, 0, 0, N, 0, 0, N, 0, N, N, N, N],
    [N, 0, N, 0, N, N, 0, 0, N, N, N, N],
    [0, 0, N, N, 0, N, 0, 0, N, N, N, N],
    [0, N, N, 0, N, 0, 0, 0, N, N, N, N],
    [N, N, N, N, 0, 0, 0, 0, N, N, N, N],
    [N, N, N, N, 0, N, N, N, 0, N, N, 0],
    [0, N, N, 0, N, N, N, N, 0, N, N, 0],
    [0, 0, N, N, 0, 0, N, N, 0, N, N, 0],
    [N, 0, N, 0, N, 0, N, N, 0, N, N, 0],
    [N, 0, 0, N, 1, N, 0, N, 1, N, N, 1],
    [0, 0, 0, 0, N, N, 0, N, 0, N, N, 0],
    [0, N, 0, N, 0, 0, 0, N, 0, N, N, 0],
    [N, N, 0, 0, N, 0, 0, N, 0, N, N, 0],
    [N, N, 0, 0, 0, N, N, 0, 0, N, N, 0],
    [0, N, 0, N, N, N, N, 0, 0, N, N, 0],
    [1, 0, 0, 1, 1, 0, N, 0, 0, N, N, 0],
    [N, 0, 0, N, N, 0, N, 0, 0, N, N, 0],
    [N, 0, N, 0, 0, N, 0, 0, 0, N, N, 0],
    [0, 0, N, N, N, N, 0, 0, 0, N, N, 0],
    [0, N, N, 0, 0, 1, 1, 1, 1, N, N, 1],
    [N, N, N, N, N, 0, 0, 0, 0, N, N, 0],
    [N, N, N, N, N, 0, N, N, 0, 0, N, N],
    [0, N, N, 0, 0, 0, N, N, 0, 0, N, N],
    [0, 0, N, N, N, N, N, N, 0, 0, N, N],
    [N, 0, N, 0, 0, N, N, N, 0, 0, N, N],
    [N, 0, 0, N, N, 0, 0, N, 0, 0, N, N],
    [1, 1, 0, 0, 0, 1, 0, N, 0, 0, N, N],
    [0, N, 0, N, N, N, 0, N, 0, 0, N, N],
    [N, N, 0, 0, 0, N, 0, N, 0, 0, N, N],
    [N, N, 0, 0, N, 1, N, 0, 1, 1, N, N],
    [0, N, 0, N, 0, 0, N, 0, 0, 0, N, N],
    [0, 0, 0, 0, N, N, N, 0, 0, 0, N, N],
    [N, 0, 0, N, 0, N, N, 0, 0, 0, N, N],
    [N, 0, N, 0, N, 0, 0, 0, 0, 0, N, N],
    [0, 0, N, N, 1, 0, 1, 1, 1, 1, N, N],
    [0, N, N, 0, N, N, 0, 0, 0, 0, N, N],
    [N, N, N, N, 0, N, 0, 0, 0, 0, N, N],
    [N, N, N, N, 0, 0, N, N, N, 0, N, 0],
    [0, N, N, 0, N, 0, N, N, N, 0, N, 0],
    [0, 0, N, N, 0, N, N, N, N, 0, N, 0],
    [N, 0, N, 0, N, N, N, N, N, 0, N, 0],
    [N, 0, 0, N, 0, 0, 0, N, N, 0, N, 0],
    [0, 0, 1, 1, N, 0, 1, N, N, 1, N, 1],
    [0, N, 0, N, 0, N, 0, N, N, 0, N, 0],
    [N, N, 0, 0, N, N, 0, N, N, 0, N, 0],
    [N, N, 0, 0, 0, 0, N, 0, N, 0, N, 0],
    [0, N, 0, N, N, 0, N, 0, N, 0, N, 0],
    [0, 1, 1, 0, 0, N, N, 1, N, 1, N, 1],
    [N, 0, 0, N, N, N, N, 0, N, 0, N, 0],
    [N, 0, N, 0, 0, 0, 1, 1, N, 1, N, 1],
    [1, 1, N, N, N, 1, 0, 0, N, 0, N, 0],
    [1, N, N, 1, 1, N, 0, 0, N, 0, N, 0],
    [N, N, N, N, N, N, 0, 0, N, 0, N, 0],
    [N, N, N, N, N, N, 0, N, N, 0, 0, N],
    [0, N, N, 0, 0, N, 1, N, N, 1, 1, N],
    [0, 0, N, N, N, 0, 0, N, N, 0, 0, N],
    [N, 0, N, 0, 0, 0, 0, N, N, 0, 0, N],
    [N, 0, 0, N, N, N, N, N, N, 0, 0, N],
    [0, 0, 0, 0, 0, N, N, N, N, 0, 0, N],
    [0, N, 0, N, N, 0, N, N, N, 0, 0, N],
    [N, N, 0, 0, 0, 0, N, N, N, 0, 0, N],
    [N, N, 0, 0, N, N, 0, 0, N, 0, 0, N],
    [0, N, 0, N, 0, N, 0, 0, N, 0, 0, N],
    [0, 1, 1, 0, N, 0, 1, 0, N, 0, 0, N],
    [N, 0, 0, N, 1, 1, 0, 1, N, 1, 1, N],
    [N, 0, N, 0, N, N, N, 0, N, 0, 0, N],
    [0, 0, N, N, 0, N, N, 0, N, 0, 0, N],
    [0, N, N, 0, N, 0, N, 0, N, 0, 0, N],
    [N, N, N, N, 0, 0, N, 0, N, 0, 0, N],
    [N, N, N, N, 0, N, 0, N, 0, 0, 0, 0],
    [0, N, N, 0, N, N, 0, N, 0, 0, 0, 0],
    [0, 0, N, N, 0, 1, 0, N, 1, 1, 0, 0],
    [N, 1, N, 1, N, 0, 1, N, 0, 0, 1, 1],
    [N, 0, 0, N, 0, N, N, N, 0, 0, 0, 0],
    [0, 0, 1, 1, N, N, N, N, 0, 0, 1, 1],
    [1, N, 1, N, 1, 0, N, N, 0, 0, 1, 1],
    [N, N, 0, 0, N, 1, N, N, 1, 1, 0, 0],
    [N, N, 0, 0, 0, N, 0, 1, 0, 0, 1, 1],
    [1, N, 1, N, N, N, 1, 0, 1, 1, 0, 0],
    [0, 1, 1, 0, 0, 2, 1, 3, 2, 2, 3, 3],
    [N, 0, 0, N, N, 1, 0, 2, 1, 1, 2, 2],
    [N, 1, N, 1, 1, N, N, 0, 1, 1, 0, 0],
    [0, 0, N, N, N, N, N, 1, 0, 0, 1, 1],
    [0, N, N, 0, 0, 2, N, 1, 2, 2, 1, 1],
    [N, N, N, N, N, 1, N, 0, 1, 1, 0, 0],
    [N, N, N, N, N, 0, 0, N, 0, N, 0, N],
    [0, N, N, 0, 0, 0, 0, N, 0, N, 0, N],
    [0, 0, N, N, N, N, 0, N, 0, N, 0, N],
    [N, 0, N, 0, 0, N, 0, N, 0, N, 0, N],
    [N, 0, 0, N, N, 0, N, N, 0, N, 0, N],
    [0, 0, 1, 1, 1, 0, N, N, 1, N, 1, N],
    [0, N, 0, N, N, N, N, N, 0, N, 0, N],
    [N, N, 0, 0, 0, N, N, N, 0, N, 0, N],
    [N, N, 0, 0, N, 0, 0, 0, 0, N, 0, N],
    [1, N, 1, N, 0, 1, 1, 0, 0, N, 0, N],
    [1, 0, 0, 1, N, N, 0, 1, 1, N, 1, N],
    [N, 1, 1, N, 0, N, 1, 0, 0, N, 0, N],
    [N, 0, N, 0, N, 0, N, 0, 0, N, 0, N],
    [1, 1, N, N, 0, 1, N, 0, 0, N, 0, N],
    [0, N, N, 0, N, N, N, 0, 0, N, 0, N],
    [N, N, N, N, 0, N, N, 0, 0, N, 0, N],
    [N, N, N, N, 0, 0, 0, N, N, N, 0, 0],
    [0, N, N, 0, N, 0, 0, N, N, N, 0, 0],
    [0, 0, N, N, 0, N, 0, N, N, N, 0, 0],
    [N, 0, N, 0, N, N, 0, N, N, N, 0, 0],
    [N, 0, 0, N, 0, 0, N, N, N, N, 0, 0],
    [1, 1, 0, 0, N, 1, N, N, N, N, 0, 0],
    [0, N, 0, N, 0, N, N, N, N, N, 0, 0],
    [N, N, 0, 0, N, N, N, N, N, N, 0, 0],
    [N, N, 1, 1, 1, 1, 1, 0, N, N, 0, 0],
    [0, N, 0, N, N, 0, 0, 1, N, N, 1, 1],
    [1, 2, 2, 1, 1, N, 2, 0, N, N, 0, 0],
    [N, 0, 0, N, N, N, 0, 1, N, N, 1, 1],
    [N, 0, N, 0, 0, 0, N, 1, N, N, 1, 1],
    [0, 0, N, N, N, 0, N, 1, N, N, 1, 1],
    [1, N, N, 1, 1, N, N, 0, N, N, 0, 0],
    [N, N, N, N, N, N, N, 0, N, N, 0, 0],
    [N, N, N, N, N, N, N, 0, N, N, 0, 0],
    [0, N, N, 0, 0, N, N, 0, N, N, 0, 0],
    [0, 0, N, N, N, 0, N, 1, N, N, 1, 1],
    [N, 0, N, 0, 0, 0, N, 0, N, N, 0, 0],
    [N, 0, 0, N, N, N, 0, 0, N, N, 0, 0],
    [0, 0, 1, 1, 0, N, 0, 1, N, N, 0, 0],
    [0, N, 0, N, N, 0, 0, 0, N, N, 0, 0],
    [N, N, 0, 0, 1, 1, 1, 0, N, N, 1, 1],
    [N, N, 0, 0, N, N, N, N, N, N, 0, 0],
    [0, N, 0, N, 0, N, N, N, N, N, 0, 0],
    [0, 0, 0, 0, N, 0, N, N, N, N, 0, 0],
    [N, 0, 0, N, 0, 0, N, N, N, N, 0, 0],
    [N, 0, N, 0, N, N, 0, N, N, N, 0, 0],
    [0, 0, N, N, 0, N, 0, N, N, N, 0, 0],
    [0, N, N, 0, N, 0, 0, N, N, N, 0, 0],
    [N, N, N, N, 0, 0, 0, N, N, N, 0, 0],
    [N, N, N, N, 0, N, N, 0, 0, N, 0, N],
    [0, N, N, 0, N, N, N, 0, 0, N, 0, N],
    [0, 0, N, N, 0, 0, N, 0, 0, N, 0, N],
    [N, 0, N, 0, N, 0, N, 0, 0, N, 0, N],
    [N, 0, 0, N, 0, N, 0, 0, 0, N, 0, N],
    [1, 1, 0, 0, N, N, 1, 0, 1, N, 1, N],
    [0, N, 0, N, 0, 1, 1, 0, 1, N, 1, N],
    [N, N, 1, 1, N, 0, 0, 1, 0, N, 0, N],
    [N, N, 0, 0, 0, N, N, N, 0, N, 0, N],
    [0, N, 0, N, N, N, N, N, 0, N, 0, N],
    [0, 1, 1, 0, 0, 1, N, N, 1, N, 1, N],
    [N, 0, 0, N, N, 0, N, N, 0, N, 0, N],
    [N, 0, N, 0, 0, N, 0, N, 0, N, 0, N],
    [0, 0, N, N, N, N, 0, N, 0, N, 0, N],
    [1, N, N, 1, 1, 0, 0, N, 0, N, 0, N],
    [N, N, N, N, N, 0, 0, N, 0, N, 0, N],
    [N, N, N, N, N, 0, N, 0, 0, 0, 0, 0],
    [0, N, N, 0, 1, 0, N, 0, 1, 0, 0, 1],
    [0, 0, N, N, N, N, N, 0, 0, 0, 0, 0],
    [N, 1, N, 1, 0, N, N, 1, 0, 1, 1, 0],
    [N, 0, 0, N, N, 0, 1, 0, 0, 1, 1, 0],
    [0, 0, 1, 1, 3, 0, 2, 1, 3, 2, 2, 3],
    [1, N, 1, N, N, N, 0, 1, 1, 0, 0, 1],
    [N, N, 0, 0, 2, N, 1, 0, 2, 1, 1, 2],
    [N, N, 0, 0, N, 0, N, N, 0, 0, 0, 0],
    [1, N, 1, N, 0, 1, N, N, 0, 1, 1, 0],
    [0, 1, 1, 0, N, N, N, N, 0, 1, 1, 0],
    [N, 0, 0, N, 1, N, N, N, 1, 0, 0, 1],
    [N, 1, N, 1, N, 1, 0, N, 1, 0, 0, 1],
    [0, 0, N, N, 1, 0, 2, N, 1, 2, 2, 1],
    [0, N, N, 0, N, N, 1, N, 0, 1, 1, 0],
    [N, N, N, N, 1, N, 0, N, 1, 0, 0, 1],
    [N, N, N, N, 0, 0, N, 0, N, 0, 0, N],
    [0, N, N, 0, N, 0, N, 0, N, 0, 0, N],
    [0, 0, N, N, 0, N, N, 0, N, 0, 0, N],
    [N, 0, N, 0, N, N, N, 0, N, 0, 0, N],
    [N, 1, 1, N, 1, 1, 0, 1, N, 0, 0, N],
    [2, 2, 1, 1, N, 2, 0, 1, N, 0, 0, N],
    [0, N, 0, N, 0, N, 1, 0, N, 1, 1, N],
    [N, N, 0, 0, N, N, 1, 0, N, 1, 1, N],
    [N, N, 0, 0, 0, 0, N, N, N, 0, 0, N],
    [0, N, 0, N, N, 0, N, N, N, 0, 0, N],
    [1, 0, 0, 1, 1, N, N, N, N, 0, 0, N],
    [N, 0, 0, N, N, N, N, N, N, 0, 0, N],
    [N, 0, N, 0, 0, 0, 1, N, N, 1, 1, N],
    [1, 1, N, N, N, 1, 0, N, N, 0, 0, N],
    [0, N, N, 0, 0, N, 1, N, N, 1, 1, N],
    [N, N, N, N, N, N, 0, N, N, 0, 0, N],
    [N, N, N, N, N, N, 0, 0, N, 0, N, 0],
    [0, N, N, 0, 0, N, 0, 0, N, 0, N, 0],
    [0, 0, N, N, N, 0, 0, 0, N, 0, N, 0],
    [N, 1, N, 1, 0, 0, 1, 1, N, 0, N, 0],
    [N, 0, 0, N, N, N, N, 0, N, 0, N, 0],
    [1, 1, 0, 0, 1, N, N, 0, N, 1, N, 1],
    [0, N, 0, N, N, 0, N, 0, N, 0, N, 0],
    [N, N, 1, 1, 0, 0, N, 1, N, 0, N, 0],
    [N, N, 0, 0, N, N, 0, N, N, 0, N, 0],
    [0, N, 0, N, 0, N, 0, N, N, 0, N, 0],
    [1, 0, 0, 1, N, 1, 0, N, N, 1, N, 1],
    [N, 1, 1, N, 0, 0, 1, N, N, 0, N, 0],
    [N, 0, N, 0, N, N, N, N, N, 0, N, 0],
    [0, 0, N, N, 0, N, N, N, N, 0, N, 0],
    [0, N, N, 0, N, 0, N, N, N, 0, N, 0],
    [N, N, N, N, 0, 0, N, N, N, 0, N, 0],
    [N, N, N, N, 0, N, 0, 0, 0, 0, N, N],
    [0, N, N, 0, N, N, 0, 0, 0, 0, N, N],
    [1, 1, N, N, 1, 0, 1, 1, 0, 0, N, N],
    [N, 0, N, 0, N, 1, 0, 0, 1, 1, N, N],
    [N, 0, 0, N, 0, N, N, 0, 0, 0, N, N],
    [0, 0, 1, 1, N, N, N, 1, 0, 0, N, N],
    [0, N, 0, N, 0, 1, N, 0, 1, 1, N, N],
    [N, N, 0, 0, N, 1, N, 0, 1, 1, N, N],
    [N, N, 0, 0, 0, N, 0, N, 0, 0, N, N],
    [0, N, 0, N, N, N, 0, N, 0, 0, N, N],
    [1, 0, 0, 1, 1, 2, 0, N, 2, 2, N, N],
    [N, 0, 0, N, N, 1, 0, N, 1, 1, N, N],
    [N, 0, N, 0, 0, N, N, N, 0, 0, N, N],
    [0, 0, N, N, N, N, N, N, 0, 0, N, N],
    [1, N, N, 1, 1, 0, N, N, 0, 0, N, N],
    [N, N, N, N, N, 0, N, N, 0, 0, N, N],
    [N, N, N, N, N, 0, 0, 0, 0, N, N, 0],
    [1, N, N, 1, 0, 1, 1, 1, 0, N, N, 0],
    [0, 0, N, N, N, N, 0, 0, 0, N, N, 0],
    [N, 0, N, 0, 1, N, 0, 0, 1, N, N, 1],
    [N, 0, 0, N, N, 0, N, 0, 0, N, N, 0],
    [2, 2, 0, 0, 1, 2, N, 0, 1, N, N, 1],
    [0, N, 0, N, N, N, N, 0, 0, N, N, 0],
    [N, N, 1, 1, 0, N, N, 1, 0, N, N, 0],
    [N, N, 0, 0, N, 0, 0, N, 0, N, N, 0],
    [0, N, 0, N, 1, 0, 0, N, 1, N, N, 1],
    [0, 1, 1, 0, N, N, 1, N, 0, N, N, 0],
    [N, 0, 0, N, 1, N, 0, N, 1, N, N, 1],
    [N, 0, N, 0, N, 0, N, N, 0, N, N, 0],
    [0, 0, N, N, 1, 0, N, N, 1, N, N, 1],
    [0, N, N, 0, N, N, N, N, 0, N, N, 0],
    [N, N, N, N, 0, N, N, N, 0, N, N, 0],
    [N, N, N, N, 0, 0, 0, 0, N, N, N, N],
    [0, N, N, 0, N, 0, 0, 0, N, N, N, N],
    [0, 0, N, N, 0, N, 0, 0, N, N, N, N],
    [N, 0, N, 0, N, N, 0, 0, N, N, N, N],
    [N, 0, 0, N, 0, 0, N, 0, N, N, N, N],
    [0, 0, 1, 1, N, 0, N, 1, N, N, N, N],
    [0, N, 0, N, 0, N, N, 0, N, N, N, N],
    [N, N, 0, 0, N, N, N, 0, N, N, N, N],
    [N, N, 0, 0, 0, 0, 0, N, N, N, N, N],
    [0, N, 0, N, N, 0, 0, N, N, N, N, N],
    [1, 0, 0, 1, 1, N, 0, N, N, N, N, N],
    [N, 0, 0, N, N, N, 0, N, N, N, N, N],
    [N, 0, N, 0, 0, 0, N, N, N, N, N, N],
    [0, 0, N, N, N, 0, N, N, N, N, N, N],
    [0, N, N, 0, 0, N, N, N, N, N, N, N],
    [N, N, N, N, N, N, N, N, N, N, N, N],
];

/// Number of dual vertices each config produces under [`CONFIG_EDGE_LUT1`].
pub(crate) const NUM_VERTEX_LUT1: [u8; 256] = [
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 2, 1,
    1, 1, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 1, 1,
    1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 2, 1, 2, 2, 2, 1,
    1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 1, 1, 1, 1,
    1, 1, 2, 2, 1, 2, 2, 2, 2, 2, 4, 3, 2, 2, 3, 2,
    1, 1, 1, 1, 1, 2, 1, 1, 1, 2, 2, 2, 1, 2, 1, 1,
    1, 1, 1, 1, 1, 2, 1, 1, 2, 2, 3, 2, 2, 2, 2, 1,
    1, 1, 2, 1, 1, 2, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 2, 2, 2, 1, 1, 2, 1, 1, 1, 2, 1,
    1, 2, 1, 2, 2, 4, 2, 3, 1, 2, 2, 2, 2, 3, 2, 2,
    1, 1, 1, 1, 2, 3, 2, 2, 1, 1, 2, 1, 2, 2, 2, 1,
    1, 1, 1, 2, 1, 2, 1, 2, 1, 1, 2, 2, 1, 1, 1, 1,
    1, 1, 2, 2, 1, 2, 2, 2, 1, 1, 3, 2, 1, 1, 2, 1,
    1, 2, 1, 2, 1, 3, 1, 2, 1, 2, 2, 2, 1, 2, 1, 1,
    1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 2, 1, 1, 1, 1, 0,
];

/// Alternate table, splitting the dual vertex of the 2B/3B configs that face each other.
pub(crate) const CONFIG_EDGE_LUT2: [[u8; 12]; 256] = [
    [N, N, N, N, N, N, N, N, N, N, N, N],
    [0, N, N, 0, 0, N, N, N, N, N, N, N],
    [0, 0, N, N, N, 0, N, N, N, N, N, N],
    [N, 0, N, 0, 0, 0, N, N, N, N, N, N],
    [N, 0, 0, N, N, N, 0, N, N, N, N, N],
    [1, 0, 0, 1, 1, N, 0, N, N, N, N, N],
    [0, N, 0, N, N, 0, 0, N, N, N, N, N],
    [N, N, 0, 0, 0, 0, 0, N, N, N, N, N],
    [N, N, 0, 0, N, N, N, 0, N, N, N, N],
    [0, N, 0, N, 0, N, N, 0, N, N, N, N],
    [0, 0, 1, 1, N, 0, N, 1, N, N, N, N],
    [N, 0, 0, N, 0, 0, N, 0, N, N, N, N],
    [N, 0, N, 0, N, N, 0, 0, N, N, N, N],
    [0, 0, N, N, 0, N, 0, 0, N, N, N, N],
    [0, N, N, 0, N, 0, 0, 0, N, N, N, N],
    [N, N, N, N, 0, 0, 0, 0, N, N, N, N],
    [N, N, N, N, 0, N, N, N, 0, N, N, 0],
    [0, N, N, 0, N, N, N, N, 0, N, N, 0],
    [0, 0, N, N, 1, 0, N, N, 1, N, N, 1],
    [N, 0, N, 0, N, 0, N, N, 0, N, N, 0],
    [N, 0, 0, N, 1, N, 0, N, 1, N, N, 1],
    [0, 1, 1, 0, N, N, 1, N, 0, N, N, 0],
    [0, N, 0, N, 1, 0, 0, N, 1, N, N, 1],
    [N, N, 0, 0, N, 0, 0, N, 0, N, N, 0],
    [N, N, 1, 1, 0, N, N, 1, 0, N, N, 0],
    [0, N, 0, N, N, N, N, 0, 0, N, N, 0],
    [1, 0, 0, 1, 1, 0, N, 0, 0, N, N, 0],
    [N, 0, 0, N, N, 0, N, 0, 0, N, N, 0],
    [N, 0, N, 0, 1, N, 0, 0, 1, N, N, 1],
    [0, 0, N, N, N, N, 0, 0, 0, N, N, 0],
    [0, N, N, 0, 0, 1, 1, 1, 1, N, N, 1],
    [N, N, N, N, N, 0, 0, 0, 0, N, N, 0],
    [N, N, N, N, N, 0, N, N, 0, 0, N, N],
    [1, N, N, 1, 1, 0, N, N, 0, 0, N, N],
    [0, 0, N, N, N, N, N, N, 0, 0, N, N],
    [N, 0, N, 0, 0, N, N, N, 0, 0, N, N],
    [N, 0, 0, N, N, 1, 0, N, 1, 1, N, N],
    [1, 1, 0, 0, 0, 1, 0, N, 0, 0, N, N],
    [0, N, 0, N, N, N, 0, N, 0, 0, N, N],
    [N, N, 0, 0, 0, N, 0, N, 0, 0, N, N],
    [N, N, 0, 0, N, 1, N, 0, 1, 1, N, N],
    [0, N, 0, N, 0, 1, N, 0, 1, 1, N, N],
    [0, 0, 1, 1, N, N, N, 1, 0, 0, N, N],
    [N, 0, 0, N, 0, N, N, 0, 0, 0, N, N],
    [N, 0, N, 0, N, 1, 0, 0, 1, 1, N, N],
    [0, 0, N, N, 1, 0, 1, 1, 1, 1, N, N],
    [0, N, N, 0, N, N, 0, 0, 0, 0, N, N],
    [N, N, N, N, 0, N, 0, 0, 0, 0, N, N],
    [N, N, N, N, 0, 0, N, N, N, 0, N, 0],
    [0, N, N, 0, N, 0, N, N, N, 0, N, 0],
    [0, 0, N, N, 0, N, N, N, N, 0, N, 0],
    [N, 0, N, 0, N, N, N, N, N, 0, N, 0],
    [N, 1, 1, N, 0, 0, 1, N, N, 0, N, 0],
    [0, 0, 1, 1, N, 0, 1, N, N, 1, N, 1],
    [0, N, 0, N, 0, N, 0, N, N, 0, N, 0],
    [N, N, 0, 0, N, N, 0, N, N, 0, N, 0],
    [N, N, 1, 1, 0, 0, N, 1, N, 0, N, 0],
    [0, N, 0, N, N, 0, N, 0, N, 0, N, 0],
    [0, 1, 1, 0, 0, N, N, 1, N, 1, N, 1],
    [N, 0, 0, N, N, N, N, 0, N, 0, N, 0],
    [N, 0, N, 0, 0, 0, 1, 1, N, 1, N, 1],
    [1, 1, N, N, N, 1, 0, 0, N, 0, N, 0],
    [1, N, N, 1, 1, N, 0, 0, N, 0, N, 0],
    [N, N, N, N, N, N, 0, 0, N, 0, N, 0],
    [N, N, N, N, N, N, 0, N, N, 0, 0, N],
    [0, N, N, 0, 0, N, 1, N, N, 1, 1, N],
    [1, 1, N, N, N, 1, 0, N, N, 0, 0, N],
    [N, 0, N, 0, 0, 0, 1, N, N, 1, 1, N],
    [N, 0, 0, N, N, N, N, N, N, 0, 0, N],
    [1, 0, 0, 1, 1, N, N, N, N, 0, 0, N],
    [0, N, 0, N, N, 0, N, N, N, 0, 0, N],
    [N, N, 0, 0, 0, 0, N, N, N, 0, 0, N],
    [N, N, 0, 0, N, N, 1, 0, N, 1, 1, N],
    [0, N, 0, N, 0, N, 1, 0, N, 1, 1, N],
    [0, 1, 1, 0, N, 0, 1, 0, N, 0, 0, N],
    [N, 0, 0, N, 1, 1, 0, 1, N, 1, 1, N],
    [N, 0, N, 0, N, N, N, 0, N, 0, 0, N],
    [0, 0, N, N, 0, N, N, 0, N, 0, 0, N],
    [0, N, N, 0, N, 0, N, 0, N, 0, 0, N],
    [N, N, N, N, 0, 0, N, 0, N, 0, 0, N],
    [N, N, N, N, 1, N, 0, N, 1, 0, 0, 1],
    [0, N, N, 0, N, N, 1, N, 0, 1, 1, 0],
    [0, 0, N, N, 0, 1, 0, N, 1, 1, 0, 0],
    [N, 1, N, 1, N, 0, 1, N, 0, 0, 1, 1],
    [N, 0, 0, N, 1, N, N, N, 1, 0, 0, 1],
    [0, 0, 1, 1, N, N, N, N, 0, 0, 1, 1],
    [1, N, 1, N, 1, 0, N, N, 0, 0, 1, 1],
    [N, N, 0, 0, N, 1, N, N, 1, 1, 0, 0],
    [N, N, 0, 0, 0, N, 0, 1, 0, 0, 1, 1],
    [1, N, 1, N, N, N, 1, 0, 1, 1, 0, 0],
    [0, 1, 1, 0, 0, 2, 1, 3, 2, 2, 3, 3],
    [N, 0, 0, N, N, 1, 0, 2, 1, 1, 2, 2],
    [N, 1, N, 1, 1, N, N, 0, 1, 1, 0, 0],
    [0, 0, N, N, N, N, N, 1, 0, 0, 1, 1],
    [0, N, N, 0, 0, 2, N, 1, 2, 2, 1, 1],
    [N, N, N, N, N, 1, N, 0, 1, 1, 0, 0],
    [N, N, N, N, N, 0, 0, N, 0, N, 0, N],
    [1, N, N, 1, 1, 0, 0, N, 0, N, 0, N],
    [0, 0, N, N, N, N, 0, N, 0, N, 0, N],
    [N, 0, N, 0, 0, N, 0, N, 0, N, 0, N],
    [N, 0, 0, N, N, 0, N, N, 0, N, 0, N],
    [0, 0, 1, 1, 1, 0, N, N, 1, N, 1, N],
    [0, N, 0, N, N, N, N, N, 0, N, 0, N],
    [N, N, 0, 0, 0, N, N, N, 0, N, 0, N],
    [N, N, 1, 1, N, 0, 0, 1, 0, N, 0, N],
    [1, N, 1, N, 0, 1, 1, 0, 0, N, 0, N],
    [1, 0, 0, 1, N, N, 0, 1, 1, N, 1, N],
    [N, 1, 1, N, 0, N, 1, 0, 0, N, 0, N],
    [N, 0, N, 0, N, 0, N, 0, 0, N, 0, N],
    [1, 1, N, N, 0, 1, N, 0, 0, N, 0, N],
    [0, N, N, 0, N, N, N, 0, 0, N, 0, N],
    [N, N, N, N, 0, N, N, 0, 0, N, 0, N],
    [N, N, N, N, 0, 0, 0, N, N, N, 0, 0],
    [0, N, N, 0, N, 0, 0, N, N, N, 0, 0],
    [0, 0, N, N, 0, N, 0, N, N, N, 0, 0],
    [N, 0, N, 0, N, N, 0, N, N, N, 0, 0],
    [N, 0, 0, N, 0, 0, N, N, N, N, 0, 0],
    [1, 1, 0, 0, N, 1, N, N, N, N, 0, 0],
    [0, N, 0, N, 0, N, N, N, N, N, 0, 0],
    [N, N, 0, 0, N, N, N, N, N, N, 0, 0],
    [N, N, 1, 1, 1, 1, 1, 0, N, N, 0, 0],
    [0, N, 0, N, N, 0, 0, 1, N, N, 1, 1],
    [1, 2, 2, 1, 1, N, 2, 0, N, N, 0, 0],
    [N, 0, 0, N, N, N, 0, 1, N, N, 1, 1],
    [N, 0, N, 0, 0, 0, N, 1, N, N, 1, 1],
    [0, 0, N, N, N, 0, N, 1, N, N, 1, 1],
    [1, N, N, 1, 1, N, N, 0, N, N, 0, 0],
    [N, N, N, N, N, N, N, 0, N, N, 0, 0],
    [N, N, N, N, N, N, N, 0, N, N, 0, 0],
    [1, N, N, 1, 1, N, N, 0, N, N, 0, 0],
    [0, 0, N, N, N, 0, N, 1, N, N, 1, 1],
    [N, 0, N, 0, 0, 0, N, 1, N, N, 1, 1],
    [N, 0, 0, N, N, N, 0, 1, N, N, 1, 1],
    [0, 0, 1, 1, 0, N, 0, 1, N, N, 0, 0],
    [0, N, 0, N, N, 0, 0, 1, N, N, 1, 1],
    [N, N, 0, 0, 1, 1, 1, 0, N, N, 1, 1],
    [N, N, 0, 0, N, N, N, N, N, N, 0, 0],
    [0, N, 0, N, 0, N, N, N, N, N, 0, 0],
    [1, 1, 0, 0, N, 1, N, N, N, N, 0, 0],
    [N, 0, 0, N, 0, 0, N, N, N, N, 0, 0],
    [N, 0, N, 0, N, N, 0, N, N, N, 0, 0],
    [0, 0, N, N, 0, N, 0, N, N, N, 0, 0],
    [0, N, N, 0, N, 0, 0, N, N, N, 0, 0],
    [N, N, N, N, 0, 0, 0, N, N, N, 0, 0],
    [N, N, N, N, 0, N, N, 0, 0, N, 0, N],
    [0, N, N, 0, N, N, N, 0, 0, N, 0, N],
    [1, 1, N, N, 0, 1, N, 0, 0, N, 0, N],
    [N, 0, N, 0, N, 0, N, 0, 0, N, 0, N],
    [N, 1, 1, N, 0, N, 1, 0, 0, N, 0, N],
    [1, 1, 0, 0, N, N, 1, 0, 1, N, 1, N],
    [0, N, 0, N, 0, 1, 1, 0, 1, N, 1, N],
    [N, N, 1, 1, N, 0, 0, 1, 0, N, 0, N],
    [N, N, 0, 0, 0, N, N, N, 0, N, 0, N],
    [0, N, 0, N, N, N, N, N, 0, N, 0, N],
    [0, 1, 1, 0, 0, 1, N, N, 1, N, 1, N],
    [N, 0, 0, N, N, 0, N, N, 0, N, 0, N],
    [N, 0, N, 0, 0, N, 0, N, 0, N, 0, N],
    [0, 0, N, N, N, N, 0, N, 0, N, 0, N],
    [1, N, N, 1, 1, 0, 0, N, 0, N, 0, N],
    [N, N, N, N, N, 0, 0, N, 0, N, 0, N],
    [N, N, N, N, N, 1, N, 0, 1, 1, 0, 0],
    [0, N, N, 0, 1, 0, N, 0, 1, 0, 0, 1],
    [0, 0, N, N, N, N, N, 1, 0, 0, 1, 1],
    [N, 1, N, 1, 0, N, N, 1, 0, 1, 1, 0],
    [N, 0, 0, N, N, 0, 1, 0, 0, 1, 1, 0],
    [0, 0, 1, 1, 3, 0, 2, 1, 3, 2, 2, 3],
    [1, N, 1, N, N, N, 0, 1, 1, 0, 0, 1],
    [N, N, 0, 0, 2, N, 1, 0, 2, 1, 1, 2],
    [N, N, 0, 0, N, 1, N, N, 1, 1, 0, 0],
    [1, N, 1, N, 0, 1, N, N, 0, 1, 1, 0],
    [0, 1, 1, 0, N, N, N, N, 0, 1, 1, 0],
    [N, 0, 0, N, 1, N, N, N, 1, 0, 0, 1],
    [N, 1, N, 1, N, 1, 0, N, 1, 0, 0, 1],
    [0, 0, N, N, 1, 0, 2, N, 1, 2, 2, 1],
    [0, N, N, 0, N, N, 1, N, 0, 1, 1, 0],
    [N, N, N, N, 1, N, 0, N, 1, 0, 0, 1],
    [N, N, N, N, 0, 0, N, 0, N, 0, 0, N],
    [0, N, N, 0, N, 0, N, 0, N, 0, 0, N],
    [0, 0, N, N, 0, N, N, 0, N, 0, 0, N],
    [N, 0, N, 0, N, N, N, 0, N, 0, 0, N],
    [N, 1, 1, N, 1, 1, 0, 1, N, 0, 0, N],
    [2, 2, 1, 1, N, 2, 0, 1, N, 0, 0, N],
    [0, N, 0, N, 0, N, 1, 0, N, 1, 1, N],
    [N, N, 0, 0, N, N, 1, 0, N, 1, 1, N],
    [N, N, 0, 0, 0, 0, N, N, N, 0, 0, N],
    [0, N, 0, N, N, 0, N, N, N, 0, 0, N],
    [1, 0, 0, 1, 1, N, N, N, N, 0, 0, N],
    [N, 0, 0, N, N, N, N, N, N, 0, 0, N],
    [N, 0, N, 0, 0, 0, 1, N, N, 1, 1, N],
    [1, 1, N, N, N, 1, 0, N, N, 0, 0, N],
    [0, N, N, 0, 0, N, 1, N, N, 1, 1, N],
    [N, N, N, N, N, N, 0, N, N, 0, 0, N],
    [N, N, N, N, N, N, 0, 0, N, 0, N, 0],
    [1, N, N, 1, 1, N, 0, 0, N, 0, N, 0],
    [1, 1, N, N, N, 1, 0, 0, N, 0, N, 0],
    [N, 1, N, 1, 0, 0, 1, 1, N, 0, N, 0],
    [N, 0, 0, N, N, N, N, 0, N, 0, N, 0],
    [1, 1, 0, 0, 1, N, N, 0, N, 1, N, 1],
    [0, N, 0, N, N, 0, N, 0, N, 0, N, 0],
    [N, N, 1, 1, 0, 0, N, 1, N, 0, N, 0],
    [N, N, 0, 0, N, N, 0, N, N, 0, N, 0],
    [0, N, 0, N, 0, N, 0, N, N, 0, N, 0],
    [1, 0, 0, 1, N, 1, 0, N, N, 1, N, 1],
    [N, 1, 1, N, 0, 0, 1, N, N, 0, N, 0],
    [N, 0, N, 0, N, N, N, N, N, 0, N, 0],
    [0, 0, N, N, 0, N, N, N, N, 0, N, 0],
    [0, N, N, 0, N, 0, N, N, N, 0, N, 0],
    [N, N, N, N, 0, 0, N, N, N, 0, N, 0],
    [N, N, N, N, 0, N, 0, 0, 0, 0, N, N],
    [0, N, N, 0, N, N, 0, 0, 0, 0, N, N],
    [1, 1, N, N, 1, 0, 1, 1, 0, 0, N, N],
    [N, 0, N, 0, N, 1, 0, 0, 1, 1, N, N],
    [N, 0, 0, N, 0, N, N, 0, 0, 0, N, N],
    [0, 0, 1, 1, N, N, N, 1, 0, 0, N, N],
    [0, N, 0, N, 0, 1, N, 0, 1, 1, N, N],
    [N, N, 0, 0, N, 1, N, 0, 1, 1, N, N],
    [N, N, 0, 0, 0, N, 0, N, 0, 0, N, N],
    [0, N, 0, N, N, N, 0, N, 0, 0, N, N],
    [1, 0, 0, 1, 1, 2, 0, N, 2, 2, N, N],
    [N, 0, 0, N, N, 1, 0, N, 1, 1, N, N],
    [N, 0, N, 0, 0, N, N, N, 0, 0, N, N],
    [0, 0, N, N, N, N, N, N, 0, 0, N, N],
    [1, N, N, 1, 1, 0, N, N, 0, 0, N, N],
    [N, N, N, N, N, 0, N, N, 0, 0, N, N],
    [N, N, N, N, N, 0, 0, 0, 0, N, N, 0],
    [1, N, N, 1, 0, 1, 1, 1, 0, N, N, 0],
    [0, 0, N, N, N, N, 0, 0, 0, N, N, 0],
    [N, 0, N, 0, 1, N, 0, 0, 1, N, N, 1],
    [N, 0, 0, N, N, 0, N, 0, 0, N, N, 0],
    [2, 2, 0, 0, 1, 2, N, 0, 1, N, N, 1],
    [0, N, 0, N, N, N, N, 0, 0, N, N, 0],
    [N, N, 1, 1, 0, N, N, 1, 0, N, N, 0],
    [N, N, 0, 0, N, 0, 0, N, 0, N, N, 0],
    [0, N, 0, N, 1, 0, 0, N, 1, N, N, 1],
    [0, 1, 1, 0, N, N, 1, N, 0, N, N, 0],
    [N, 0, 0, N, 1, N, 0, N, 1, N, N, 1],
    [N, 0, N, 0, N, 0, N, N, 0, N, N, 0],
    [0, 0, N, N, 1, 0, N, N, 1, N, N, 1],
    [0, N, N, 0, N, N, N, N, 0, N, N, 0],
    [N, N, N, N, 0, N, N, N, 0, N, N, 0],
    [N, N, N, N, 0, 0, 0, 0, N, N, N, N],
    [0, N, N, 0, N, 0, 0, 0, N, N, N, N],
    [0, 0, N, N, 0, N, 0, 0, N, N, N, N],
    [N, 0, N, 0, N, N, 0, 0, N, N, N, N],
    [N, 0, 0, N, 0, 0, N, 0, N, N, N, N],
    [0, 0, 1, 1, N, 0, N, 1, N, N, N, N],
    [0, N, 0, N, 0, N, N, 0, N, N, N, N],
    [N, N, 0, 0, N, N, N, 0, N, N, N, N],
    [N, N, 0, 0, 0, 0, 0, N, N, N, N, N],
    [0, N, 0, N, N, 0, 0, N, N, N, N, N],
    [1, 0, 0, 1, 1, N, 0, N, N, N, N, N],
    [N, 0, 0, N, N, N, 0, N, N, N, N, N],
    [N, 0, N, 0, 0, 0, N, N, N, N, N, N],
    [0, 0, N, N, N, 0, N, N, N, N, N, N],
    [0, N, N, 0, 0, N, N, N, N, N, N, N],
    [N, N, N, N, N, N, N, N, N, N, N, N],
];

/// Number of dual vertices each config produces under [`CONFIG_EDGE_LUT2`].
pub(crate) const NUM_VERTEX_LUT2: [u8; 256] = [
    0, 1, 1, 1, 1, 2, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1,
    1, 1, 2, 1, 2, 2, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1,
    1, 2, 1, 1, 2, 2, 1, 1, 2, 2, 2, 1, 2, 2, 1, 1,
    1, 1, 1, 1, 2, 2, 1, 1, 2, 1, 2, 1, 2, 2, 2, 1,
    1, 2, 2, 2, 1, 2, 1, 1, 2, 2, 2, 2, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 4, 3, 2, 2, 3, 2,
    1, 2, 1, 1, 1, 2, 1, 1, 2, 2, 2, 2, 1, 2, 1, 1,
    1, 1, 1, 1, 1, 2, 1, 1, 2, 2, 3, 2, 2, 2, 2, 1,
    1, 2, 2, 2, 2, 2, 2, 2, 1, 1, 2, 1, 1, 1, 1, 1,
    1, 1, 2, 1, 2, 2, 2, 2, 1, 1, 2, 1, 1, 1, 2, 1,
    2, 2, 2, 2, 2, 4, 2, 3, 2, 2, 2, 2, 2, 3, 2, 2,
    1, 1, 1, 1, 2, 3, 2, 2, 1, 1, 2, 1, 2, 2, 2, 1,
    1, 2, 2, 2, 1, 2, 1, 2, 1, 1, 2, 2, 1, 1, 1, 1,
    1, 1, 2, 2, 1, 2, 2, 2, 1, 1, 3, 2, 1, 1, 2, 1,
    1, 2, 1, 2, 1, 3, 1, 2, 1, 2, 2, 2, 1, 2, 1, 1,
    1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 2, 1, 1, 1, 1, 0,
];

/// Number of configs in [`AMBIGUOUS_CONFIGS`].
pub(crate) const AMBIGUOUS_CONFIG_COUNT: usize = 36;

/// Configs with exactly one ambiguous face: the 12 two-corner (2B) cases followed by the 24
/// three-corner (3B) cases.
pub(crate) const AMBIGUOUS_CONFIGS: [u8; AMBIGUOUS_CONFIG_COUNT] = [
    0xa0, 0x21, 0x42, 0x84, 0x05, 0x81, 0x48, 0x0a, 0x50, 0x12, 0x18, 0x24, // 2B
    0xc1, 0xc2, 0x83, 0x45, 0x86, 0x49, 0x8a, 0x51, 0x92, 0x43, 0x54, 0x15, // 3B
    0x16, 0x1c, 0x61, 0xa2, 0xa8, 0x29, 0x2a, 0x2c, 0x68, 0x34, 0x38, 0x94,
];

/// The ambiguous face of each entry of [`AMBIGUOUS_CONFIGS`].
pub(crate) const AMBIGUOUS_FACES: [u8; AMBIGUOUS_CONFIG_COUNT] = [
    5, 1, 2, 3, 0, 4, 3, 0, 5, 1, 4, 2, //
    4, 2, 4, 0, 3, 3, 0, 5, 1, 2, 5, 0, //
    1, 4, 1, 5, 5, 1, 0, 2, 3, 2, 4, 3,
];

/// Faces are `z-`, `y-`, `x+`, `y+`, `x-`, `z+`, in that order.
pub(crate) const OPPOSITE_FACE: [u8; 6] = [5, 3, 4, 1, 2, 0];

/// Direction to the voxel across each face.
pub(crate) const FACE_NEIGHBOR_OFFSETS: [[i32; 3]; 6] = [
    [0, 0, -1],
    [0, -1, 0],
    [1, 0, 0],
    [0, 1, 0],
    [-1, 0, 0],
    [0, 0, 1],
];

/// The voxel that owns a local edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EdgeOwner {
    /// The voxel itself owns the edge.
    Local,
    /// The voxel at `offset` owns the edge, as its local edge `edge`.
    Neighbor { offset: [i32; 3], edge: u8 },
}

const fn neighbor(x: i32, y: i32, z: i32, edge: u8) -> EdgeOwner {
    EdgeOwner::Neighbor {
        offset: [x, y, z],
        edge,
    }
}

/// Owner of each local edge. Owners always sit at non-positive offsets.
pub(crate) const EDGE_OWNERS: [EdgeOwner; 12] = [
    neighbor(0, -1, -1, 10),
    neighbor(0, 0, -1, 9),
    neighbor(0, 0, -1, 10),
    neighbor(-1, 0, -1, 9),
    neighbor(-1, -1, 0, 6),
    neighbor(0, -1, 0, 6),
    EdgeOwner::Local,
    neighbor(-1, 0, 0, 6),
    neighbor(0, -1, 0, 10),
    EdgeOwner::Local,
    EdgeOwner::Local,
    neighbor(-1, 0, 0, 9),
];

/// For the owned edges 6, 9 and 10: the local edge by which each of the four voxels around the
/// physical edge sees it, counter-clockwise when looking down the positive axis.
pub(crate) const CIRCULAR_EDGES: [[u8; 4]; 3] = [[6, 7, 4, 5], [9, 1, 3, 11], [10, 8, 0, 2]];

pub(crate) const CCW_ORDER: [usize; 4] = [0, 1, 2, 3];
pub(crate) const CW_ORDER: [usize; 4] = [0, 3, 2, 1];
