//! The first three stages: corner classification, compaction of the active voxels and encoding
//! of the owned edges that cross the surface.

use crate::field::{corner_values, ScalarField, VoxelGrid};
use crate::tables::CORNER_PAIR_EDGE;
use crate::voxel::{FullIndexMap, OwnedEdge, VoxelInfo};

use rayon::prelude::*;

/// Corner mask of a voxel: bit `i` is set when `values[i] < iso_value`.
pub(crate) fn config_mask(values: &[f32; 8], iso_value: f32) -> u8 {
    values
        .iter()
        .enumerate()
        .filter(|(_, &value)| value < iso_value)
        .fold(0, |mask, (corner, _)| mask | 1 << corner)
}

/// Whether a mask belongs to a voxel the surface passes through.
pub(crate) fn is_active(config: u8) -> bool {
    config != 0 && config != 0xff
}

/// Whether the surface crosses the edge between two samples. Equal samples never do.
pub(crate) fn is_edge_bipolar(v0: f32, v1: f32, iso_value: f32) -> bool {
    if v0 == v1 {
        return false;
    }
    let both_below = v0 < iso_value && v1 < iso_value;
    let both_above = v0 > iso_value && v1 > iso_value;
    !(both_below || both_above)
}

/// Computes the corner mask of every voxel of the grid, in scan order.
pub(crate) fn classify_voxels<F: ScalarField + ?Sized>(
    field: &F,
    grid: &VoxelGrid,
    iso_value: f32,
) -> Vec<u8> {
    (0..grid.len())
        .into_par_iter()
        .map(|index| config_mask(&corner_values(field, grid.coord(index)), iso_value))
        .collect()
}

/// Gathers the active voxels into a dense array, in scan order, along with the map from flat grid
/// index back to compact index.
pub(crate) fn compact(configs: &[u8]) -> (Vec<VoxelInfo>, FullIndexMap) {
    let mut index_map = FullIndexMap::new(configs.len());
    let mut voxels = Vec::new();
    for (index, &config) in configs.iter().enumerate() {
        if is_active(config) {
            index_map.insert(index, voxels.len());
            voxels.push(VoxelInfo::new(index, config));
        }
    }
    (voxels, index_map)
}

/// Flags the owned edges of each active voxel that cross the surface, along with their direction.
pub(crate) fn encode_edges<F: ScalarField + ?Sized>(
    field: &F,
    grid: &VoxelGrid,
    voxels: &mut [VoxelInfo],
    iso_value: f32,
) {
    voxels.par_iter_mut().for_each(|voxel| {
        let values = corner_values(field, grid.coord(voxel.index));
        for [lower, upper] in OwnedEdge::ALL.map(OwnedEdge::corners) {
            let (v0, v1) = (values[lower], values[upper]);
            if !is_edge_bipolar(v0, v1, iso_value) {
                continue;
            }
            let edge = match OwnedEdge::from_local(CORNER_PAIR_EDGE[lower][upper]) {
                Some(edge) => edge,
                None => unreachable!(),
            };
            voxel.set_edge(edge, v0 <= iso_value);
        }
    });
}
