//! Resolution of ambiguous configurations.
//!
//! A config in the ambiguity catalogue has one face whose corners alternate inside and outside the
//! surface. Triangulated on their own, the voxel and the voxel across that face can produce dual
//! vertices that make the shared quads fold over each other. When both voxels are catalogued, each
//! facing the other, the pair switches to the alternate table, which splits their dual vertices
//! consistently.

use crate::field::VoxelGrid;
use crate::tables::{AMBIGUOUS_CONFIGS, AMBIGUOUS_FACES, FACE_NEIGHBOR_OFFSETS, OPPOSITE_FACE};
use crate::voxel::{FullIndexMap, VoxelInfo};

use cgmath::Vector3;
use rayon::prelude::*;

/// Position of `config` in the ambiguity catalogue.
pub(crate) fn ambiguous_index(config: u8) -> Option<usize> {
    AMBIGUOUS_CONFIGS.iter().position(|&c| c == config)
}

/// Compact index of the voxel that `voxels[index]` forms an ambiguous pair with, if any.
///
/// # Panics
/// Panics if the voxel across an ambiguous face is inactive, or if the partner's catalogued face is
/// not the opposite face. Both indicate corrupted tables.
pub(crate) fn partner(
    voxels: &[VoxelInfo],
    index_map: &FullIndexMap,
    grid: &VoxelGrid,
    index: usize,
) -> Option<usize> {
    let voxel = &voxels[index];
    let face = AMBIGUOUS_FACES[ambiguous_index(voxel.config)?] as usize;
    let neighbor = grid.offset(
        grid.coord(voxel.index),
        Vector3::from(FACE_NEIGHBOR_OFFSETS[face]),
    )?;

    // The shared face has corners on both sides of the surface, so the neighbour is active.
    let other = match index_map.get(grid.index(neighbor)) {
        Some(other) => other,
        None => unreachable!(),
    };
    let other_face = AMBIGUOUS_FACES[ambiguous_index(voxels[other].config)?];
    assert_eq!(
        other_face, OPPOSITE_FACE[face],
        "configs {:#04x} and {:#04x} share an ambiguous face that is not opposite",
        voxel.config, voxels[other].config
    );
    Some(other)
}

/// Switches every ambiguous pair of voxels to the alternate lookup table. Returns the number of
/// pairs found.
pub(crate) fn resolve_ambiguities(
    voxels: &mut [VoxelInfo],
    index_map: &FullIndexMap,
    grid: &VoxelGrid,
) -> usize {
    let shared: &[VoxelInfo] = voxels;
    let pairs: Vec<(usize, usize)> = (0..shared.len())
        .into_par_iter()
        .filter_map(|index| {
            partner(shared, index_map, grid, index)
                .filter(|&other| index < other)
                .map(|other| (index, other))
        })
        .collect();

    for &(first, second) in &pairs {
        assert_eq!(
            partner(voxels, index_map, grid, second),
            Some(first),
            "ambiguous pair is not symmetric"
        );
        voxels[first].set_use_lut2();
        voxels[second].set_use_lut2();
    }
    pairs.len()
}
