//! Per-voxel records of the extraction.

use crate::tables::{CONFIG_EDGE_LUT1, CONFIG_EDGE_LUT2, NO_VERTEX, NUM_VERTEX_LUT1, NUM_VERTEX_LUT2};

use bitflags::bitflags;
use std::ops::Range;

bitflags! {
    /// Crossing state of a voxel's owned edges and its lookup table selector.
    #[derive(Default)]
    pub struct EdgeFlags: u8 {
        /// Edge 6 crosses the surface.
        const EDGE_6_BIPOLAR = 1 << 0;
        /// Edge 9 crosses the surface.
        const EDGE_9_BIPOLAR = 1 << 1;
        /// Edge 10 crosses the surface.
        const EDGE_10_BIPOLAR = 1 << 2;
        /// The lower end of edge 6 is inside the surface.
        const EDGE_6_CCW = 1 << 3;
        /// The lower end of edge 9 is inside the surface.
        const EDGE_9_CCW = 1 << 4;
        /// The lower end of edge 10 is inside the surface.
        const EDGE_10_CCW = 1 << 5;
        /// The voxel was paired with an ambiguous neighbour and uses the alternate table.
        const USE_LUT2 = 1 << 7;
    }
}

/// One of the three edges a voxel owns. They all meet at corner 6, the voxel's maximum corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OwnedEdge {
    /// Edge 6, from corner 2 to corner 6, along z.
    Z,
    /// Edge 9, from corner 5 to corner 6, along y.
    Y,
    /// Edge 10, from corner 7 to corner 6, along x.
    X,
}

impl OwnedEdge {
    /// The owned edges in vertex slot order.
    pub const ALL: [OwnedEdge; 3] = [OwnedEdge::Z, OwnedEdge::Y, OwnedEdge::X];

    /// Local edge index inside the voxel.
    pub fn local_index(self) -> u8 {
        match self {
            OwnedEdge::Z => 6,
            OwnedEdge::Y => 9,
            OwnedEdge::X => 10,
        }
    }

    /// The owned edge with local index `edge`, if any.
    pub fn from_local(edge: u8) -> Option<Self> {
        match edge {
            6 => Some(OwnedEdge::Z),
            9 => Some(OwnedEdge::Y),
            10 => Some(OwnedEdge::X),
            _ => None,
        }
    }

    /// Index of the axis the edge runs along.
    pub fn axis(self) -> usize {
        match self {
            OwnedEdge::X => 0,
            OwnedEdge::Y => 1,
            OwnedEdge::Z => 2,
        }
    }

    /// Position of the edge in [`OwnedEdge::ALL`].
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The corners at the lower and upper end of the edge.
    pub fn corners(self) -> [usize; 2] {
        match self {
            OwnedEdge::Z => [2, 6],
            OwnedEdge::Y => [5, 6],
            OwnedEdge::X => [7, 6],
        }
    }

    fn bipolar_flag(self) -> EdgeFlags {
        match self {
            OwnedEdge::Z => EdgeFlags::EDGE_6_BIPOLAR,
            OwnedEdge::Y => EdgeFlags::EDGE_9_BIPOLAR,
            OwnedEdge::X => EdgeFlags::EDGE_10_BIPOLAR,
        }
    }

    fn ccw_flag(self) -> EdgeFlags {
        match self {
            OwnedEdge::Z => EdgeFlags::EDGE_6_CCW,
            OwnedEdge::Y => EdgeFlags::EDGE_9_CCW,
            OwnedEdge::X => EdgeFlags::EDGE_10_CCW,
        }
    }
}

/// The record kept for every active voxel.
///
/// Its vertices occupy `vertex_range()` in the global vertex array: first the dual vertices, then one
/// edge vertex per bipolar owned edge, in [`OwnedEdge::ALL`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelInfo {
    /// Flat index of the voxel in the full grid.
    pub index: usize,
    /// Corner mask, bit `i` set when corner `i` is below the iso-value.
    pub config: u8,
    pub(crate) flags: EdgeFlags,
    pub(crate) vertex_begin: u32,
    pub(crate) num_vertices: u8,
}

impl VoxelInfo {
    pub(crate) fn new(index: usize, config: u8) -> Self {
        Self {
            index,
            config,
            flags: EdgeFlags::empty(),
            vertex_begin: 0,
            num_vertices: 0,
        }
    }

    /// Edge and table flags of the voxel.
    pub fn flags(&self) -> EdgeFlags {
        self.flags
    }

    pub(crate) fn set_edge(&mut self, edge: OwnedEdge, ccw: bool) {
        self.flags.insert(edge.bipolar_flag());
        self.flags.set(edge.ccw_flag(), ccw);
    }

    /// Whether the owned edge crosses the surface.
    pub fn is_edge_bipolar(&self, edge: OwnedEdge) -> bool {
        self.flags.contains(edge.bipolar_flag())
    }

    /// Whether the lower end of the owned edge is inside the surface.
    pub fn is_edge_ccw(&self, edge: OwnedEdge) -> bool {
        self.flags.contains(edge.ccw_flag())
    }

    /// Whether the voxel uses the alternate lookup table.
    pub fn uses_lut2(&self) -> bool {
        self.flags.contains(EdgeFlags::USE_LUT2)
    }

    pub(crate) fn set_use_lut2(&mut self) {
        self.flags.insert(EdgeFlags::USE_LUT2);
    }

    /// Number of bipolar owned edges.
    pub fn num_bipolar_edges(&self) -> u8 {
        OwnedEdge::ALL
            .iter()
            .filter(|&&edge| self.is_edge_bipolar(edge))
            .count() as u8
    }

    /// Dual vertex count predicted by the voxel's lookup table.
    pub(crate) fn table_iso_vertices(&self) -> u8 {
        if self.uses_lut2() {
            NUM_VERTEX_LUT2[self.config as usize]
        } else {
            NUM_VERTEX_LUT1[self.config as usize]
        }
    }

    /// Number of dual vertices at the start of the voxel's slice.
    pub fn num_iso_vertices(&self) -> u8 {
        self.num_vertices - self.num_bipolar_edges()
    }

    /// Total number of vertices owned by the voxel.
    pub fn num_vertices(&self) -> u8 {
        self.num_vertices
    }

    /// The voxel's slice of the global vertex array.
    pub fn vertex_range(&self) -> Range<usize> {
        let begin = self.vertex_begin as usize;
        begin..begin + self.num_vertices as usize
    }

    /// Dual vertex slot of local edge `edge`, or `None` if the surface does not cross it.
    pub fn iso_slot(&self, edge: u8) -> Option<u8> {
        let lut = if self.uses_lut2() {
            &CONFIG_EDGE_LUT2
        } else {
            &CONFIG_EDGE_LUT1
        };
        match lut[self.config as usize][edge as usize] {
            NO_VERTEX => None,
            slot => Some(slot),
        }
    }

    /// Global index of dual vertex `slot`.
    pub fn iso_vertex(&self, slot: u8) -> u32 {
        debug_assert!(slot < self.num_iso_vertices());
        self.vertex_begin + slot as u32
    }

    /// Global index of the dual vertex attached to local edge `edge`.
    pub fn iso_vertex_of_edge(&self, edge: u8) -> Option<u32> {
        self.iso_slot(edge).map(|slot| self.iso_vertex(slot))
    }

    /// Global index of the first edge vertex.
    pub fn edge_vertex_begin(&self) -> u32 {
        self.vertex_begin + self.num_iso_vertices() as u32
    }

    /// Global index of the vertex sampled on `edge`, or `None` if the edge is not bipolar.
    pub fn edge_vertex(&self, edge: OwnedEdge) -> Option<u32> {
        if !self.is_edge_bipolar(edge) {
            return None;
        }
        let before = OwnedEdge::ALL[..edge.slot()]
            .iter()
            .filter(|&&e| self.is_edge_bipolar(e))
            .count() as u32;
        Some(self.edge_vertex_begin() + before)
    }
}

/// Maps flat grid indices to compact indices into the active voxel array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullIndexMap {
    entries: Vec<u32>,
}

impl FullIndexMap {
    const INACTIVE: u32 = u32::MAX;

    pub(crate) fn new(len: usize) -> Self {
        Self {
            entries: vec![Self::INACTIVE; len],
        }
    }

    pub(crate) fn insert(&mut self, full: usize, compact: usize) {
        self.entries[full] = compact as u32;
    }

    /// Compact index of the voxel with flat index `full`, or `None` if that voxel is inactive.
    pub fn get(&self, full: usize) -> Option<usize> {
        match self.entries[full] {
            Self::INACTIVE => None,
            compact => Some(compact as usize),
        }
    }

    /// Number of voxels in the full grid.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the grid has no voxels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{CORNER_OFFSETS, EDGE_CORNERS};

    #[test]
    fn owned_edges_match_corner_table() {
        for edge in OwnedEdge::ALL {
            let local = edge.local_index();
            assert_eq!(OwnedEdge::from_local(local), Some(edge));
            let [lower, upper] = edge.corners();
            assert_eq!(CORNER_OFFSETS[lower][edge.axis()], 0);
            assert_eq!(CORNER_OFFSETS[upper][edge.axis()], 1);
            let mut sorted = [lower, upper];
            sorted.sort_unstable();
            assert_eq!(EDGE_CORNERS[local as usize], sorted);
            assert_eq!(OwnedEdge::ALL[edge.slot()], edge);
        }
        assert_eq!(OwnedEdge::from_local(0), None);
        assert_eq!(OwnedEdge::X.axis(), 0);
        assert_eq!(OwnedEdge::Z.axis(), 2);
    }

    #[test]
    fn edge_flags_are_independent() {
        let mut voxel = VoxelInfo::new(0, 0x40);
        voxel.set_edge(OwnedEdge::Z, true);
        voxel.set_edge(OwnedEdge::X, false);

        assert!(voxel.is_edge_bipolar(OwnedEdge::Z));
        assert!(!voxel.is_edge_bipolar(OwnedEdge::Y));
        assert!(voxel.is_edge_bipolar(OwnedEdge::X));
        assert!(voxel.is_edge_ccw(OwnedEdge::Z));
        assert!(!voxel.is_edge_ccw(OwnedEdge::X));
        assert!(!voxel.uses_lut2());
        assert_eq!(voxel.num_bipolar_edges(), 2);

        voxel.set_use_lut2();
        assert!(voxel.uses_lut2());
        assert_eq!(
            voxel.flags(),
            EdgeFlags::EDGE_6_BIPOLAR
                | EdgeFlags::EDGE_10_BIPOLAR
                | EdgeFlags::EDGE_6_CCW
                | EdgeFlags::USE_LUT2
        );
    }

    #[test]
    fn vertex_slice_layout() {
        // Corner 6 alone below the iso-value: one dual vertex, all owned edges bipolar.
        let mut voxel = VoxelInfo::new(7, 0x40);
        for edge in OwnedEdge::ALL {
            voxel.set_edge(edge, false);
        }
        voxel.vertex_begin = 10;
        voxel.num_vertices = voxel.table_iso_vertices() + voxel.num_bipolar_edges();

        assert_eq!(voxel.num_iso_vertices(), 1);
        assert_eq!(voxel.vertex_range(), 10..14);
        assert_eq!(voxel.iso_vertex_of_edge(6), Some(10));
        assert_eq!(voxel.iso_vertex_of_edge(0), None);
        assert_eq!(voxel.edge_vertex(OwnedEdge::Z), Some(11));
        assert_eq!(voxel.edge_vertex(OwnedEdge::Y), Some(12));
        assert_eq!(voxel.edge_vertex(OwnedEdge::X), Some(13));
    }

    #[test]
    fn edge_vertices_skip_unipolar_edges() {
        let mut voxel = VoxelInfo::new(0, 0x01);
        voxel.set_edge(OwnedEdge::X, true);
        voxel.vertex_begin = 3;
        voxel.num_vertices = voxel.table_iso_vertices() + voxel.num_bipolar_edges();

        assert_eq!(voxel.edge_vertex(OwnedEdge::Z), None);
        assert_eq!(voxel.edge_vertex(OwnedEdge::Y), None);
        assert_eq!(voxel.edge_vertex(OwnedEdge::X), Some(4));
    }

    #[test]
    fn index_map_marks_inactive_voxels() {
        let mut map = FullIndexMap::new(4);
        map.insert(2, 0);
        assert_eq!(map.len(), 4);
        assert_eq!(map.get(2), Some(0));
        assert_eq!(map.get(1), None);
    }
}
