//! Contains the Dual Marching Cubes extractor ([`DualMarchingCubes`]), along with a function
//! ([`mesh_from_field`]) to interface with it.
//!
//! # Explanation
//! Classic Marching Cubes places its vertices on the grid edges and triangulates every voxel on its
//! own. Dual Marching Cubes places one vertex or more *inside* each voxel the surface crosses (the
//! dual vertices) and connects them across the grid edges instead: every grid edge crossed by the
//! surface is shared by four voxels, and their four dual vertices form a quad.
//!
//! The extraction runs as a fixed sequence of passes over the voxels:
//!
//! 1. classify each voxel by the corners below the iso-value and keep the active ones;
//! 2. flag the owned edges of each active voxel that cross the surface;
//! 3. switch ambiguous pairs of voxels to the alternate lookup table;
//! 4. give each voxel a slice of the vertex array, dual vertices first, then edge vertices;
//! 5. sample the crossing point of each owned edge;
//! 6. place each dual vertex at the mean of the crossing points of its edges;
//! 7. optionally, smooth the edge vertices and re-average the dual vertices, a number of times;
//! 8. emit two triangles per quad.
//!
//! # References
//! Refer to the comments at the start of `src/lib.rs`.

use crate::ambiguity::resolve_ambiguities;
use crate::classify::{classify_voxels, compact, encode_edges};
use crate::circular::{exceeds_boundary, CircularEdges};
use crate::config::{Bounds, DmcConfig};
use crate::error::DmcError;
use crate::field::{corner_positions, corner_values, ScalarField, VoxelGrid};
use crate::mesh::Mesh;
use crate::smoothing::{smooth_edge_vertex, Smoothed};
use crate::tables::{EdgeOwner, EDGE_OWNERS};
use crate::util::*;
use crate::voxel::{FullIndexMap, OwnedEdge, VoxelInfo};

use cgmath::{EuclideanSpace, Point3, Vector3, Zero};
use rayon::prelude::*;

/// Creates a mesh from a sampled scalar field.
///
/// The surface separates the samples below `config.iso_value` from the others. Grid node
/// `(0, 0, 0)` maps to `config.bounds.min` and the last node to `config.bounds.max`.
///
/// A field with fewer than two samples along an axis has no voxels and produces an empty mesh.
///
/// # Example
/// ```rust
/// use dmc::prelude::*;
/// use cgmath::{vec3, EuclideanSpace, InnerSpace};
///
/// let bounds = Bounds::unit();
/// let field = DenseGrid::sample(vec3(24, 24, 24), &bounds, |p| p.to_vec().magnitude());
/// let mesh = mesh_from_field(&field, &DmcConfig::default().with_iso_value(0.6)).unwrap();
///
/// assert!(mesh.is_closed_manifold());
/// assert_eq!(mesh.euler_characteristic(), 2);
/// ```
///
/// # Errors
/// Returns an error if the iso-value is not finite or if the bounds are invalid.
///
/// # Panics
/// Should never panic. If it does, it's an error in the crate; please report it.
pub fn mesh_from_field<F: ScalarField + ?Sized>(
    field: &F,
    config: &DmcConfig,
) -> Result<Mesh, DmcError> {
    Ok(DualMarchingCubes::new(field, config)?.into_mesh())
}

/// The quad of dual vertices around a shared edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeQuad {
    /// Compact index of the voxel owning the edge.
    pub voxel: usize,
    /// Which of the voxel's owned edges this is.
    pub edge: OwnedEdge,
    /// Index of the vertex sampled on the edge.
    pub edge_vertex: u32,
    /// The dual vertices of the four voxels sharing the edge, in winding order.
    pub vertices: [u32; 4],
}

impl EdgeQuad {
    /// Splits the quad into two triangles.
    pub fn triangles(&self) -> [[u32; 3]; 2] {
        let [q0, q1, q2, q3] = self.vertices;
        [[q0, q1, q2], [q2, q3, q0]]
    }
}

/// The state of one extraction, after every pass up to triangle emission has run.
///
/// Use [`mesh_from_field`] to just get the mesh; this type additionally exposes the per-voxel
/// records and the vertex array for inspection.
#[derive(Clone, Debug)]
pub struct DualMarchingCubes {
    bounds: Bounds,
    grid: VoxelGrid,
    voxels: Vec<VoxelInfo>,
    index_map: FullIndexMap,
    vertices: Vec<Point3<f32>>,
    quads: Vec<EdgeQuad>,
    ambiguous_pairs: usize,
}

impl DualMarchingCubes {
    /// Runs the extraction up to, and including, smoothing.
    ///
    /// # Errors
    /// Returns an error if the iso-value is not finite or if the bounds are invalid.
    pub fn new<F: ScalarField + ?Sized>(field: &F, config: &DmcConfig) -> Result<Self, DmcError> {
        config.validate()?;
        let iso_value = config.iso_value;
        let grid = VoxelGrid::from_sample_dimensions(field.dimensions());

        let configs = classify_voxels(field, &grid, iso_value);
        let (mut voxels, index_map) = compact(&configs);
        log::debug!(
            "classified {} voxels, {} active",
            grid.len(),
            voxels.len()
        );

        encode_edges(field, &grid, &mut voxels, iso_value);
        let ambiguous_pairs = resolve_ambiguities(&mut voxels, &index_map, &grid);
        log::debug!("switched {} ambiguous voxel pairs", ambiguous_pairs);

        let vertex_count = allocate_vertices(&mut voxels);
        log::debug!("allocated {} vertices", vertex_count);

        let mut dmc = Self {
            bounds: config.bounds,
            grid,
            voxels,
            index_map,
            vertices: vec![Point3::origin(); vertex_count],
            quads: Vec::new(),
            ambiguous_pairs,
        };
        dmc.sample_edges(field, iso_value);
        dmc.average_duals();
        dmc.quads = dmc.collect_quads();
        log::debug!("found {} quads", dmc.quads.len());

        for iteration in 0..config.smoothing_iterations {
            let moved = dmc.smooth_edges();
            dmc.average_duals();
            log::debug!(
                "smoothing pass {}: moved {} of {} edge vertices",
                iteration + 1,
                moved,
                dmc.quads.len()
            );
        }
        Ok(dmc)
    }

    /// The voxel grid of the field.
    pub fn grid(&self) -> VoxelGrid {
        self.grid
    }

    /// Records of the active voxels, in grid scan order.
    pub fn voxels(&self) -> &[VoxelInfo] {
        &self.voxels
    }

    /// Map from flat grid index to position in [`DualMarchingCubes::voxels`].
    pub fn full_index_map(&self) -> &FullIndexMap {
        &self.index_map
    }

    /// The vertex array: each voxel's dual vertices followed by its edge vertices.
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// The quads around every shared edge crossing the surface.
    pub fn quads(&self) -> &[EdgeQuad] {
        &self.quads
    }

    /// Number of voxel pairs switched to the alternate lookup table.
    pub fn ambiguous_pairs(&self) -> usize {
        self.ambiguous_pairs
    }

    /// The triangles of the surface, two per quad.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        self.quads.iter().flat_map(EdgeQuad::triangles).collect()
    }

    /// Emits the triangles and returns the finished mesh.
    pub fn into_mesh(self) -> Mesh {
        let triangles = self.triangles();
        log::debug!("emitted {} triangles", triangles.len());
        Mesh {
            vertices: self.vertices,
            triangles,
        }
    }

    fn sample_edges<F: ScalarField + ?Sized>(&mut self, field: &F, iso_value: f32) {
        let (bounds, grid) = (&self.bounds, &self.grid);
        self.voxels
            .par_iter()
            .zip(voxel_slices(&self.voxels, &mut self.vertices))
            .for_each(|(voxel, slice)| {
                let coord = grid.coord(voxel.index);
                let values = corner_values(field, coord);
                let positions = corner_positions(bounds, grid, coord);
                for edge in OwnedEdge::ALL {
                    let vertex = match voxel.edge_vertex(edge) {
                        Some(vertex) => vertex,
                        None => continue,
                    };
                    let [lower, upper] = edge.corners();
                    let factor = interpolation_factor(values[lower], values[upper], iso_value);
                    slice[(vertex - voxel.vertex_begin) as usize] =
                        positions[lower].interpolate(positions[upper], factor);
                }
            });
    }

    /// Places every dual vertex at the mean of the edge vertices of its incident edges. The means
    /// are computed from the current vertex array, then written back.
    fn average_duals(&mut self) {
        let duals: Vec<[Point3<f32>; 4]> = self
            .voxels
            .par_iter()
            .map(|voxel| self.voxel_duals(voxel))
            .collect();

        self.voxels
            .par_iter()
            .zip(voxel_slices(&self.voxels, &mut self.vertices))
            .zip(duals)
            .for_each(|((voxel, slice), duals)| {
                let count = voxel.num_iso_vertices() as usize;
                slice[..count].copy_from_slice(&duals[..count]);
            });
    }

    fn voxel_duals(&self, voxel: &VoxelInfo) -> [Point3<f32>; 4] {
        let coord = self.grid.coord(voxel.index);
        let mut sums = [Vector3::zero(); 4];
        let mut counts = [0u32; 4];

        for edge in 0..12u8 {
            let slot = match voxel.iso_slot(edge) {
                Some(slot) => slot as usize,
                None => continue,
            };
            debug_assert!(slot < voxel.num_iso_vertices() as usize);

            let (owner, owned) = match EDGE_OWNERS[edge as usize] {
                EdgeOwner::Local => (voxel, edge),
                EdgeOwner::Neighbor { offset, edge: owned } => {
                    let owner = match self.grid.offset(coord, Vector3::from(offset)) {
                        Some(owner) => owner,
                        None => continue,
                    };
                    match self.index_map.get(self.grid.index(owner)) {
                        Some(owner) => (&self.voxels[owner], owned),
                        // The edge crosses the surface, so every voxel around it is active.
                        None => unreachable!(),
                    }
                }
            };
            let vertex = match OwnedEdge::from_local(owned).and_then(|e| owner.edge_vertex(e)) {
                Some(vertex) => vertex,
                None => unreachable!(),
            };
            sums[slot] += self.vertices[vertex as usize].to_vec();
            counts[slot] += 1;
        }

        let mut duals = [Point3::origin(); 4];
        for slot in 0..voxel.num_iso_vertices() as usize {
            duals[slot] = if counts[slot] == 0 {
                // Every incident edge is owned by a voxel outside the grid.
                self.voxel_center(coord)
            } else {
                Point3::from_vec(sums[slot] / counts[slot] as f32)
            };
        }
        duals
    }

    fn voxel_center(&self, coord: Point3<u32>) -> Point3<f32> {
        let corners = corner_positions(&self.bounds, &self.grid, coord);
        corners[0].midpoint(corners[6])
    }

    fn collect_quads(&self) -> Vec<EdgeQuad> {
        self.voxels
            .par_iter()
            .enumerate()
            .flat_map_iter(|(index, voxel)| {
                let coord = self.grid.coord(voxel.index);
                OwnedEdge::ALL.into_iter().filter_map(move |edge| {
                    let edge_vertex = voxel.edge_vertex(edge)?;
                    if exceeds_boundary(edge, coord, self.grid.dimensions()) {
                        return None;
                    }
                    let vertices = self.walk(coord, edge, voxel.is_edge_ccw(edge))?;
                    Some(EdgeQuad {
                        voxel: index,
                        edge,
                        edge_vertex,
                        vertices,
                    })
                })
            })
            .collect()
    }

    /// Dual vertices of the four voxels around an edge. `None` when one of them has no dual vertex
    /// on the edge, which happens when an end of the edge sits exactly on the iso-value.
    fn walk(&self, coord: Point3<u32>, edge: OwnedEdge, ccw: bool) -> Option<[u32; 4]> {
        let mut vertices = [0; 4];
        for (vertex, (neighbor, local)) in vertices
            .iter_mut()
            .zip(CircularEdges::new(coord, edge, ccw))
        {
            let dual = self
                .index_map
                .get(self.grid.index(neighbor))
                .and_then(|compact| self.voxels[compact].iso_vertex_of_edge(local));
            *vertex = match dual {
                Some(dual) => dual,
                None => {
                    log::trace!(
                        "skipping degenerate edge {:?} of voxel {:?}",
                        edge,
                        coord
                    );
                    return None;
                }
            };
        }
        Some(vertices)
    }

    /// Runs one smoothing pass over every quad. Returns the number of edge vertices moved.
    fn smooth_edges(&mut self) -> usize {
        let updates: Vec<(u32, Point3<f32>)> = self
            .quads
            .par_iter()
            .filter_map(|quad| {
                let coord = self.grid.coord(self.voxels[quad.voxel].index);
                let target = self.bounds.grid_to_world(
                    coord + Vector3::new(1, 1, 1),
                    self.grid.dimensions(),
                );
                let corners = quad.vertices.map(|v| self.vertices[v as usize]);
                match smooth_edge_vertex(&corners, quad.edge, target) {
                    Smoothed::Moved(position) => Some((quad.edge_vertex, position)),
                    Smoothed::Complex => {
                        log::trace!("complex quad around edge {:?} of {:?}", quad.edge, coord);
                        None
                    }
                    Smoothed::Outside => {
                        log::trace!("edge {:?} of {:?} is outside its quad", quad.edge, coord);
                        None
                    }
                }
            })
            .collect();

        for &(vertex, position) in &updates {
            self.vertices[vertex as usize] = position;
        }
        updates.len()
    }
}

/// Gives each voxel a running vertex offset: its dual vertex count from its lookup table plus one
/// vertex per bipolar owned edge. Returns the total.
fn allocate_vertices(voxels: &mut [VoxelInfo]) -> usize {
    let mut total = 0u32;
    for voxel in voxels.iter_mut() {
        voxel.vertex_begin = total;
        voxel.num_vertices = voxel.table_iso_vertices() + voxel.num_bipolar_edges();
        total += voxel.num_vertices as u32;
    }
    total as usize
}

/// Splits the vertex array into each voxel's slice, in voxel order.
fn voxel_slices<'v>(
    voxels: &[VoxelInfo],
    vertices: &'v mut [Point3<f32>],
) -> Vec<&'v mut [Point3<f32>]> {
    let mut rest = vertices;
    voxels
        .iter()
        .map(|voxel| {
            let (slice, tail) = std::mem::take(&mut rest).split_at_mut(voxel.num_vertices as usize);
            rest = tail;
            slice
        })
        .collect()
}
