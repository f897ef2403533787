//! Scalar field input of the extraction: the [`ScalarField`] trait, a dense grid implementing it,
//! and the [`VoxelGrid`] index arithmetic shared by every stage.

use crate::config::Bounds;
use crate::error::DmcError;
use crate::tables::CORNER_OFFSETS;

use cgmath::{Point3, Vector3};
use rayon::prelude::*;

/// Provides the samples of a scalar field on a regular grid.
pub trait ScalarField: Sync {
    /// Number of samples along each axis.
    fn dimensions(&self) -> Vector3<u32>;

    /// Returns the sample at grid node `(x, y, z)`.
    /// Only called with coordinates below [`ScalarField::dimensions`].
    fn value(&self, x: u32, y: u32, z: u32) -> f32;
}

impl<T: ScalarField + ?Sized> ScalarField for &T {
    fn dimensions(&self) -> Vector3<u32> {
        (**self).dimensions()
    }

    fn value(&self, x: u32, y: u32, z: u32) -> f32 {
        (**self).value(x, y, z)
    }
}

/// A scalar field stored densely, x varying fastest, then y, then z.
///
/// # Example
/// ```rust
/// use dmc::field::*;
/// use dmc::config::Bounds;
/// use cgmath::{vec3, EuclideanSpace, InnerSpace};
///
/// // Distance to the origin, sampled on 16³ nodes spread over [-1, 1]³.
/// let grid = DenseGrid::sample(vec3(16, 16, 16), &Bounds::unit(), |p| p.to_vec().magnitude());
///
/// assert_eq!(grid.dimensions(), vec3(16, 16, 16));
/// assert!((grid.get(0, 0, 0) - 3f32.sqrt()).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseGrid {
    dims: Vector3<u32>,
    values: Vec<f32>,
}

impl DenseGrid {
    /// Creates a grid with every sample set to `fill`.
    pub fn new(dims: Vector3<u32>, fill: f32) -> Self {
        Self {
            dims,
            values: vec![fill; sample_count(dims)],
        }
    }

    /// Wraps an existing buffer of samples.
    pub fn from_vec(dims: Vector3<u32>, values: Vec<f32>) -> Result<Self, DmcError> {
        let expected = sample_count(dims);
        if values.len() != expected {
            return Err(DmcError::DataLengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { dims, values })
    }

    /// Creates a grid by evaluating `f` at each integer node.
    pub fn from_fn<F>(dims: Vector3<u32>, f: F) -> Self
    where
        F: Fn(u32, u32, u32) -> f32 + Sync,
    {
        let values = (0..sample_count(dims))
            .into_par_iter()
            .map(|i| {
                let node = node_of(dims, i);
                f(node.x, node.y, node.z)
            })
            .collect();
        Self { dims, values }
    }

    /// Samples an implicit function at the nodes of a grid stretched over `bounds`.
    ///
    /// Nodes are mapped with [`Bounds::grid_to_world`], the same mapping the extraction uses for
    /// the mesh vertices.
    pub fn sample<F>(dims: Vector3<u32>, bounds: &Bounds, f: F) -> Self
    where
        F: Fn(Point3<f32>) -> f32 + Sync,
    {
        let voxels = VoxelGrid::from_sample_dimensions(dims).dimensions();
        Self::from_fn(dims, |x, y, z| {
            f(bounds.grid_to_world(Point3::new(x, y, z), voxels))
        })
    }

    /// Number of samples along each axis.
    pub fn dimensions(&self) -> Vector3<u32> {
        self.dims
    }

    /// Returns the sample at `(x, y, z)`.
    /// # Panics
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, x: u32, y: u32, z: u32) -> f32 {
        self.values[self.offset(x, y, z)]
    }

    /// Overwrites the sample at `(x, y, z)`.
    /// # Panics
    /// Panics if the coordinate is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, z: u32, value: f32) {
        let offset = self.offset(x, y, z);
        self.values[offset] = value;
    }

    /// All samples in storage order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    fn offset(&self, x: u32, y: u32, z: u32) -> usize {
        assert!(
            x < self.dims.x && y < self.dims.y && z < self.dims.z,
            "node ({}, {}, {}) is outside a {:?} grid",
            x,
            y,
            z,
            self.dims
        );
        (z as usize * self.dims.y as usize + y as usize) * self.dims.x as usize + x as usize
    }
}

impl ScalarField for DenseGrid {
    fn dimensions(&self) -> Vector3<u32> {
        self.dims
    }

    fn value(&self, x: u32, y: u32, z: u32) -> f32 {
        self.get(x, y, z)
    }
}

fn sample_count(dims: Vector3<u32>) -> usize {
    dims.x as usize * dims.y as usize * dims.z as usize
}

fn node_of(dims: Vector3<u32>, index: usize) -> Point3<u32> {
    let (nx, ny) = (dims.x as usize, dims.y as usize);
    Point3::new(
        (index % nx) as u32,
        (index / nx % ny) as u32,
        (index / (nx * ny)) as u32,
    )
}

/// The cells ("voxels") between the nodes of a sampled grid, indexed in scan order: x fastest,
/// then y, then z.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    dims: Vector3<u32>,
}

impl VoxelGrid {
    /// The voxels of a grid with `samples` nodes per axis. An axis with fewer than two nodes has
    /// no voxels.
    pub fn from_sample_dimensions(samples: Vector3<u32>) -> Self {
        Self {
            dims: samples.map(|n| n.saturating_sub(1)),
        }
    }

    /// Number of voxels along each axis.
    pub fn dimensions(&self) -> Vector3<u32> {
        self.dims
    }

    /// Total number of voxels.
    pub fn len(&self) -> usize {
        sample_count(self.dims)
    }

    /// Whether the grid has no voxels at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of the voxel at `coord`.
    pub fn index(&self, coord: Point3<u32>) -> usize {
        debug_assert!(self.contains(coord));
        (coord.z as usize * self.dims.y as usize + coord.y as usize) * self.dims.x as usize
            + coord.x as usize
    }

    /// Voxel coordinate of flat index `index`.
    pub fn coord(&self, index: usize) -> Point3<u32> {
        debug_assert!(index < self.len());
        node_of(self.dims, index)
    }

    /// Whether `coord` is a voxel of this grid.
    pub fn contains(&self, coord: Point3<u32>) -> bool {
        coord.x < self.dims.x && coord.y < self.dims.y && coord.z < self.dims.z
    }

    /// The voxel at `offset` from `coord`, or `None` if it falls outside the grid.
    pub fn offset(&self, coord: Point3<u32>, offset: Vector3<i32>) -> Option<Point3<u32>> {
        let shift = |c: u32, d: i32| c.checked_add_signed(d);
        let moved = Point3::new(
            shift(coord.x, offset.x)?,
            shift(coord.y, offset.y)?,
            shift(coord.z, offset.z)?,
        );
        self.contains(moved).then(|| moved)
    }
}

/// Samples at the 8 corners of the voxel at `coord`, in corner order.
pub(crate) fn corner_values<F: ScalarField + ?Sized>(field: &F, coord: Point3<u32>) -> [f32; 8] {
    CORNER_OFFSETS.map(|[x, y, z]| field.value(coord.x + x, coord.y + y, coord.z + z))
}

/// World-space positions of the 8 corners of the voxel at `coord`.
pub(crate) fn corner_positions(
    bounds: &Bounds,
    grid: &VoxelGrid,
    coord: Point3<u32>,
) -> [Point3<f32>; 8] {
    CORNER_OFFSETS.map(|[x, y, z]| {
        bounds.grid_to_world(
            Point3::new(coord.x + x, coord.y + y, coord.z + z),
            grid.dimensions(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{point3, vec3};

    #[test]
    fn dense_grid_storage_order() {
        let grid = DenseGrid::from_fn(vec3(3, 2, 2), |x, y, z| (x + 10 * y + 100 * z) as f32);
        assert_eq!(
            grid.values(),
            &[0., 1., 2., 10., 11., 12., 100., 101., 102., 110., 111., 112.]
        );
        assert_eq!(grid.get(2, 1, 0), 12.);
        assert_eq!(grid.value(1, 0, 1), 101.);
    }

    #[test]
    fn dense_grid_rejects_wrong_length() {
        assert_eq!(
            DenseGrid::from_vec(vec3(2, 2, 2), vec![0.; 7]),
            Err(DmcError::DataLengthMismatch {
                expected: 8,
                actual: 7
            })
        );
        let mut grid = DenseGrid::from_vec(vec3(2, 2, 2), vec![0.; 8]).unwrap();
        grid.set(1, 1, 1, 4.);
        assert_eq!(grid.get(1, 1, 1), 4.);
    }

    #[test]
    #[should_panic]
    fn dense_grid_bounds_checked() {
        DenseGrid::new(vec3(2, 2, 2), 0.).get(2, 0, 0);
    }

    #[test]
    fn sampling_uses_world_coordinates() {
        let bounds = Bounds::new(point3(0., 0., 0.), point3(2., 4., 8.));
        let grid = DenseGrid::sample(vec3(3, 3, 3), &bounds, |p| p.x + p.y + p.z);
        assert_eq!(grid.get(0, 0, 0), 0.);
        assert_eq!(grid.get(2, 2, 2), 14.);
        assert_eq!(grid.get(1, 0, 2), 9.);
    }

    #[test]
    fn voxel_indexing_round_trips() {
        let grid = VoxelGrid::from_sample_dimensions(vec3(5, 4, 3));
        assert_eq!(grid.dimensions(), vec3(4, 3, 2));
        assert_eq!(grid.len(), 24);
        for index in 0..grid.len() {
            assert_eq!(grid.index(grid.coord(index)), index);
        }
        assert_eq!(grid.index(point3(1, 2, 1)), 21);
    }

    #[test]
    fn degenerate_grids_have_no_voxels() {
        assert!(VoxelGrid::from_sample_dimensions(vec3(1, 5, 5)).is_empty());
        assert!(VoxelGrid::from_sample_dimensions(vec3(4, 0, 5)).is_empty());
        assert!(!VoxelGrid::from_sample_dimensions(vec3(2, 2, 2)).is_empty());
    }

    #[test]
    fn offsets_stay_inside() {
        let grid = VoxelGrid::from_sample_dimensions(vec3(4, 4, 4));
        let origin = point3(0, 1, 2);
        assert_eq!(grid.offset(origin, vec3(1, -1, 0)), Some(point3(1, 0, 2)));
        assert_eq!(grid.offset(origin, vec3(-1, 0, 0)), None);
        assert_eq!(grid.offset(origin, vec3(0, 0, 1)), None);
        assert_eq!(grid.offset(origin, vec3(0, 0, 0)), Some(origin));
    }

    #[test]
    fn corners_follow_table_order() {
        let field = DenseGrid::from_fn(vec3(3, 3, 3), |x, y, z| (x + 10 * y + 100 * z) as f32);
        assert_eq!(
            corner_values(&field, point3(1, 0, 1)),
            [101., 102., 112., 111., 201., 202., 212., 211.]
        );
        let grid = VoxelGrid::from_sample_dimensions(field.dimensions());
        let corners = corner_positions(&Bounds::unit(), &grid, point3(0, 0, 0));
        assert_eq!(corners[0], point3(-1., -1., -1.));
        assert_eq!(corners[6], point3(0., 0., 0.));
        assert_eq!(corners[7], point3(-1., 0., 0.));
    }
}
