//! Extraction parameters: the world-space [`Bounds`] the grid is mapped into and the
//! [`DmcConfig`] passed to [`crate::dmc::mesh_from_field`].

use crate::error::DmcError;
use cgmath::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box. Grid node `(0, 0, 0)` maps to `min` and the last node maps to `max`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// The minimum corner.
    pub min: Point3<f32>,
    /// The maximum corner.
    pub max: Point3<f32>,
}

impl Bounds {
    /// Creates a box from its two corners.
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// The \[-1]³ to \[1]³ cube.
    pub fn unit() -> Self {
        Self::new(Point3::new(-1., -1., -1.), Point3::new(1., 1., 1.))
    }

    /// Returns the extent of the box along each axis.
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Checks that every axis is finite and non-empty.
    pub fn validate(&self) -> Result<(), DmcError> {
        for (axis, name) in ['x', 'y', 'z'].into_iter().enumerate() {
            let (min, max) = (self.min[axis], self.max[axis]);
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(DmcError::InvalidBounds {
                    axis: name,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Maps grid node `node` of a grid with `voxels` cells per axis into world space.
    ///
    /// Along an axis without cells every node maps to `min`.
    pub fn grid_to_world(&self, node: Point3<u32>, voxels: Vector3<u32>) -> Point3<f32> {
        let size = self.size();
        let coord = |axis: usize| {
            if voxels[axis] == 0 {
                self.min[axis]
            } else {
                node[axis] as f32 / voxels[axis] as f32 * size[axis] + self.min[axis]
            }
        };
        Point3::new(coord(0), coord(1), coord(2))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unit()
    }
}

/// Parameters of one extraction.
///
/// # Example
/// ```rust
/// use dmc::prelude::*;
/// use cgmath::point3;
///
/// let config = DmcConfig::default()
///     .with_iso_value(0.5)
///     .with_bounds(Bounds::new(point3(0., 0., 0.), point3(10., 10., 10.)))
///     .with_smoothing_iterations(2);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DmcConfig {
    /// Samples strictly below this value are inside the surface.
    pub iso_value: f32,
    /// World-space box the grid is stretched over.
    pub bounds: Bounds,
    /// Number of edge vertex smoothing passes run before triangles are emitted.
    pub smoothing_iterations: u32,
}

impl DmcConfig {
    /// Sets the iso-value.
    pub fn with_iso_value(mut self, iso_value: f32) -> Self {
        self.iso_value = iso_value;
        self
    }

    /// Sets the world-space bounds.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the number of smoothing passes.
    pub fn with_smoothing_iterations(mut self, iterations: u32) -> Self {
        self.smoothing_iterations = iterations;
        self
    }

    /// Checks the iso-value and the bounds.
    pub fn validate(&self) -> Result<(), DmcError> {
        if !self.iso_value.is_finite() {
            return Err(DmcError::NonFiniteIsoValue(self.iso_value));
        }
        self.bounds.validate()
    }
}

impl Default for DmcConfig {
    fn default() -> Self {
        Self {
            iso_value: 0.,
            bounds: Bounds::unit(),
            smoothing_iterations: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{point3, vec3};

    #[test]
    fn default_config_is_valid() {
        let config = DmcConfig::default();
        assert_eq!(config.iso_value, 0.);
        assert_eq!(config.smoothing_iterations, 0);
        assert_eq!(config.bounds, Bounds::unit());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_input() {
        let config = DmcConfig::default().with_iso_value(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(DmcError::NonFiniteIsoValue(v)) if v.is_nan()
        ));

        let flat = Bounds::new(point3(0., 0., 1.), point3(1., 1., 1.));
        assert_eq!(
            DmcConfig::default().with_bounds(flat).validate(),
            Err(DmcError::InvalidBounds {
                axis: 'z',
                min: 1.,
                max: 1.
            })
        );

        let infinite = Bounds::new(point3(0., f32::NEG_INFINITY, 0.), point3(1., 1., 1.));
        assert!(matches!(
            infinite.validate(),
            Err(DmcError::InvalidBounds { axis: 'y', .. })
        ));
    }

    #[test]
    fn grid_nodes_map_linearly() {
        let bounds = Bounds::new(point3(-1., 0., 2.), point3(1., 4., 3.));
        let voxels = vec3(4, 2, 1);

        assert_eq!(bounds.grid_to_world(point3(0, 0, 0), voxels), bounds.min);
        assert_eq!(bounds.grid_to_world(point3(4, 2, 1), voxels), bounds.max);
        assert_eq!(
            bounds.grid_to_world(point3(1, 1, 0), voxels),
            point3(-0.5, 2., 2.)
        );
        assert_eq!(
            bounds.grid_to_world(point3(3, 0, 0), vec3(4, 0, 0)),
            point3(0.5, 0., 2.)
        );
    }
}
