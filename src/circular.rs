//! Traversal of the four voxels around a shared edge.

use crate::tables::{EdgeOwner, CCW_ORDER, CIRCULAR_EDGES, CW_ORDER, EDGE_OWNERS};
use crate::voxel::OwnedEdge;

use cgmath::{Point3, Vector3};

/// Whether any of the four voxels around `edge` of the voxel at `coord` lies outside a grid with
/// `voxels` cells per axis.
pub(crate) fn exceeds_boundary(edge: OwnedEdge, coord: Point3<u32>, voxels: Vector3<u32>) -> bool {
    let past = |axis: usize| coord[axis] + 1 >= voxels[axis];
    match edge {
        OwnedEdge::Z => past(0) || past(1),
        OwnedEdge::Y => past(0) || past(2),
        OwnedEdge::X => past(1) || past(2),
    }
}

/// Iterates over the voxels sharing an owned edge, yielding each voxel's coordinate and the local
/// index by which it sees the edge. The owner comes first, then the walk turns counter-clockwise
/// around the edge's positive axis, or clockwise.
///
/// The caller checks [`exceeds_boundary`] first.
#[derive(Clone, Debug)]
pub(crate) struct CircularEdges {
    origin: Point3<u32>,
    row: &'static [u8; 4],
    order: &'static [usize; 4],
    step: usize,
}

impl CircularEdges {
    pub(crate) fn new(origin: Point3<u32>, edge: OwnedEdge, ccw: bool) -> Self {
        Self {
            origin,
            row: &CIRCULAR_EDGES[edge.slot()],
            order: if ccw { &CCW_ORDER } else { &CW_ORDER },
            step: 0,
        }
    }
}

impl Iterator for CircularEdges {
    type Item = (Point3<u32>, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let edge = *self.row.get(*self.order.get(self.step)?)?;
        self.step += 1;

        let coord = match EDGE_OWNERS[edge as usize] {
            EdgeOwner::Local => self.origin,
            // Going from the owner back to the sharing voxel reverses the owner's offset.
            EdgeOwner::Neighbor { offset, .. } => Point3::new(
                self.origin.x + (-offset[0]) as u32,
                self.origin.y + (-offset[1]) as u32,
                self.origin.z + (-offset[2]) as u32,
            ),
        };
        Some((coord, edge))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = 4 - self.step;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CircularEdges {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{CORNER_OFFSETS, EDGE_CORNERS};
    use cgmath::{point3, vec3};

    fn physical_edge(coord: Point3<u32>, edge: u8) -> [[u32; 3]; 2] {
        let mut points = EDGE_CORNERS[edge as usize].map(|corner| {
            let [x, y, z] = CORNER_OFFSETS[corner];
            [coord.x + x, coord.y + y, coord.z + z]
        });
        points.sort_unstable();
        points
    }

    #[test]
    fn walk_visits_the_four_sharing_voxels() {
        let origin = point3(3, 3, 3);
        for edge in OwnedEdge::ALL {
            for ccw in [true, false] {
                let walk: Vec<_> = CircularEdges::new(origin, edge, ccw).collect();
                assert_eq!(walk.len(), 4);
                assert_eq!(walk[0], (origin, edge.local_index()));

                let expected = physical_edge(origin, edge.local_index());
                for &(coord, local) in &walk {
                    assert_eq!(physical_edge(coord, local), expected);
                    // Each sharing voxel lies on the positive side of the owner.
                    assert!((0..3).all(|axis| coord[axis] >= origin[axis]));
                    assert_eq!(coord[edge.axis()], origin[edge.axis()]);
                }
                let mut coords: Vec<_> = walk.iter().map(|&(coord, _)| coord).collect();
                coords.sort_by_key(|c| (c.x, c.y, c.z));
                coords.dedup();
                assert_eq!(coords.len(), 4);
            }
        }
    }

    #[test]
    fn clockwise_walk_reverses_the_cycle() {
        let origin = point3(0, 0, 0);
        for edge in OwnedEdge::ALL {
            let ccw: Vec<_> = CircularEdges::new(origin, edge, true).collect();
            let cw: Vec<_> = CircularEdges::new(origin, edge, false).collect();
            assert_eq!(cw, vec![ccw[0], ccw[3], ccw[2], ccw[1]]);
        }
    }

    #[test]
    fn counter_clockwise_around_z() {
        let walk: Vec<_> = CircularEdges::new(point3(0, 0, 0), OwnedEdge::Z, true)
            .map(|(coord, _)| coord)
            .collect();
        assert_eq!(
            walk,
            vec![
                point3(0, 0, 0),
                point3(1, 0, 0),
                point3(1, 1, 0),
                point3(0, 1, 0)
            ]
        );
    }

    #[test]
    fn walk_is_exact_size() {
        let mut walk = CircularEdges::new(point3(1, 1, 1), OwnedEdge::Y, true);
        assert_eq!(walk.len(), 4);
        walk.next();
        assert_eq!(walk.len(), 3);
        assert_eq!(walk.by_ref().count(), 3);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn boundary_depends_on_the_edge_axis() {
        let voxels = vec3(3, 3, 3);
        assert!(!exceeds_boundary(OwnedEdge::Z, point3(1, 1, 2), voxels));
        assert!(exceeds_boundary(OwnedEdge::Z, point3(2, 1, 0), voxels));
        assert!(exceeds_boundary(OwnedEdge::Y, point3(0, 0, 2), voxels));
        assert!(!exceeds_boundary(OwnedEdge::Y, point3(1, 2, 1), voxels));
        assert!(exceeds_boundary(OwnedEdge::X, point3(0, 2, 0), voxels));
        assert!(!exceeds_boundary(OwnedEdge::X, point3(2, 0, 1), voxels));
    }
}
