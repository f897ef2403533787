//! Geometry of the edge vertex smoothing pass.
//!
//! The four dual vertices around a shared edge form a quad. Seen down the edge's axis, the edge
//! is a single point; the quad is split along one diagonal and the edge vertex is moved to the
//! barycentric combination of the half that contains that point.

use crate::voxel::OwnedEdge;

use cgmath::{EuclideanSpace, InnerSpace, Point2, Point3, Vector2, Vector3, Zero};

/// Tolerance of the point-in-triangle test, so points on a triangle's border are accepted.
const BARYCENTRIC_EPSILON: f32 = 1e-4;

/// Shape of a quad projected into the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuadShape {
    /// Every corner turns the same way.
    Convex,
    /// One corner turns against the others.
    Concave {
        /// The reflex corner.
        reflex: usize,
    },
    /// The quad crosses itself.
    Complex,
}

/// Result of re-projecting one edge vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Smoothed {
    /// The new position of the edge vertex.
    Moved(Point3<f32>),
    /// The quad crosses itself and is left alone.
    Complex,
    /// Neither half of the quad contains the edge.
    Outside,
}

/// Drops the coordinate along the edge's axis.
pub fn project(point: Point3<f32>, edge: OwnedEdge) -> Point2<f32> {
    match edge {
        OwnedEdge::X => Point2::new(point.y, point.z),
        OwnedEdge::Y => Point2::new(point.z, point.x),
        OwnedEdge::Z => Point2::new(point.x, point.y),
    }
}

fn neighbors(quad: &[Point2<f32>; 4], corner: usize) -> (Vector2<f32>, Vector2<f32>) {
    let here = quad[corner];
    (quad[(corner + 1) % 4] - here, quad[(corner + 3) % 4] - here)
}

/// Classifies a quad by the turn direction at each corner.
pub fn classify_quad(quad: &[Point2<f32>; 4]) -> QuadShape {
    let positive = [0, 1, 2, 3].map(|corner| {
        let (next, previous) = neighbors(quad, corner);
        next.perp_dot(previous) >= 0.
    });
    let lone = |sign: bool| positive.iter().position(|&p| p == sign);

    match positive.iter().filter(|&&p| p).count() {
        0 | 4 => QuadShape::Convex,
        1 => QuadShape::Concave {
            reflex: lone(true).unwrap_or_default(),
        },
        3 => QuadShape::Concave {
            reflex: lone(false).unwrap_or_default(),
        },
        _ => QuadShape::Complex,
    }
}

/// Interior angle at `corner`, in radians. Zero when an adjacent side has no length.
pub(crate) fn interior_angle(quad: &[Point2<f32>; 4], corner: usize) -> f32 {
    let (next, previous) = neighbors(quad, corner);
    if next.magnitude2() == 0. || previous.magnitude2() == 0. {
        return 0.;
    }
    next.normalize()
        .dot(previous.normalize())
        .clamp(-1., 1.)
        .acos()
}

/// The corner the splitting diagonal starts from, or `None` for a complex quad.
///
/// A convex quad is split at its widest corner, a concave one at its reflex corner.
pub(crate) fn diagonal(quad: &[Point2<f32>; 4]) -> Option<usize> {
    match classify_quad(quad) {
        QuadShape::Convex => {
            let mut widest = 0;
            for corner in 1..4 {
                if interior_angle(quad, corner) > interior_angle(quad, widest) {
                    widest = corner;
                }
            }
            Some(widest % 2)
        }
        QuadShape::Concave { reflex } => Some(reflex % 2),
        QuadShape::Complex => None,
    }
}

/// Barycentric weights of `point` relative to the triangle `(a, b, c)`, or `None` if it lies
/// outside or the triangle is degenerate.
pub(crate) fn barycentric(
    point: Point2<f32>,
    a: Point2<f32>,
    b: Point2<f32>,
    c: Point2<f32>,
) -> Option<[f32; 3]> {
    let (v0, v1, v2) = (c - a, b - a, point - a);
    let (dot00, dot01, dot02) = (v0.dot(v0), v0.dot(v1), v0.dot(v2));
    let (dot11, dot12) = (v1.dot(v1), v1.dot(v2));

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0. {
        return None;
    }
    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;

    let inside = u >= -BARYCENTRIC_EPSILON
        && v >= -BARYCENTRIC_EPSILON
        && u + v <= 1. + BARYCENTRIC_EPSILON;
    inside.then(|| [1. - u - v, v, u])
}

/// Moves the vertex of `edge` into the quad of dual vertices around it. `target` is any point on
/// the edge's line.
pub(crate) fn smooth_edge_vertex(
    quad: &[Point3<f32>; 4],
    edge: OwnedEdge,
    target: Point3<f32>,
) -> Smoothed {
    let flat = quad.map(|point| project(point, edge));
    let start = match diagonal(&flat) {
        Some(start) => start,
        None => return Smoothed::Complex,
    };
    let target = project(target, edge);

    let halves = [
        [start, start + 1, start + 2],
        [start + 2, (start + 3) % 4, start],
    ];
    for half in halves {
        let [a, b, c] = half;
        if let Some(weights) = barycentric(target, flat[a], flat[b], flat[c]) {
            let moved = half
                .iter()
                .zip(weights)
                .map(|(&corner, weight)| quad[corner].to_vec() * weight)
                .fold(Vector3::zero(), |sum, term| sum + term);
            return Smoothed::Moved(Point3::from_vec(moved));
        }
    }
    Smoothed::Outside
}
