use cgmath::{EuclideanSpace, Point2, Point3};

/// Linear interpolation between two points.
pub trait Interpolatable {
    /// Returns `self * (1 - factor) + other * factor`.
    fn interpolate(self, other: Self, factor: f32) -> Self;
}

impl Interpolatable for Point3<f32> {
    fn interpolate(self, other: Self, factor: f32) -> Self {
        Point3::from_vec(self.to_vec() * (1. - factor) + other.to_vec() * factor)
    }
}

impl Interpolatable for Point2<f32> {
    fn interpolate(self, other: Self, factor: f32) -> Self {
        Point2::from_vec(self.to_vec() * (1. - factor) + other.to_vec() * factor)
    }
}

/// Given the values `v0` and `v1` at the two ends of an edge, returns the factor `t` such that
/// `v0 + (v1 - v0) * t == iso_value`.
///
/// The caller guarantees `v0 != v1`; the two values straddle `iso_value`, so `t` lies in \[0, 1].
pub(crate) fn interpolation_factor(v0: f32, v1: f32, iso_value: f32) -> f32 {
    (iso_value - v0) / (v1 - v0)
}
