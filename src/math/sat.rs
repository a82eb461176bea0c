//! Overlap testing of oriented boxes using the separating axis theorem.

use super::{OrientedBox, Point2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;

/// Projects a set of corners onto an axis, returning the range of projections.
///
/// The axis need not be normalised; only the relative order of the projections matters.
pub fn project_onto_axis(corners: &[Point2d; 4], axis: Vector2d) -> Interval<f64> {
    Interval::hull(corners.map(|corner| corner.to_vec().dot(axis)))
}

/// Determines whether two oriented boxes overlap.
///
/// Every edge of both boxes is tried as a separating axis. The boxes overlap
/// iff their projections overlap on all of them; touching counts as overlap.
pub fn boxes_overlap(a: &OrientedBox, b: &OrientedBox) -> bool {
    a.edges().chain(b.edges()).all(|axis| {
        let proj_a = project_onto_axis(a.corners(), axis);
        let proj_b = project_onto_axis(b.corners(), axis);
        proj_a.overlaps(&proj_b)
    })
}
