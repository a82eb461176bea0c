use super::{Point2d, Vector2d};

/// Rotates a vector 90 degrees anticlockwise.
pub fn rot90(vec: Vector2d) -> Vector2d {
    Vector2d::new(-vec.y, vec.x)
}

/// The heading of a body travelling with the given velocity, in radians.
///
/// A body at rest has a heading of zero, i.e. it is aligned with the x-axis.
pub fn heading(vel: Vector2d) -> f64 {
    // `atan2(0, 0)` is zero, which yields the rest convention above
    f64::atan2(vel.y, vel.x)
}

/// A unit vector pointing along the heading of a body with the given velocity.
pub fn heading_dir(vel: Vector2d) -> Vector2d {
    let (sin, cos) = heading(vel).sin_cos();
    Vector2d::new(cos, sin)
}

/// Advances a position by one explicit Euler step of constant velocity.
///
/// # Parameters
/// * `pos` - The current position
/// * `vel` - The velocity
/// * `dt` - The time step in seconds
pub fn integrate(pos: Point2d, vel: Vector2d, dt: f64) -> Point2d {
    pos + vel * dt
}
