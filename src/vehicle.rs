use crate::error::{ensure_finite, Error, Result};
use crate::math::{integrate, OrientedBox, Point2d, Vector2d};
use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kinematic state of a vehicle taking part in a collision simulation.
///
/// The vehicle's dimensions are fixed, while its position advances with
/// a constant velocity. Its heading is always derived from the velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleState {
    /// Half the vehicle's length in m.
    half_len: f64,
    /// Half the vehicle's width in m.
    half_wid: f64,
    /// The vehicle's reference point in world space.
    position: Point2d,
    /// The velocity in m/s.
    velocity: Vector2d,
}

/// The attributes of a simulated vehicle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VehicleAttributes {
    /// The vehicle length in m.
    pub length: f64,
    /// The vehicle width in m.
    pub width: f64,
}

impl VehicleState {
    /// Creates a vehicle whose dimensions are known directly.
    ///
    /// # Parameters
    /// * `attributes` - The vehicle's length and width
    /// * `front` - The front-centre point of the vehicle
    /// * `velocity` - The velocity in m/s
    pub fn new(attributes: &VehicleAttributes, front: Point2d, velocity: Vector2d) -> Result<Self> {
        ensure_finite(front.x, "position")?;
        ensure_finite(front.y, "position")?;
        ensure_finite(velocity.x, "velocity")?;
        ensure_finite(velocity.y, "velocity")?;
        check_dimension(attributes.length, "length")?;
        check_dimension(attributes.width, "width")?;
        Ok(Self {
            half_len: 0.5 * attributes.length,
            half_wid: 0.5 * attributes.width,
            position: front,
            velocity,
        })
    }

    /// Creates a vehicle whose length is the distance between
    /// its front-centre and rear-centre points.
    pub fn from_front_and_rear(
        front: Point2d,
        rear: Point2d,
        velocity: Vector2d,
        width: f64,
    ) -> Result<Self> {
        ensure_finite(rear.x, "rear position")?;
        ensure_finite(rear.y, "rear position")?;
        let length = front.distance(rear);
        Self::new(&VehicleAttributes { length, width }, front, velocity)
    }

    /// The vehicle's length in m.
    pub fn length(&self) -> f64 {
        2.0 * self.half_len
    }

    /// The vehicle's width in m.
    pub fn width(&self) -> f64 {
        2.0 * self.half_wid
    }

    /// The vehicle's reference point in world space.
    pub fn position(&self) -> Point2d {
        self.position
    }

    /// The vehicle's velocity in m/s.
    pub fn velocity(&self) -> Vector2d {
        self.velocity
    }

    /// The square of the vehicle's speed, proportional to its kinetic energy.
    pub fn speed_squared(&self) -> f64 {
        self.velocity.magnitude2()
    }

    /// Whether the vehicle is at rest.
    pub fn is_stationary(&self) -> bool {
        self.velocity == Vector2d::zero()
    }

    /// Returns a copy of this vehicle travelling at a different velocity.
    pub fn with_velocity(&self, velocity: Vector2d) -> Result<Self> {
        ensure_finite(velocity.x, "velocity")?;
        ensure_finite(velocity.y, "velocity")?;
        Ok(Self { velocity, ..*self })
    }

    /// The vehicle's footprint in world space.
    pub fn footprint(&self) -> OrientedBox {
        OrientedBox::new(self.position, self.length(), self.width(), self.velocity)
    }

    /// Integrates the vehicle's position over one time step.
    ///
    /// # Parameters
    /// * `dt` - The time step in seconds
    pub(crate) fn integrate(&mut self, dt: f64) {
        self.position = integrate(self.position, self.velocity, dt);
    }
}

fn check_dimension(value: f64, what: &'static str) -> Result<()> {
    ensure_finite(value, what)?;
    if value > 0.0 {
        Ok(())
    } else {
        log::warn!("rejected vehicle {} of {} m", what, value);
        Err(Error::InvalidDimension(what))
    }
}
