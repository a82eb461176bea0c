use crate::error::{ensure_positive, Error, Result};
use crate::math::boxes_overlap;
use crate::vehicle::VehicleState;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default simulation time step in s.
pub const DEFAULT_TIME_STEP: f64 = 0.01; // s

/// The default simulation horizon in s.
pub const DEFAULT_HORIZON: f64 = 1.5; // s

/// The largest number of steps a single simulation may take.
pub const MAX_STEPS: usize = 1_000_000;

/// Tolerance added to the step ratio so that floating-point error in
/// `horizon / time_step` does not drop a whole step.
const STEP_EPSILON: f64 = 1e-9;

/// The time step and horizon of a collision simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SimulationParams {
    /// The time step in s.
    pub time_step: f64,
    /// The maximum simulated time in s.
    pub horizon: f64,
}

/// The first moment at which two simulated vehicles overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// The index of the step at which the overlap was found, starting from zero.
    pub step: usize,
    /// The simulated time at the end of that step in s.
    pub time: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl SimulationParams {
    /// Checks that the time step and horizon are usable,
    /// and that covering the horizon takes at most [MAX_STEPS] steps.
    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.time_step, "time step")?;
        ensure_positive(self.horizon, "horizon")?;
        let ratio = self.horizon / self.time_step;
        if ratio.is_finite() && ratio <= MAX_STEPS as f64 {
            Ok(())
        } else {
            log::warn!(
                "rejected horizon of {} s with time step {} s",
                self.horizon,
                self.time_step
            );
            Err(Error::InvalidParameter("horizon"))
        }
    }

    /// The number of whole steps that fit within the horizon, `floor(horizon / time_step)`.
    ///
    /// A tiny tolerance is applied before flooring, so 1.5 s at 0.01 s gives 150 steps.
    pub fn num_steps(&self) -> usize {
        (self.horizon / self.time_step + STEP_EPSILON).floor() as usize
    }
}

/// Simulates two vehicles moving in straight lines and finds the first step at which
/// their footprints overlap, if any.
///
/// Both vehicles are advanced before every overlap test, so the initial poses are
/// never tested on their own.
pub fn first_contact(
    ego: &VehicleState,
    other: &VehicleState,
    params: &SimulationParams,
) -> Result<Option<Contact>> {
    params.validate()?;

    let (mut ego, mut other) = (*ego, *other);
    for step in 0..params.num_steps() {
        ego.integrate(params.time_step);
        other.integrate(params.time_step);
        log::trace!(
            "step {}: ego at {:?}, other at {:?}",
            step,
            ego.position(),
            other.position()
        );

        if boxes_overlap(&ego.footprint(), &other.footprint()) {
            let contact = Contact {
                step,
                time: (step + 1) as f64 * params.time_step,
            };
            log::debug!("vehicles collide after {:.2} s", contact.time);
            return Ok(Some(contact));
        }
    }

    Ok(None)
}

/// Determines whether two vehicles collide within the default 1.5 s horizon,
/// stepping every 0.01 s.
///
/// The flat argument list `(ego_front, other_front, ego_vel, other_vel, other_rear,
/// ego_length, ego_width, other_width)` maps onto the two vehicles as
/// `VehicleState::new(&VehicleAttributes { length: ego_length, width: ego_width },
/// ego_front, ego_vel)` and
/// `VehicleState::from_front_and_rear(other_front, other_rear, other_vel, other_width)`.
///
/// # Parameters
/// * `ego` - The decision-making vehicle, built with [VehicleState::new]
/// * `other` - The other vehicle, usually built with [VehicleState::from_front_and_rear]
pub fn simulate_collision(ego: &VehicleState, other: &VehicleState) -> Result<bool> {
    Ok(first_contact(ego, other, &SimulationParams::default())?.is_some())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point2d, Vector2d};
    use crate::vehicle::VehicleAttributes;
    use assert_approx_eq::assert_approx_eq;

    fn unit_vehicle(x: f64, y: f64, vx: f64, vy: f64) -> VehicleState {
        let attributes = VehicleAttributes {
            length: 1.0,
            width: 1.0,
        };
        VehicleState::new(&attributes, Point2d::new(x, y), Vector2d::new(vx, vy)).unwrap()
    }

    #[test]
    fn default_step_count() {
        assert_eq!(SimulationParams::default().num_steps(), 150);
    }

    #[test]
    fn partial_steps_are_dropped() {
        let params = SimulationParams {
            time_step: 0.4,
            horizon: 1.0,
        };
        assert_eq!(params.num_steps(), 2);
        let params = SimulationParams {
            time_step: 0.01,
            horizon: 2.5,
        };
        assert_eq!(params.num_steps(), 250);
    }

    #[test]
    fn rejects_unbounded_step_count() {
        let params = SimulationParams {
            time_step: 1e-300,
            horizon: 1e300,
        };
        assert_eq!(params.validate(), Err(Error::InvalidParameter("horizon")));
        let params = SimulationParams {
            time_step: 1e-6,
            horizon: 10.0,
        };
        assert_eq!(params.validate(), Err(Error::InvalidParameter("horizon")));

        let ego = unit_vehicle(0.0, 0.0, 5.0, 0.0);
        let params = SimulationParams {
            time_step: 1e-300,
            horizon: 1e300,
        };
        assert_eq!(
            first_contact(&ego, &ego, &params),
            Err(Error::InvalidParameter("horizon"))
        );
    }

    #[test]
    fn contact_time() {
        // Gap of 2 m closing at 10 m/s
        let ego = unit_vehicle(0.0, 0.0, 5.0, 0.0);
        let other = unit_vehicle(3.0, 0.0, -5.0, 0.0);
        let contact = first_contact(&ego, &other, &SimulationParams::default())
            .unwrap()
            .unwrap();
        assert!((19..=20).contains(&contact.step));
        assert_approx_eq!(contact.time, 0.01 * (contact.step + 1) as f64);
    }

    #[test]
    fn initial_overlap_is_found_on_first_step() {
        let ego = unit_vehicle(0.0, 0.0, 0.0, 0.0);
        let other = unit_vehicle(0.5, 0.0, 0.0, 0.0);
        let contact = first_contact(&ego, &other, &SimulationParams::default()).unwrap();
        assert_eq!(contact.map(|c| c.step), Some(0));
    }

    #[test]
    fn contact_beyond_horizon_is_ignored() {
        // Gap of 20 m closing at 10 m/s takes 2 s
        let ego = unit_vehicle(0.0, 0.0, 5.0, 0.0);
        let other = unit_vehicle(21.0, 0.0, -5.0, 0.0);
        assert_eq!(simulate_collision(&ego, &other), Ok(false));

        let params = SimulationParams {
            time_step: 0.01,
            horizon: 2.5,
        };
        assert!(first_contact(&ego, &other, &params).unwrap().is_some());
    }

    #[test]
    fn rejects_invalid_params() {
        let ego = unit_vehicle(0.0, 0.0, 5.0, 0.0);
        let params = SimulationParams {
            time_step: 0.0,
            horizon: 1.5,
        };
        assert_eq!(
            first_contact(&ego, &ego, &params),
            Err(Error::InvalidParameter("time step"))
        );
        let params = SimulationParams {
            time_step: 0.01,
            horizon: f64::NAN,
        };
        assert_eq!(
            first_contact(&ego, &ego, &params),
            Err(Error::NonFinite("horizon"))
        );
    }
}
