use super::Action;
use crate::error::{ensure_non_negative, Result};
use crate::math::Vector2d;
use crate::simulation::{first_contact, SimulationParams};
use crate::vehicle::VehicleState;
use cgmath::Zero;

/// Computes the unweighted safety utility of an action.
///
/// Each other vehicle contributes `exp(-(|v_i|^2 + |v_ego|^2) * beta)` if it
/// collides with the ego vehicle within the horizon, and 1 otherwise, so that
/// collisions at high combined kinetic energy are penalised the most.
/// With no other vehicles the utility is 1.
///
/// # Parameters
/// * `ego` - The ego vehicle; its velocity is taken as zero when braking
/// * `others` - The other vehicles near the intersection
/// * `action` - The candidate action
/// * `beta` - The sensitivity to collision energy
/// * `sim` - The collision simulation parameters
pub fn safety_utility(
    ego: &VehicleState,
    others: &[VehicleState],
    action: Action,
    beta: f64,
    sim: &SimulationParams,
) -> Result<f64> {
    ensure_non_negative(beta, "beta")?;
    if others.is_empty() {
        return Ok(1.0);
    }

    let ego = match action {
        Action::Brake => ego.with_velocity(Vector2d::zero())?,
        Action::Proceed => *ego,
    };

    let mut sum = 0.0;
    for other in others {
        let collides = first_contact(&ego, other, sim)?.is_some();
        let penalty = if collides { 1.0 } else { 0.0 };
        sum += f64::exp(-(other.speed_squared() + ego.speed_squared()) * penalty * beta);
    }
    Ok(sum)
}
