use super::Action;
use crate::error::{ensure_positive, Result};
use crate::light::LightState;

/// The default time until a red or amber light turns green, in s.
pub const DEFAULT_LIGHT_TIME: f64 = 60.0; // s

/// Computes the unweighted time utility of an action.
///
/// Proceeding costs no time and has a utility of 1. Stopping for a red or amber
/// light delays the vehicle by the light time `t`, so the utility is the ratio
/// of the average speed across the intersection, `L / (t + L / speed)`, to the
/// current speed. Braking for a green light has a utility of 0.
///
/// # Parameters
/// * `speed` - The ego vehicle's speed in m/s
/// * `action` - The candidate action
/// * `light` - The state of the traffic light
/// * `light_time` - The time until the light turns green in s, or `None` for the default
/// * `intersection_length` - The length of the intersection `L` in m
pub fn time_utility(
    speed: f64,
    action: Action,
    light: LightState,
    light_time: Option<f64>,
    intersection_length: f64,
) -> Result<f64> {
    let t = light_time.unwrap_or(DEFAULT_LIGHT_TIME);
    ensure_positive(t, "light time")?;
    ensure_positive(intersection_length, "intersection length")?;

    match action {
        Action::Proceed => Ok(1.0),
        Action::Brake if light.requires_stop() => {
            ensure_positive(speed, "speed")?;
            let avg_speed = intersection_length / (t + intersection_length / speed);
            Ok(avg_speed / speed)
        }
        Action::Brake => Ok(0.0),
    }
}
