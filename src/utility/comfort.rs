use super::Action;
use crate::error::{ensure_finite, ensure_non_negative, Result};

/// The time over which a braking manoeuvre is assumed to take place, in s.
const BRAKING_TIME: f64 = 1.5; // s

/// Computes the unweighted comfort utility of an action, `1 / (1 + gamma * jerk^2)`.
///
/// Proceeding involves no jerk. Braking is modelled as reaching the
/// deceleration `deceleration` over 1.5 s.
pub fn comfort_utility(deceleration: f64, gamma: f64, action: Action) -> Result<f64> {
    ensure_finite(deceleration, "deceleration")?;
    ensure_non_negative(gamma, "gamma")?;
    let jerk = match action {
        Action::Proceed => 0.0,
        Action::Brake => deceleration / BRAKING_TIME,
    };
    Ok(1.0 / (1.0 + gamma * jerk.powi(2)))
}
