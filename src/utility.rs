//! The decision-utility model of a driver approaching an intersection.
//!
//! Each candidate [Action] is scored on four terms: safety, legality, time
//! and comfort. Their weighted sum is the action's total utility, and the
//! relative utility of braking gives the probability that the driver brakes.

use crate::error::{ensure_non_negative, Error, Result};
use crate::scene::Scene;
use crate::simulation::SimulationParams;
use cgmath::InnerSpace;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use comfort::comfort_utility;
pub use legal::legal_utility;
pub use safety::safety_utility;
pub use time::{time_utility, DEFAULT_LIGHT_TIME};

mod comfort;
mod legal;
mod safety;
mod time;

/// An action available to the ego vehicle.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Action {
    /// Brake and stop before the intersection.
    Brake,
    /// Continue through the intersection at the current velocity.
    Proceed,
}

/// The weighting of each utility term.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weights {
    pub safety: f64,
    pub legal: f64,
    pub time: f64,
    pub comfort: f64,
}

/// The unweighted utility terms of a single action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Utilities {
    pub safety: f64,
    pub legal: f64,
    pub time: f64,
    pub comfort: f64,
}

/// The parameters of the decision model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DecisionParams {
    /// The weighting of the utility terms.
    pub weights: Weights,
    /// The sensitivity of the safety utility to collision energy.
    pub beta: f64,
    /// The sensitivity of the comfort utility to jerk.
    pub gamma: f64,
    /// The time until the light turns green in s, or `None` for [DEFAULT_LIGHT_TIME].
    pub light_time: Option<f64>,
    /// The length of the intersection in m.
    pub intersection_length: f64,
    /// The parameters of the collision simulation used by the safety utility.
    pub simulation: SimulationParams,
}

impl Weights {
    /// Every term weighted equally.
    pub const UNIFORM: Weights = Weights {
        safety: 1.0,
        legal: 1.0,
        time: 1.0,
        comfort: 1.0,
    };

    /// Weights tuned against observed driver behaviour.
    pub const TUNED: Weights = Weights {
        safety: 0.37,
        legal: 0.37,
        time: 0.18,
        comfort: 0.08,
    };

    /// Checks that the weights are non-negative and not all zero.
    pub fn validate(&self) -> Result<()> {
        let all = [self.safety, self.legal, self.time, self.comfort];
        for weight in all {
            ensure_non_negative(weight, "weights")?;
        }
        if all.iter().all(|w| *w == 0.0) {
            return Err(Error::InvalidParameter("weights"));
        }
        Ok(())
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::UNIFORM
    }
}

impl Utilities {
    /// The weighted sum of the utility terms.
    pub fn total(&self, weights: &Weights) -> f64 {
        weights.safety * self.safety
            + weights.legal * self.legal
            + weights.time * self.time
            + weights.comfort * self.comfort
    }
}

impl std::fmt::Display for Utilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "safe: {:5.3}, legal: {:5.3}, time: {:5.3}, comfort: {:5.3}",
            self.safety, self.legal, self.time, self.comfort
        )
    }
}

impl Default for DecisionParams {
    fn default() -> Self {
        Self {
            weights: Weights::UNIFORM,
            beta: 0.01,
            gamma: 3.0,
            light_time: None,
            intersection_length: 20.0,
            simulation: SimulationParams::default(),
        }
    }
}

/// Computes the unweighted utility terms of an action.
///
/// Fails with [Error::StationaryEgo] if the ego vehicle is at rest.
pub fn utilities<R: Rng + ?Sized>(
    action: Action,
    scene: &Scene,
    params: &DecisionParams,
    rng: &mut R,
) -> Result<Utilities> {
    let ego = scene.ego.state()?;
    if ego.is_stationary() {
        return Err(Error::StationaryEgo);
    }
    let others = scene
        .others
        .iter()
        .map(|other| other.state())
        .collect::<Result<Vec<_>>>()?;

    let utilities = Utilities {
        safety: safety_utility(&ego, &others, action, params.beta, &params.simulation)?,
        legal: legal_utility(action, scene.light, scene.stop_line, rng)?,
        time: time_utility(
            ego.velocity().magnitude(),
            action,
            scene.light,
            params.light_time,
            params.intersection_length,
        )?,
        comfort: comfort_utility(scene.ego.deceleration, params.gamma, action)?,
    };
    log::debug!("{:?}: {}", action, utilities);
    Ok(utilities)
}

/// Computes the weighted total utility of an action.
pub fn total_utility<R: Rng + ?Sized>(
    action: Action,
    scene: &Scene,
    params: &DecisionParams,
    rng: &mut R,
) -> Result<f64> {
    params.weights.validate()?;
    Ok(utilities(action, scene, params, rng)?.total(&params.weights))
}

/// Predicts the probability that the ego driver brakes,
/// `U(brake) / (U(brake) + U(proceed))`.
///
/// Fails with [Error::NoUtility] if both utilities are zero.
pub fn brake_probability<R: Rng + ?Sized>(
    scene: &Scene,
    params: &DecisionParams,
    rng: &mut R,
) -> Result<f64> {
    let brake = total_utility(Action::Brake, scene, params, rng)?;
    let proceed = total_utility(Action::Proceed, scene, params, rng)?;
    let sum = brake + proceed;
    if sum.is_nan() || sum <= 0.0 {
        log::warn!(
            "brake utility {} and proceed utility {} give no preference",
            brake,
            proceed
        );
        return Err(Error::NoUtility);
    }
    let prob = brake / sum;
    log::debug!(
        "brake utility {:.3}, proceed utility {:.3}, brake probability {:.3}",
        brake,
        proceed,
        prob
    );
    Ok(prob)
}
