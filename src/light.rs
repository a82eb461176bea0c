#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of the traffic light facing the ego vehicle.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum LightState {
    Green,
    Red,
    Amber,
}

/// The ego vehicle's position relative to the stop line.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum StopLine {
    /// The front of the vehicle has crossed the stop line.
    Past,
    /// The vehicle has not yet reached the stop line.
    NotPast,
}

impl LightState {
    /// Whether vehicles are expected to stop for the light.
    pub fn requires_stop(self) -> bool {
        self != LightState::Green
    }
}
