//! Descriptions of the vehicles and signals the ego driver is reacting to.

use crate::error::Result;
use crate::light::{LightState, StopLine};
use crate::math::{Point2d, Vector2d};
use crate::utility::DecisionParams;
use crate::vehicle::{VehicleAttributes, VehicleState};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The decision-making vehicle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EgoVehicle {
    /// The front-centre point of the vehicle.
    pub front: Point2d,
    /// The velocity in m/s.
    pub velocity: Vector2d,
    /// The vehicle's length and width in m.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attributes: VehicleAttributes,
    /// The deceleration the vehicle would apply when braking, in m/s^2.
    pub deceleration: f64,
}

/// Another vehicle approaching the intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OtherVehicle {
    /// The front-centre point of the vehicle.
    pub front: Point2d,
    /// The rear-centre point of the vehicle, which determines its length.
    pub rear: Point2d,
    /// The velocity in m/s.
    pub velocity: Vector2d,
    /// The vehicle width in m.
    pub width: f64,
}

/// The situation in which the ego driver decides whether to brake.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    pub ego: EgoVehicle,
    #[cfg_attr(feature = "serde", serde(default))]
    pub others: Vec<OtherVehicle>,
    pub light: LightState,
    pub stop_line: StopLine,
}

/// A scene together with the parameters of the decision model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    pub scene: Scene,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: DecisionParams,
}

impl EgoVehicle {
    /// The kinematic state of the vehicle.
    pub fn state(&self) -> Result<VehicleState> {
        VehicleState::new(&self.attributes, self.front, self.velocity)
    }
}

impl OtherVehicle {
    /// The kinematic state of the vehicle.
    pub fn state(&self) -> Result<VehicleState> {
        VehicleState::from_front_and_rear(self.front, self.rear, self.velocity, self.width)
    }
}

#[cfg(feature = "serde")]
impl Scenario {
    /// Parses a scenario from a JSON document.
    ///
    /// Missing model parameters take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Scenario =
            serde_json::from_str(json).map_err(|err| crate::Error::Config(err.to_string()))?;
        scenario.params.simulation.validate()?;
        scenario.params.weights.validate()?;
        Ok(scenario)
    }
}

#[cfg(all(test, feature = "serde"))]
mod test {
    use super::*;
    use crate::utility::Weights;
    use crate::Error;

    const SCENARIO: &str = r#"{
        "scene": {
            "ego": {
                "front": { "x": 0.0, "y": 0.0 },
                "velocity": { "x": 10.0, "y": 0.0 },
                "length": 4.5,
                "width": 1.8,
                "deceleration": 40.0
            },
            "others": [{
                "front": { "x": 10.0, "y": 0.0 },
                "rear": { "x": 0.0, "y": 20.0 },
                "velocity": { "x": -10.0, "y": 0.0 },
                "width": 1.8
            }],
            "light": "amber",
            "stop_line": "not_past"
        },
        "params": {
            "weights": { "safety": 0.37, "legal": 0.37, "time": 0.18, "comfort": 0.08 },
            "light_time": 30.0
        }
    }"#;

    #[test]
    fn parse_scenario() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();
        assert_eq!(scenario.scene.light, LightState::Amber);
        assert_eq!(scenario.scene.stop_line, StopLine::NotPast);
        assert_eq!(scenario.scene.ego.attributes.length, 4.5);
        assert_eq!(scenario.scene.others.len(), 1);
        assert_eq!(scenario.params.weights, Weights::TUNED);
        assert_eq!(scenario.params.light_time, Some(30.0));
        assert_eq!(scenario.params.gamma, DecisionParams::default().gamma);
        assert_eq!(scenario.params.simulation.horizon, 1.5);
    }

    #[test]
    fn malformed_scenario() {
        let result = Scenario::from_json(r#"{ "scene": { "light": "purple" } }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn invalid_simulation_params() {
        let json = SCENARIO.replace(
            r#""light_time": 30.0"#,
            r#""light_time": 30.0, "simulation": { "time_step": -0.01 }"#,
        );
        assert_eq!(
            Scenario::from_json(&json),
            Err(Error::InvalidParameter("time step"))
        );
    }
}
