//! A decision-utility model of a driver choosing whether to brake at an intersection.
//!
//! The core is a collision simulator which advances two rectangular vehicles in
//! straight lines and checks their footprints for overlap with the separating axis
//! theorem. The [utility] module scores the candidate actions on safety, legality,
//! time and comfort, and predicts the probability of braking.

pub use cgmath;
pub use error::{Error, Result};
pub use light::{LightState, StopLine};
pub use scene::{EgoVehicle, OtherVehicle, Scenario, Scene};
pub use simulation::{first_contact, simulate_collision, Contact, SimulationParams};
pub use util::Interval;
pub use utility::{brake_probability, total_utility, Action, DecisionParams, Weights};
pub use vehicle::{VehicleAttributes, VehicleState};

mod error;
mod light;
pub mod math;
mod scene;
mod simulation;
mod util;
pub mod utility;
mod vehicle;
