//! Changes from v0.1.2: the robot config describes the drive at the motor
//! (`motorMaxVelocity`/`motorMaxTorque` plus `gearing`) instead of at the
//! wheel. Upgraded documents get the app defaults for the new fields; the
//! old wheel-level limits carried no gearing information to convert from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::v0_1_2;

pub use super::v0_1_2::{Anchor, CircleObstacle, Constraint, Path, Waypoint, WaypointId};

pub const SAVE_FILE_VERSION: &str = "v0.2";

/// Free speed of the default drive motor (rpm).
pub const DEFAULT_MOTOR_MAX_VELOCITY: f64 = 6000.0;
/// Stall-adjacent usable torque of the default drive motor (N*m).
pub const DEFAULT_MOTOR_MAX_TORQUE: f64 = 1.162;
/// Default drive reduction (SDS L2 mk4/mk4i).
pub const DEFAULT_GEARING: f64 = 6.75;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotConfig {
    pub mass: f64,
    pub rotational_inertia: f64,
    pub wheelbase: f64,
    pub track_width: f64,
    pub wheel_radius: f64,
    pub motor_max_velocity: f64,
    pub motor_max_torque: f64,
    pub gearing: f64,
    pub bumper_length: f64,
    pub bumper_width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub robot_configuration: RobotConfig,
    pub paths: BTreeMap<String, Path>,
}

impl From<v0_1_2::RobotConfig> for RobotConfig {
    fn from(config: v0_1_2::RobotConfig) -> Self {
        Self {
            mass: config.mass,
            rotational_inertia: config.rotational_inertia,
            wheelbase: config.wheelbase,
            track_width: config.track_width,
            wheel_radius: config.wheel_radius,
            motor_max_velocity: DEFAULT_MOTOR_MAX_VELOCITY,
            motor_max_torque: DEFAULT_MOTOR_MAX_TORQUE,
            gearing: DEFAULT_GEARING,
            bumper_length: config.bumper_length,
            bumper_width: config.bumper_width,
        }
    }
}

impl From<v0_1_2::Document> for Document {
    fn from(doc: v0_1_2::Document) -> Self {
        Self {
            robot_configuration: doc.robot_configuration.into(),
            paths: doc.paths,
        }
    }
}
