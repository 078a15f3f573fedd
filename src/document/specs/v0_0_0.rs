//! Baseline save format. Waypoints carry separate `xConstrained` and
//! `yConstrained` flags and full velocity terms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::trajectory::TrajectorySample;

pub const SAVE_FILE_VERSION: &str = "v0.0.0";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub velocity_magnitude: f64,
    pub velocity_angle: f64,
    pub angular_velocity: f64,
    pub x_constrained: bool,
    pub y_constrained: bool,
    pub heading_constrained: bool,
    pub velocity_magnitude_constrained: bool,
    pub velocity_angle_constrained: bool,
    pub angular_velocity_constrained: bool,
    pub control_interval_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub waypoints: Vec<Waypoint>,
    pub trajectory: Option<Vec<TrajectorySample>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotConfig {
    pub mass: f64,
    pub rotational_inertia: f64,
    pub wheelbase: f64,
    pub track_width: f64,
    pub wheel_radius: f64,
    pub wheel_max_velocity: f64,
    pub wheel_max_torque: f64,
    pub bumper_length: f64,
    pub bumper_width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub robot_configuration: RobotConfig,
    pub paths: BTreeMap<String, Path>,
}
