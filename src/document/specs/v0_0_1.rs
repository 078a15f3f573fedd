//! Changes from v0.0.0: `xConstrained`/`yConstrained` merge into a single
//! `translationConstrained` flag. Stale trajectories are dropped on upgrade;
//! the solver regenerates them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::v0_0_0;
use crate::trajectory::TrajectorySample;

pub use super::v0_0_0::RobotConfig;

pub const SAVE_FILE_VERSION: &str = "v0.0.1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub velocity_magnitude: f64,
    pub velocity_angle: f64,
    pub angular_velocity: f64,
    pub translation_constrained: bool,
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
pub struct Document {
    pub robot_configuration: RobotConfig,
    pub paths: BTreeMap<String, Path>,
}

impl From<v0_0_0::Waypoint> for Waypoint {
    fn from(w: v0_0_0::Waypoint) -> Self {
        Self {
            x: w.x,
            y: w.y,
            heading: w.heading,
            velocity_magnitude: w.velocity_magnitude,
            velocity_angle: w.velocity_angle,
            angular_velocity: w.angular_velocity,
            // Constrained if either axis was.
            translation_constrained: w.x_constrained || w.y_constrained,
            heading_constrained: w.heading_constrained,
            velocity_magnitude_constrained: w.velocity_magnitude_constrained,
            velocity_angle_constrained: w.velocity_angle_constrained,
            angular_velocity_constrained: w.angular_velocity_constrained,
            control_interval_count: w.control_interval_count,
        }
    }
}

impl From<v0_0_0::Document> for Document {
    fn from(doc: v0_0_0::Document) -> Self {
        Self {
            robot_configuration: doc.robot_configuration,
            paths: doc
                .paths
                .into_iter()
                .map(|(name, path)| {
                    (
                        name,
                        Path {
                            waypoints: path.waypoints.into_iter().map(Into::into).collect(),
                            trajectory: Some(Vec::new()),
                        },
                    )
                })
                .collect(),
        }
    }
}
