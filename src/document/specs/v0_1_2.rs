//! Changes from v0.1.1: paths gain circle obstacles and the
//! `usesDefaultFieldObstacles` flag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::v0_1_1;
use crate::trajectory::TrajectorySample;

pub use super::v0_1_1::{Anchor, Constraint, RobotConfig, Waypoint, WaypointId};

pub const SAVE_FILE_VERSION: &str = "v0.1.2";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleObstacle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub waypoints: Vec<Waypoint>,
    pub trajectory: Option<Vec<TrajectorySample>>,
    pub constraints: Vec<Constraint>,
    pub uses_default_field_obstacles: bool,
    pub uses_control_interval_guessing: bool,
    pub default_control_interval_count: u32,
    pub circle_obstacles: Vec<CircleObstacle>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub robot_configuration: RobotConfig,
    pub paths: BTreeMap<String, Path>,
}

impl From<v0_1_1::Document> for Document {
    fn from(doc: v0_1_1::Document) -> Self {
        Self {
            robot_configuration: doc.robot_configuration,
            paths: doc
                .paths
                .into_iter()
                .map(|(name, path)| {
                    (
                        name,
                        Path {
                            waypoints: path.waypoints,
                            trajectory: path.trajectory,
                            constraints: path.constraints,
                            uses_default_field_obstacles: true,
                            uses_control_interval_guessing: path.uses_control_interval_guessing,
                            default_control_interval_count: path.default_control_interval_count,
                            circle_obstacles: Vec::new(),
                        },
                    )
                })
                .collect(),
        }
    }
}
