//! Changes from v0.2.1: paths gain event markers. Current save format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::v0_2_1;
use crate::trajectory::TrajectorySample;

pub use super::v0_2_1::{
    Anchor, CircleObstacle, Constraint, RobotConfig, Waypoint, WaypointId,
};

pub const SAVE_FILE_VERSION: &str = "v0.3";

/// A command bound to an event marker, mirroring the robot-side command
/// composition model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Command {
    Deadline { commands: Vec<Command> },
    Parallel { commands: Vec<Command> },
    Race { commands: Vec<Command> },
    Sequential { commands: Vec<Command> },
    Wait { time: f64 },
    Named { name: Option<String> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMarker {
    pub name: String,
    pub target: WaypointId,
    /// Seconds relative to the target waypoint's timestamp.
    pub offset: f64,
    pub command: Command,
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
    pub event_markers: Vec<EventMarker>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub robot_configuration: RobotConfig,
    pub paths: BTreeMap<String, Path>,
    pub split_trajectories_at_stop_points: bool,
}

impl From<v0_2_1::Document> for Document {
    fn from(doc: v0_2_1::Document) -> Self {
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
                            uses_default_field_obstacles: path.uses_default_field_obstacles,
                            uses_control_interval_guessing: path.uses_control_interval_guessing,
                            default_control_interval_count: path.default_control_interval_count,
                            circle_obstacles: path.circle_obstacles,
                            event_markers: Vec::new(),
                        },
                    )
                })
                .collect(),
            split_trajectories_at_stop_points: doc.split_trajectories_at_stop_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_json_is_adjacently_tagged() {
        let cmd = Command::Sequential {
            commands: vec![
                Command::Named {
                    name: Some("intake".to_owned()),
                },
                Command::Wait { time: 0.5 },
            ],
        };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "sequential",
                "data": {
                    "commands": [
                        { "type": "named", "data": { "name": "intake" } },
                        { "type": "wait", "data": { "time": 0.5 } }
                    ]
                }
            })
        );
        let back: Command = serde_json::from_value(value).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn waypoint_id_accepts_keywords_and_indices() {
        let ids: Vec<WaypointId> = serde_json::from_value(serde_json::json!(["first", 2, "last"]))
            .unwrap();
        assert_eq!(
            ids,
            vec![
                WaypointId::Anchor(Anchor::First),
                WaypointId::Index(2),
                WaypointId::Anchor(Anchor::Last),
            ]
        );
    }
}
