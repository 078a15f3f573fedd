//! Changes from v0.2: the document records whether trajectories split at stop
//! points. Off for upgraded documents so existing exports keep their shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::v0_2;

pub use super::v0_2::{
    Anchor, CircleObstacle, Constraint, Path, RobotConfig, Waypoint, WaypointId,
};

pub const SAVE_FILE_VERSION: &str = "v0.2.1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub robot_configuration: RobotConfig,
    pub paths: BTreeMap<String, Path>,
    pub split_trajectories_at_stop_points: bool,
}

impl From<v0_2::Document> for Document {
    fn from(doc: v0_2::Document) -> Self {
        Self {
            robot_configuration: doc.robot_configuration,
            paths: doc.paths,
            split_trajectories_at_stop_points: false,
        }
    }
}
