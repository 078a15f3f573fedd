//! Changes from v0.0.1: paths gain `constraints`. Constraint scope is still
//! loose here (a single index, a range object, a keyword, or null); v0.1.1
//! tightens it into a waypoint-id list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::v0_0_1;
use crate::trajectory::TrajectorySample;

pub use super::v0_0_1::{RobotConfig, Waypoint};

pub const SAVE_FILE_VERSION: &str = "v0.1";

/// The pre-v0.1.1 constraint scope encodings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseScope {
    Index(u64),
    Range { start: u64, end: u64 },
    Keyword(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub scope: Option<LooseScope>,
    #[serde(rename = "type")]
    pub kind: String,
    /// Constraint-specific parameters, preserved as-is.
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub waypoints: Vec<Waypoint>,
    pub trajectory: Option<Vec<TrajectorySample>>,
    pub constraints: Vec<Constraint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub robot_configuration: RobotConfig,
    pub paths: BTreeMap<String, Path>,
}

impl From<v0_0_1::Document> for Document {
    fn from(doc: v0_0_1::Document) -> Self {
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
                            trajectory: Some(Vec::new()),
                            constraints: Vec::new(),
                        },
                    )
                })
                .collect(),
        }
    }
}
