//! Changes from v0.1: waypoints slim down (velocity terms leave, replaced by a
//! single `isInitialGuess` flag), constraint scope becomes an explicit list of
//! waypoint ids, and paths gain the control-interval guessing knobs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::v0_1::{self, LooseScope};
use crate::trajectory::TrajectorySample;

pub use super::v0_1::RobotConfig;

pub const SAVE_FILE_VERSION: &str = "v0.1.1";

pub const DEFAULT_CONTROL_INTERVAL_COUNT: u32 = 40;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub is_initial_guess: bool,
    pub translation_constrained: bool,
    pub heading_constrained: bool,
    pub control_interval_count: u32,
}

/// Either an anchor keyword or a waypoint index within the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WaypointId {
    Anchor(Anchor),
    Index(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    First,
    Last,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub scope: Vec<WaypointId>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub waypoints: Vec<Waypoint>,
    pub trajectory: Option<Vec<TrajectorySample>>,
    pub constraints: Vec<Constraint>,
    pub uses_control_interval_guessing: bool,
    pub default_control_interval_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub robot_configuration: RobotConfig,
    pub paths: BTreeMap<String, Path>,
}

impl From<v0_1::Waypoint> for Waypoint {
    fn from(w: v0_1::Waypoint) -> Self {
        Self {
            x: w.x,
            y: w.y,
            heading: w.heading,
            is_initial_guess: false,
            translation_constrained: w.translation_constrained,
            heading_constrained: w.heading_constrained,
            control_interval_count: w.control_interval_count,
        }
    }
}

impl From<v0_1::Constraint> for Constraint {
    fn from(c: v0_1::Constraint) -> Self {
        let scope = match c.scope {
            None => Vec::new(),
            Some(LooseScope::Index(i)) => vec![WaypointId::Index(i)],
            Some(LooseScope::Range { start, end }) => {
                vec![WaypointId::Index(start), WaypointId::Index(end)]
            }
            Some(LooseScope::Keyword(kw)) => match kw.as_str() {
                "first" => vec![WaypointId::Anchor(Anchor::First)],
                "last" => vec![WaypointId::Anchor(Anchor::Last)],
                // Unrecognized keyword scopes have nothing to attach to.
                _ => Vec::new(),
            },
        };
        Self {
            scope,
            kind: c.kind,
            data: c.data,
        }
    }
}

impl From<v0_1::Document> for Document {
    fn from(doc: v0_1::Document) -> Self {
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
                            trajectory: path.trajectory,
                            constraints: path.constraints.into_iter().map(Into::into).collect(),
                            uses_control_interval_guessing: true,
                            default_control_interval_count: DEFAULT_CONTROL_INTERVAL_COUNT,
                        },
                    )
                })
                .collect(),
        }
    }
}
