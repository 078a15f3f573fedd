//! Trajectory primitives shared by the document model and rendering callers.
//!
//! A trajectory is a plain ordered slice of [`TrajectorySample`]s, strictly
//! non-decreasing in `timestamp`. Nothing here caches or mutates; every
//! function is a pure value transformation safe to call once per rendered
//! frame.

pub(crate) mod gradient;
pub(crate) mod sample;

use serde::{Deserialize, Serialize};

/// One timestamped state along a generated trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectorySample {
    /// Seconds since the start of the trajectory; never negative.
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub angular_velocity: f64,
}

impl TrajectorySample {
    pub(crate) fn speed(&self) -> f64 {
        self.velocity_x.hypot(self.velocity_y)
    }
}

/// A 2D position and orientation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl From<&TrajectorySample> for Pose {
    fn from(s: &TrajectorySample) -> Self {
        Self {
            x: s.x,
            y: s.y,
            heading: s.heading,
        }
    }
}
