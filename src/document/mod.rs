//! Versioned save-file documents and the machinery that carries old ones
//! forward.
//!
//! A document on disk declares its format with a top-level `version` string.
//! [`VersionedDocument::from_value`] dispatches that string to the matching
//! typed shape in [`specs`]; [`migrate`] then walks the registry one version
//! at a time until the document reaches [`VersionTag::CURRENT`]. Documents are
//! only ever written back out at the current version, via [`to_save_value`].

pub(crate) mod registry;
pub mod specs;
mod version;

mod migrate;
mod validate;

pub use migrate::{migrate, open_document};
pub use validate::validate;
pub use version::VersionTag;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::foundation::error::{WaypathError, WaypathResult};

/// A parsed document at some registered version.
#[derive(Clone, Debug, PartialEq)]
pub enum VersionedDocument {
    V0_0_0(specs::v0_0_0::Document),
    V0_0_1(specs::v0_0_1::Document),
    V0_1(specs::v0_1::Document),
    V0_1_1(specs::v0_1_1::Document),
    V0_1_2(specs::v0_1_2::Document),
    V0_2(specs::v0_2::Document),
    V0_2_1(specs::v0_2_1::Document),
    V0_3(specs::v0_3::Document),
}

impl VersionedDocument {
    pub fn version(&self) -> VersionTag {
        match self {
            Self::V0_0_0(_) => VersionTag::V0_0_0,
            Self::V0_0_1(_) => VersionTag::V0_0_1,
            Self::V0_1(_) => VersionTag::V0_1,
            Self::V0_1_1(_) => VersionTag::V0_1_1,
            Self::V0_1_2(_) => VersionTag::V0_1_2,
            Self::V0_2(_) => VersionTag::V0_2,
            Self::V0_2_1(_) => VersionTag::V0_2_1,
            Self::V0_3(_) => VersionTag::V0_3,
        }
    }

    /// Parses a raw JSON document into the typed shape its `version` field
    /// declares.
    ///
    /// A missing or non-string `version` is a parse error; a version string
    /// this build does not register is [`WaypathError::UnknownVersion`], the
    /// signal that the file comes from a newer release.
    pub fn from_value(value: &Value) -> WaypathResult<Self> {
        let version = value
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| WaypathError::parse("document has no string `version` field"))?;
        let tag = VersionTag::parse(version)
            .ok_or_else(|| WaypathError::UnknownVersion(version.to_owned()))?;
        Ok(match tag {
            VersionTag::V0_0_0 => Self::V0_0_0(from_typed(value)?),
            VersionTag::V0_0_1 => Self::V0_0_1(from_typed(value)?),
            VersionTag::V0_1 => Self::V0_1(from_typed(value)?),
            VersionTag::V0_1_1 => Self::V0_1_1(from_typed(value)?),
            VersionTag::V0_1_2 => Self::V0_1_2(from_typed(value)?),
            VersionTag::V0_2 => Self::V0_2(from_typed(value)?),
            VersionTag::V0_2_1 => Self::V0_2_1(from_typed(value)?),
            VersionTag::V0_3 => Self::V0_3(from_typed(value)?),
        })
    }
}

fn from_typed<T: DeserializeOwned>(value: &Value) -> WaypathResult<T> {
    serde_json::from_value(value.clone()).map_err(|err| WaypathError::parse(err.to_string()))
}

/// Serializes a current-version document for saving, with the `version` field
/// stamped in.
pub fn to_save_value(doc: &specs::v0_3::Document) -> WaypathResult<Value> {
    #[derive(Serialize)]
    struct SaveFile<'a> {
        version: &'a str,
        #[serde(flatten)]
        document: &'a specs::v0_3::Document,
    }
    serde_json::to_value(SaveFile {
        version: VersionTag::CURRENT.as_str(),
        document: doc,
    })
    .map_err(|err| WaypathError::parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::document::specs::v0_3;

    fn current_document() -> v0_3::Document {
        v0_3::Document {
            robot_configuration: v0_3::RobotConfig {
                mass: 45.0,
                rotational_inertia: 6.0,
                wheelbase: 0.6,
                track_width: 0.6,
                wheel_radius: 0.05,
                motor_max_velocity: 6000.0,
                motor_max_torque: 1.162,
                gearing: 6.75,
                bumper_length: 0.9,
                bumper_width: 0.9,
            },
            paths: BTreeMap::new(),
            split_trajectories_at_stop_points: false,
        }
    }

    #[test]
    fn missing_version_is_a_parse_error() {
        let err = VersionedDocument::from_value(&json!({ "paths": {} })).unwrap_err();
        assert!(matches!(err, WaypathError::Parse(_)));
    }

    #[test]
    fn non_string_version_is_a_parse_error() {
        let err = VersionedDocument::from_value(&json!({ "version": 3 })).unwrap_err();
        assert!(matches!(err, WaypathError::Parse(_)));
    }

    #[test]
    fn unregistered_version_is_reported_as_unknown() {
        let err = VersionedDocument::from_value(&json!({ "version": "v99.0" })).unwrap_err();
        assert!(matches!(err, WaypathError::UnknownVersion(v) if v == "v99.0"));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        // Version string is fine, body is missing everything.
        let err = VersionedDocument::from_value(&json!({ "version": "v0.3" })).unwrap_err();
        assert!(matches!(err, WaypathError::Parse(_)));
    }

    #[test]
    fn save_value_carries_the_current_version() {
        let value = to_save_value(&current_document()).unwrap();
        assert_eq!(value["version"], json!("v0.3"));
        assert_eq!(value["splitTrajectoriesAtStopPoints"], json!(false));
    }

    #[test]
    fn save_value_round_trips_through_from_value() {
        let doc = current_document();
        let value = to_save_value(&doc).unwrap();
        let parsed = VersionedDocument::from_value(&value).unwrap();
        assert_eq!(parsed, VersionedDocument::V0_3(doc));
    }
}
