//! Schema validation of raw documents against their declared version.

use serde_json::Value;

use super::registry;
use super::version::VersionTag;

/// Checks `value` against the schema of the version it declares.
///
/// Fails closed: a document with no `version` field, or one declaring a
/// version this build does not register, is invalid. The check runs against
/// the declared version's schema, not the current one, so old-but-well-formed
/// files validate before migration.
pub fn validate(value: &Value) -> bool {
    let Some(version) = value.get("version").and_then(Value::as_str) else {
        return false;
    };
    let Some(tag) = VersionTag::parse(version) else {
        return false;
    };
    registry::lookup(tag).schema.is_valid(value)
}
