//! Carries a parsed document forward to the current version, one registered
//! upgrade step at a time.

use serde_json::Value;
use tracing::debug;

use super::VersionedDocument;
use super::registry;
use super::specs::v0_3;
use crate::foundation::error::{WaypathError, WaypathResult};

/// Upgrades `doc` through the version chain until it reaches the current
/// version.
///
/// The loop is bounded by the registry length: every step advances the
/// version by exactly one place, so running out of iterations means the
/// registry is wired wrong and [`WaypathError::MigrationCycle`] is returned
/// rather than spinning.
#[tracing::instrument(skip(doc), fields(from = %doc.version()))]
pub fn migrate(mut doc: VersionedDocument) -> WaypathResult<v0_3::Document> {
    for _ in 0..registry::len() {
        if let VersionedDocument::V0_3(current) = doc {
            return Ok(current);
        }
        let from = doc.version();
        doc = (registry::lookup(from).up)(doc);
        debug!(%from, to = %doc.version(), "upgraded document");
    }
    Err(WaypathError::MigrationCycle)
}

/// Parses a raw JSON document and migrates it to the current version.
pub fn open_document(value: &Value) -> WaypathResult<v0_3::Document> {
    migrate(VersionedDocument::from_value(value)?)
}
