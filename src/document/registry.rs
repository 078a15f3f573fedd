//! The version registry: one entry per registered save-format version, in
//! migration order. Each entry pairs the version's compiled schema with the
//! upgrade step out of that version. The entry for the current version is the
//! only identity step; that is what terminates migration.

use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

use super::VersionedDocument;
use super::version::VersionTag;

pub(crate) struct VersionEntry {
    pub(crate) tag: VersionTag,
    pub(crate) schema: JSONSchema,
    pub(crate) up: fn(VersionedDocument) -> VersionedDocument,
}

static REGISTRY: Lazy<Vec<VersionEntry>> = Lazy::new(|| {
    vec![
        entry(VersionTag::V0_0_0, include_str!("schemas/v0.0.0.json"), up_v0_0_0),
        entry(VersionTag::V0_0_1, include_str!("schemas/v0.0.1.json"), up_v0_0_1),
        entry(VersionTag::V0_1, include_str!("schemas/v0.1.json"), up_v0_1),
        entry(VersionTag::V0_1_1, include_str!("schemas/v0.1.1.json"), up_v0_1_1),
        entry(VersionTag::V0_1_2, include_str!("schemas/v0.1.2.json"), up_v0_1_2),
        entry(VersionTag::V0_2, include_str!("schemas/v0.2.json"), up_v0_2),
        entry(VersionTag::V0_2_1, include_str!("schemas/v0.2.1.json"), up_v0_2_1),
        entry(VersionTag::V0_3, include_str!("schemas/v0.3.json"), up_current),
    ]
});

fn entry(
    tag: VersionTag,
    raw: &str,
    up: fn(VersionedDocument) -> VersionedDocument,
) -> VersionEntry {
    // The schemas are compiled into the binary; failing to parse one is a
    // build defect, not a runtime condition.
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => panic!("embedded schema for {tag} is not valid JSON: {err}"),
    };
    let schema = match JSONSchema::options().with_draft(Draft::Draft7).compile(&value) {
        Ok(schema) => schema,
        Err(err) => panic!("embedded schema for {tag} does not compile: {err}"),
    };
    VersionEntry { tag, schema, up }
}

/// Registry entry for `tag`. Entries are stored in ordinal order.
pub(crate) fn lookup(tag: VersionTag) -> &'static VersionEntry {
    &REGISTRY[tag.ordinal()]
}

/// Number of registered versions, which bounds any migration.
pub(crate) fn len() -> usize {
    REGISTRY.len()
}

fn up_v0_0_0(doc: VersionedDocument) -> VersionedDocument {
    match doc {
        VersionedDocument::V0_0_0(d) => VersionedDocument::V0_0_1(d.into()),
        other => other,
    }
}

fn up_v0_0_1(doc: VersionedDocument) -> VersionedDocument {
    match doc {
        VersionedDocument::V0_0_1(d) => VersionedDocument::V0_1(d.into()),
        other => other,
    }
}

fn up_v0_1(doc: VersionedDocument) -> VersionedDocument {
    match doc {
        VersionedDocument::V0_1(d) => VersionedDocument::V0_1_1(d.into()),
        other => other,
    }
}

fn up_v0_1_1(doc: VersionedDocument) -> VersionedDocument {
    match doc {
        VersionedDocument::V0_1_1(d) => VersionedDocument::V0_1_2(d.into()),
        other => other,
    }
}

fn up_v0_1_2(doc: VersionedDocument) -> VersionedDocument {
    match doc {
        VersionedDocument::V0_1_2(d) => VersionedDocument::V0_2(d.into()),
        other => other,
    }
}

fn up_v0_2(doc: VersionedDocument) -> VersionedDocument {
    match doc {
        VersionedDocument::V0_2(d) => VersionedDocument::V0_2_1(d.into()),
        other => other,
    }
}

fn up_v0_2_1(doc: VersionedDocument) -> VersionedDocument {
    match doc {
        VersionedDocument::V0_2_1(d) => VersionedDocument::V0_3(d.into()),
        other => other,
    }
}

fn up_current(doc: VersionedDocument) -> VersionedDocument {
    doc
}
