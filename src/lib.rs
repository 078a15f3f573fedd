#![forbid(unsafe_code)]

//! Versioned robot-path documents: schema migration and validation, trajectory
//! sampling, path-gradient color evaluation, and Java identifier generation
//! for exported trajectory names.

pub mod codegen;
pub mod document;
pub mod foundation;
pub mod trajectory;

pub use codegen::ident::{NameIssue, sanitize_name, validate_name};
pub use codegen::traj_names::{TRAJ_NAMES_CLASS, gen_traj_names_file};
pub use document::specs::v0_3 as current;
pub use document::{VersionTag, VersionedDocument, migrate, open_document, to_save_value, validate};
pub use foundation::error::{WaypathError, WaypathResult};
pub use trajectory::gradient::PathGradient;
pub use trajectory::sample::sample;
pub use trajectory::{Pose, TrajectorySample};
