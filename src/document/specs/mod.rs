//! One module per registered save-format version, oldest first.
//!
//! Shapes that do not change between versions are re-exported from the module
//! that introduced them rather than redeclared. Each module past the first
//! carries the `From` conversion out of its predecessor; those conversions
//! are the upgrade steps the registry wires together.

pub mod v0_0_0;
pub mod v0_0_1;
pub mod v0_1;
pub mod v0_1_1;
pub mod v0_1_2;
pub mod v0_2;
pub mod v0_2_1;
pub mod v0_3;
