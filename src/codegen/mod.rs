//! Identifier rules and source emission for generated robot code.

pub(crate) mod ident;
pub(crate) mod traj_names;
