//! CLI command definitions.

pub mod render;
pub mod serve;
