//! Command implementations.

pub mod pack;
pub mod plan;
