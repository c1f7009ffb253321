//! Archive creation.
//!
//! Turns a [`PackConfig`](crate::PackConfig) into a zip file: the walker
//! selects files, the filters drop excluded ones, the plan fixes entry names
//! and order, and the zip writer streams everything out.

pub mod filters;
pub mod walker;

pub mod plan;
pub mod zip;

// Re-exports for public API
pub use filters::ExclusionSet;
pub use filters::MatchMode;
pub use plan::PackPlan;
pub use plan::PlannedEntry;
pub use plan::plan_pack;
pub use self::zip::create_pack;
