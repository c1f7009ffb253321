//! File selection and zip assembly for packaging the New Commanders mod.
//!
//! `ncpack-core` resolves the mod layout from a single dropped path, filters
//! out build caches, VCS metadata and Photoshop sources, and streams the
//! remaining files into `new-commanders-v{VERSION}-{AUTHOR}.zip`.
//!
//! # Examples
//!
//! ```no_run
//! use ncpack_core::ModLayout;
//! use ncpack_core::NoopProgress;
//! use ncpack_core::PackConfig;
//! use ncpack_core::create_pack;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = ModLayout::from_inputs(&["/mods/new_commanders"])?;
//! let config = PackConfig::new(layout, "John", "1.03");
//! let report = create_pack(&config, &mut NoopProgress)?;
//! println!("Packed {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod creation;
pub mod error;
pub mod layout;
pub mod report;

// Re-export main API types
pub use config::PackConfig;
pub use creation::ExclusionSet;
pub use creation::MatchMode;
pub use creation::PackPlan;
pub use creation::PlannedEntry;
pub use creation::create_pack;
pub use creation::plan_pack;
pub use error::PackError;
pub use error::Result;
pub use layout::ModLayout;
pub use report::NoopProgress;
pub use report::PackReport;
pub use report::ProgressCallback;
