//! Error conversion utilities for CLI.
//!
//! Converts ncpack-core's typed errors (thiserror) into the messages the
//! operator sees (anyhow).

use anyhow::anyhow;
use ncpack_core::PackError;

/// Line printed after every fatal error.
pub const EXIT_NOTICE: &str = "\nThe application will exit.";

/// Converts `PackError` to a user-facing anyhow error.
pub fn convert_pack_error(err: PackError) -> anyhow::Error {
    match err {
        PackError::NoInput => anyhow!(
            "No input provided: Please drag the new_commanders directory over the executable."
        ),
        PackError::TooManyArguments { count } => {
            anyhow!("Too many arguments: {count}, expecting 1.")
        }
        PackError::RootNotFound { path } => {
            anyhow!("Directory \"{}\" does not exist!", path.display())
        }
        PackError::MissingDirectories { paths } => {
            let quoted = paths
                .iter()
                .map(|p| format!("\"{}\"", p.display()))
                .collect::<Vec<_>>()
                .join(", ");
            anyhow!("One of the following paths does not exist: {quoted}")
        }
        PackError::OutputExists { path } => {
            anyhow!(
                "File \"{}\" already exists! Please try again.",
                path.display()
            )
        }
        PackError::InvalidEntryName { path, reason } => {
            anyhow!(
                "Cannot add \"{}\" to the archive: {reason}",
                path.display()
            )
        }
        other => anyhow::Error::from(other).context("Packaging failed"),
    }
}

/// Maps a core result into an anyhow result with user-facing messages.
pub fn add_pack_context<T>(result: Result<T, PackError>) -> anyhow::Result<T> {
    result.map_err(convert_pack_error)
}
