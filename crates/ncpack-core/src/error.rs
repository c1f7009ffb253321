//! Error types for mod packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while resolving the mod layout or writing the pack.
#[derive(Error, Debug)]
pub enum PackError {
    /// No input path was supplied.
    #[error("no input provided")]
    NoInput,

    /// More than one input path was supplied.
    #[error("too many arguments: {count}, expecting 1")]
    TooManyArguments {
        /// Number of arguments received.
        count: usize,
    },

    /// The directory containing the input does not exist.
    #[error("directory does not exist: {path}")]
    RootNotFound {
        /// The derived root directory.
        path: PathBuf,
    },

    /// At least one of the required mod directories is missing.
    #[error("required directories missing under root: {paths:?}")]
    MissingDirectories {
        /// All required directories, in processing order.
        paths: Vec<PathBuf>,
    },

    /// The output archive already exists and will not be overwritten.
    #[error("output archive already exists: {path}")]
    OutputExists {
        /// The colliding archive path.
        path: PathBuf,
    },

    /// A source file cannot be expressed as an archive entry name.
    #[error("cannot derive archive entry name for {path}: {reason}")]
    InvalidEntryName {
        /// The source file path.
        path: PathBuf,
        /// Why the name could not be derived.
        reason: String,
    },

    /// Directory traversal failed.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// The zip writer rejected an operation.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Returns `true` if this error was raised before anything was written.
    ///
    /// Precondition failures cover argument count, missing directories and
    /// an output name collision. Everything else happens while the archive is
    /// being assembled and may leave a partial file on disk.
    ///
    /// # Examples
    ///
    /// ```
    /// use ncpack_core::PackError;
    ///
    /// assert!(PackError::NoInput.is_precondition());
    ///
    /// let err = PackError::Io(std::io::Error::other("disk full"));
    /// assert!(!err.is_precondition());
    /// ```
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NoInput
                | Self::TooManyArguments { .. }
                | Self::RootNotFound { .. }
                | Self::MissingDirectories { .. }
                | Self::OutputExists { .. }
        )
    }
}
