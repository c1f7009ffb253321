//! Mod directory layout resolution.
//!
//! The packager is pointed at a single path (usually the `new_commanders`
//! directory dropped onto the executable). Its parent becomes the root, and
//! the root must contain both mod directories.

use crate::PackError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// Directory holding the mod's own content.
pub const NEW_COMMANDERS_DIR: &str = "new_commanders";

/// Directory holding shared content used by the mod.
pub const GENERIC_DIR: &str = "generic";

/// Validated on-disk layout of the mod.
///
/// Both required directories existed when the layout was resolved. The
/// directories are kept in processing order: `new_commanders`, then
/// `generic`.
///
/// # Examples
///
/// ```no_run
/// use ncpack_core::ModLayout;
///
/// let layout = ModLayout::from_inputs(&["/mods/new_commanders"])?;
/// assert_eq!(layout.root(), std::path::Path::new("/mods"));
/// # Ok::<(), ncpack_core::PackError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModLayout {
    root: PathBuf,
    directories: [PathBuf; 2],
}

impl ModLayout {
    /// Resolves the layout from the raw command-line inputs.
    ///
    /// Exactly one input is accepted. Its containing directory is the root.
    ///
    /// # Errors
    ///
    /// - [`PackError::NoInput`] when `inputs` is empty
    /// - [`PackError::TooManyArguments`] when more than one input is given
    /// - [`PackError::RootNotFound`] when the containing directory is missing
    /// - [`PackError::MissingDirectories`] when a mod directory is missing
    pub fn from_inputs<P: AsRef<Path>>(inputs: &[P]) -> Result<Self> {
        match inputs {
            [] => Err(PackError::NoInput),
            [input] => Self::from_input(input.as_ref()),
            _ => Err(PackError::TooManyArguments {
                count: inputs.len(),
            }),
        }
    }

    /// Resolves the layout from a single dropped path.
    ///
    /// The path is made absolute against the current directory first, so a
    /// bare relative name such as `new_commanders` resolves to the current
    /// directory as root.
    pub fn from_input(input: &Path) -> Result<Self> {
        let absolute = std::path::absolute(input).map_err(|_| PackError::RootNotFound {
            path: input.to_path_buf(),
        })?;

        let root = absolute
            .parent()
            .ok_or_else(|| PackError::RootNotFound {
                path: absolute.clone(),
            })?
            .to_path_buf();

        Self::from_root(root)
    }

    /// Resolves the layout from an already known root directory.
    pub fn from_root(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(PackError::RootNotFound { path: root });
        }

        let directories = [root.join(NEW_COMMANDERS_DIR), root.join(GENERIC_DIR)];
        if !directories.iter().all(|dir| dir.is_dir()) {
            return Err(PackError::MissingDirectories {
                paths: directories.to_vec(),
            });
        }

        Ok(Self { root, directories })
    }

    /// The root directory containing both mod directories.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The mod directories in processing order.
    #[must_use]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// `<root>/new_commanders`
    #[must_use]
    pub fn new_commanders(&self) -> &Path {
        &self.directories[0]
    }

    /// `<root>/generic`
    #[must_use]
    pub fn generic(&self) -> &Path {
        &self.directories[1]
    }
}
