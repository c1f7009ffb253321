//! Path filtering logic for packaging.
//!
//! Two independent rules decide whether a candidate file is packaged:
//!
//! - **Exclusion paths**: a fixed list of build caches, VCS metadata and
//!   previous build outputs under the mod directories. A file whose full path
//!   starts with one of them is skipped.
//! - **Extension rule**: Photoshop sources (`.psd`) are never shipped.
//!
//! Exclusion matching is a plain string prefix test by default, so
//! `generic/bin` also hides `generic/binaries`. [`MatchMode::Component`]
//! restricts matches to whole path components.

use crate::PackError;
use crate::Result;
use crate::layout::ModLayout;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Extension of files that are never packaged. Matched case-sensitively.
pub const REJECTED_EXTENSION: &str = ".psd";

/// Paths under `generic/` that are never packaged.
pub const GENERIC_EXCLUSIONS: [&str; 4] = ["bin", "icons", "scar_data", ".git"];

/// Paths under `new_commanders/` that are never packaged.
pub const NEW_COMMANDERS_EXCLUSIONS: [&str; 3] = [
    ".git",
    "new_commanders.sga",
    "new_commanders Intermediate Cache",
];

/// How exclusion paths are compared against candidate files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Raw string prefix match on the full path.
    #[default]
    Literal,

    /// Prefix match on whole path components.
    Component,
}

/// Outcome of running both filter rules on a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The file is packaged.
    Include,

    /// The file lies under an exclusion path.
    Excluded,

    /// The file has the rejected extension.
    RejectedExtension,
}

/// Absolute paths whose contents are never packaged.
///
/// # Examples
///
/// ```
/// use ncpack_core::creation::filters::ExclusionSet;
/// use ncpack_core::creation::filters::MatchMode;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// let set = ExclusionSet::new(vec![PathBuf::from("/mods/generic/bin")], MatchMode::Literal);
/// assert!(set.is_excluded(Path::new("/mods/generic/bin/shader.fx")));
/// assert!(set.is_excluded(Path::new("/mods/generic/binaries/a.txt")));
///
/// let strict = ExclusionSet::new(vec![PathBuf::from("/mods/generic/bin")], MatchMode::Component);
/// assert!(!strict.is_excluded(Path::new("/mods/generic/binaries/a.txt")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    paths: Vec<PathBuf>,
    mode: MatchMode,
}

impl ExclusionSet {
    /// Creates a set from explicit paths.
    #[must_use]
    pub fn new(paths: Vec<PathBuf>, mode: MatchMode) -> Self {
        Self { paths, mode }
    }

    /// Builds the fixed exclusion list for a mod layout.
    #[must_use]
    pub fn for_layout(layout: &ModLayout, mode: MatchMode) -> Self {
        let generic = GENERIC_EXCLUSIONS
            .iter()
            .map(|name| layout.generic().join(name));
        let new_commanders = NEW_COMMANDERS_EXCLUSIONS
            .iter()
            .map(|name| layout.new_commanders().join(name));

        Self::new(generic.chain(new_commanders).collect(), mode)
    }

    /// Excluded paths.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Matching mode.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns `true` if `path` lies under any exclusion path.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.paths.iter().any(|excluded| match self.mode {
            MatchMode::Literal => has_literal_prefix(path, excluded),
            MatchMode::Component => path.starts_with(excluded),
        })
    }

    /// Applies both rules to a candidate file.
    ///
    /// The exclusion rule is reported first when both apply.
    #[must_use]
    pub fn classify(&self, path: &Path) -> Verdict {
        if self.is_excluded(path) {
            Verdict::Excluded
        } else if has_rejected_extension(path) {
            Verdict::RejectedExtension
        } else {
            Verdict::Include
        }
    }
}

/// Returns `true` if the raw path string of `path` starts with that of
/// `prefix`.
///
/// # Examples
///
/// ```
/// use ncpack_core::creation::filters::has_literal_prefix;
/// use std::path::Path;
///
/// assert!(has_literal_prefix(Path::new("/a/bin/x"), Path::new("/a/bin")));
/// assert!(has_literal_prefix(Path::new("/a/binx"), Path::new("/a/bin")));
/// assert!(!has_literal_prefix(Path::new("/a/bi"), Path::new("/a/bin")));
/// ```
#[must_use]
pub fn has_literal_prefix(path: &Path, prefix: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .starts_with(prefix.as_os_str().as_encoded_bytes())
}

/// Returns `true` if the file name ends in `.psd`.
///
/// The extension is the suffix from the last `.` of the file name, so a file
/// literally named `.psd` is rejected too. Comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use ncpack_core::creation::filters::has_rejected_extension;
/// use std::path::Path;
///
/// assert!(has_rejected_extension(Path::new("art/icon.psd")));
/// assert!(!has_rejected_extension(Path::new("art/icon.PSD")));
/// assert!(!has_rejected_extension(Path::new("art/icon.psd.bak")));
/// ```
#[must_use]
pub fn has_rejected_extension(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        name.as_encoded_bytes()
            .ends_with(REJECTED_EXTENSION.as_bytes())
    })
}

/// Computes the archive entry name for a source file.
///
/// The root prefix is removed and the remaining components are joined with
/// `/`, the zip separator, regardless of platform.
///
/// # Errors
///
/// Returns [`PackError::InvalidEntryName`] if the source is not under
/// `root`, resolves to an empty name, or has a component that is not valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// use ncpack_core::creation::filters::entry_name;
/// use std::path::Path;
///
/// let name = entry_name(Path::new("/mods/generic/art/a.rgt"), Path::new("/mods"))?;
/// assert_eq!(name, "generic/art/a.rgt");
/// # Ok::<(), ncpack_core::PackError>(())
/// ```
pub fn entry_name(source: &Path, root: &Path) -> Result<String> {
    let invalid = |reason: &str| PackError::InvalidEntryName {
        path: source.to_path_buf(),
        reason: reason.to_string(),
    };

    let relative = source
        .strip_prefix(root)
        .map_err(|_| invalid("not under the root directory"))?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                parts.push(part.to_str().ok_or_else(|| invalid("not valid UTF-8"))?);
            }
            Component::CurDir => {}
            _ => return Err(invalid("unexpected path component")),
        }
    }

    if parts.is_empty() {
        return Err(invalid("empty entry name"));
    }

    Ok(parts.join("/"))
}
