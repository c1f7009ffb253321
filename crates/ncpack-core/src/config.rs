//! Configuration for a packaging run.

use crate::creation::filters::ExclusionSet;
use crate::creation::filters::MatchMode;
use crate::layout::ModLayout;
use std::path::PathBuf;

/// Prefix of every produced archive name.
pub const ARCHIVE_STEM: &str = "new-commanders";

/// Immutable configuration for one packaging run.
///
/// Built once after the layout is resolved and the operator has supplied the
/// author and version; read-only afterwards.
///
/// # Examples
///
/// ```no_run
/// use ncpack_core::ModLayout;
/// use ncpack_core::PackConfig;
///
/// let layout = ModLayout::from_root("/mods")?;
/// let config = PackConfig::new(layout, "John", "1.03");
/// assert_eq!(config.archive_file_name(), "new-commanders-v1.03-John.zip");
/// # Ok::<(), ncpack_core::PackError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PackConfig {
    layout: ModLayout,
    author: String,
    version: String,
    match_mode: MatchMode,
}

impl PackConfig {
    /// Creates a configuration with literal exclusion matching.
    ///
    /// `author` and `version` are taken verbatim; empty strings are allowed.
    #[must_use]
    pub fn new(layout: ModLayout, author: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            layout,
            author: author.into(),
            version: version.into(),
            match_mode: MatchMode::default(),
        }
    }

    /// Sets how exclusion paths are matched against candidate files.
    #[must_use]
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// The resolved mod layout.
    #[must_use]
    pub fn layout(&self) -> &ModLayout {
        &self.layout
    }

    /// Author name as entered.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Version string as entered.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Exclusion matching mode.
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// File name of the archive: `new-commanders-v{VERSION}-{AUTHOR}.zip`.
    #[must_use]
    pub fn archive_file_name(&self) -> String {
        format!("{ARCHIVE_STEM}-v{}-{}.zip", self.version, self.author)
    }

    /// Full path of the archive, placed in the root directory.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.layout.root().join(self.archive_file_name())
    }

    /// Exclusion set for this layout and match mode.
    #[must_use]
    pub fn exclusions(&self) -> ExclusionSet {
        ExclusionSet::for_layout(&self.layout, self.match_mode)
    }
}
