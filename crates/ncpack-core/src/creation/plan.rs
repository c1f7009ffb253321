//! Pack planning.
//!
//! The plan is the full, ordered list of archive entries computed before
//! anything is written. The zip writer consumes it as-is; a dry run only
//! prints it.

use crate::Result;
use crate::config::PackConfig;
use crate::creation::filters;
use crate::creation::walker::collect_candidates;
use std::path::PathBuf;

/// One source file and the name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    /// Full filesystem path of the source file.
    pub source: PathBuf,

    /// Root-relative entry name with `/` separators.
    pub name: String,

    /// Size of the source file when the plan was made.
    pub size: u64,
}

/// Planned entries contributed by one mod directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlan {
    /// The mod directory that was walked.
    pub directory: PathBuf,

    /// Entries in write order.
    pub entries: Vec<PlannedEntry>,

    /// Entries skipped by the exclusion paths.
    pub excluded: usize,

    /// Files skipped by the extension rule.
    pub rejected: usize,

    /// Symlinks that do not resolve to a regular file.
    pub links_skipped: usize,
}

/// Complete packaging plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackPlan {
    /// Where the archive will be written.
    pub archive_path: PathBuf,

    /// Per-directory plans in processing order.
    pub directories: Vec<DirectoryPlan>,
}

impl PackPlan {
    /// All entries in write order.
    pub fn entries(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.directories.iter().flat_map(|dir| dir.entries.iter())
    }

    /// Number of files that will be packaged.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.directories.iter().map(|dir| dir.entries.len()).sum()
    }

    /// Sum of source file sizes.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.entries().map(|entry| entry.size).sum()
    }

    /// Entries skipped by the exclusion paths across all directories.
    #[must_use]
    pub fn files_excluded(&self) -> usize {
        self.directories.iter().map(|dir| dir.excluded).sum()
    }

    /// Files skipped by the extension rule across all directories.
    #[must_use]
    pub fn files_rejected(&self) -> usize {
        self.directories.iter().map(|dir| dir.rejected).sum()
    }

    /// Symlinks left out across all directories.
    #[must_use]
    pub fn links_skipped(&self) -> usize {
        self.directories.iter().map(|dir| dir.links_skipped).sum()
    }
}

/// Walks the mod directories and builds the ordered entry list.
///
/// Directories are processed in layout order (`new_commanders`, then
/// `generic`); within each, entries are ordered by source path length. The
/// ordering does not span directories.
///
/// # Examples
///
/// ```no_run
/// use ncpack_core::ModLayout;
/// use ncpack_core::PackConfig;
/// use ncpack_core::creation::plan::plan_pack;
///
/// let config = PackConfig::new(ModLayout::from_root("/mods")?, "John", "1.0");
/// let plan = plan_pack(&config)?;
/// for entry in plan.entries() {
///     println!("{}", entry.name);
/// }
/// # Ok::<(), ncpack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns an error if a directory cannot be walked, a file's metadata cannot
/// be read, or an entry name cannot be derived.
pub fn plan_pack(config: &PackConfig) -> Result<PackPlan> {
    let exclusions = config.exclusions();
    let root = config.layout().root();
    let mut directories = Vec::with_capacity(config.layout().directories().len());

    for dir in config.layout().directories() {
        let candidates = collect_candidates(dir, &exclusions)?;

        let mut entries = Vec::with_capacity(candidates.files.len());
        for source in candidates.files {
            let name = filters::entry_name(&source, root)?;
            let size = std::fs::metadata(&source)?.len();
            entries.push(PlannedEntry { source, name, size });
        }

        directories.push(DirectoryPlan {
            directory: dir.clone(),
            entries,
            excluded: candidates.excluded,
            rejected: candidates.rejected,
            links_skipped: candidates.links_skipped,
        });
    }

    Ok(PackPlan {
        archive_path: config.archive_path(),
        directories,
    })
}
