//! Packaging reports and progress callbacks.

use std::path::Path;
use std::time::Duration;

/// Report of a completed packaging run.
///
/// # Examples
///
/// ```
/// use ncpack_core::PackReport;
///
/// let mut report = PackReport::default();
/// report.bytes_written = 1000;
/// report.bytes_compressed = 250;
///
/// assert_eq!(report.compression_ratio(), 4.0);
/// assert_eq!(report.compression_percentage(), 75.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Number of files stored in the archive.
    pub files_added: usize,

    /// Total source bytes streamed into the archive (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive.
    pub bytes_compressed: u64,

    /// Entries skipped by the exclusion paths; an excluded directory counts
    /// once.
    pub files_excluded: usize,

    /// Files skipped by the extension rule.
    pub files_rejected: usize,

    /// Symlinks left out because they do not resolve to a regular file.
    pub links_skipped: usize,

    /// Entry names in the order they were written.
    pub entries: Vec<String>,

    /// Duration of the write phase.
    pub duration: Duration,
}

impl PackReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total files the filters dropped.
    #[must_use]
    pub fn files_skipped(&self) -> usize {
        self.files_excluded + self.files_rejected
    }

    /// Returns the compression ratio (uncompressed / compressed).
    ///
    /// Returns 0.0 if either size is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }

    /// Returns the share of space saved, in percent.
    ///
    /// Returns 0.0 if nothing was written, and 0.0 when the archive is larger
    /// than its contents (zip overhead on tiny inputs).
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 || self.bytes_compressed >= self.bytes_written {
            return 0.0;
        }
        (1.0 - self.bytes_compressed as f64 / self.bytes_written as f64) * 100.0
    }
}

/// Callback trait for progress reporting while the archive is written.
///
/// # Examples
///
/// ```
/// use ncpack_core::ProgressCallback;
/// use std::path::Path;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, path: &Path) {
///         println!("{}", path.display());
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before a file is streamed into the archive.
    ///
    /// * `path` - Source path of the file
    /// * `total` - Total number of files to write
    /// * `current` - Current file number (1-indexed)
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk copied from the source file.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called once the file's entry has been fully written.
    ///
    /// * `path` - Source path of the file
    fn on_entry_complete(&mut self, path: &Path);

    /// Called when the archive has been finalized.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
