//! Progress display for the packaging run.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use ncpack_core::ProgressCallback;
use std::path::Path;

/// Prints every archived file and, on a TTY, keeps a progress bar below.
///
/// The bar length is taken from the first `on_entry_start` call, so the
/// progress can be created before the plan exists.
pub struct CliProgress {
    bar: Option<ProgressBar>,
    term: Term,
    quiet: bool,
    bytes_written: u64,
}

impl CliProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let bar = (!quiet && Self::should_show()).then(|| {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} files ({elapsed})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓░"),
            );
            bar.set_message("Packing");
            bar
        });

        Self {
            bar,
            term: Term::stdout(),
            quiet,
            bytes_written: 0,
        }
    }

    /// Checks if we should show a bar (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    fn print(&self, line: &str) {
        match &self.bar {
            Some(bar) => bar.println(line),
            None => {
                let _ = self.term.write_line(line);
            }
        }
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _path: &Path, total: usize, _current: usize) {
        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
        }
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
    }

    fn on_entry_complete(&mut self, path: &Path) {
        if self.quiet {
            return;
        }
        self.print(&path.display().to_string());
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn on_complete(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_callback_counts_bytes() {
        let mut progress = CliProgress::new(true);

        progress.on_entry_start(Path::new("/mods/generic/a.txt"), 2, 1);
        progress.on_bytes_written(1024);
        progress.on_bytes_written(512);
        progress.on_entry_complete(Path::new("/mods/generic/a.txt"));
        progress.on_complete();

        assert_eq!(progress.bytes_written, 1536);
    }

    #[test]
    fn test_quiet_has_no_bar() {
        let progress = CliProgress::new(true);
        assert!(progress.bar.is_none());
    }
}
