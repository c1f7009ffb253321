//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use ncpack_core::PackPlan;
use ncpack_core::PackReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (count, c) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }

        result.chars().rev().collect()
    }

    fn success_line(output_path: &Path) -> String {
        let file_name = output_path.file_name().map_or_else(
            || output_path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        format!("Successfully created {file_name}!")
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.line("\n");
        self.line(&Self::success_line(output_path));

        if self.verbose {
            self.line(&format!("  Archive:          {}", output_path.display()));
            self.line(&format!(
                "  Files added:      {}",
                Self::format_number(report.files_added)
            ));
            self.line(&format!(
                "  Total size:       {}",
                Self::format_size(report.bytes_written)
            ));
            self.line(&format!(
                "  Compressed size:  {}",
                Self::format_size(report.bytes_compressed)
            ));
            if report.bytes_compressed > 0 {
                self.line(&format!(
                    "  Compression:      {:.1}%",
                    report.compression_percentage()
                ));
            }
            self.line(&format!("  Excluded:         {}", report.files_excluded));
            self.line(&format!("  Rejected (.psd):  {}", report.files_rejected));
            if report.links_skipped > 0 {
                self.line(&format!("  Links skipped:    {}", report.links_skipped));
            }
            self.line(&format!("  Duration:         {:?}", report.duration));
        }

        Ok(())
    }

    fn format_plan(&self, plan: &PackPlan) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for dir in &plan.directories {
            if self.verbose {
                self.line(&format!("{}:", dir.directory.display()));
            }
            for entry in &dir.entries {
                if self.verbose {
                    self.line(&format!(
                        "  {:>10}  {}",
                        Self::format_size(entry.size),
                        entry.name
                    ));
                } else {
                    self.line(&entry.name);
                }
            }
        }

        self.line("");
        self.line(&format!(
            "Total: {} files, {}",
            Self::format_number(plan.total_files()),
            Self::format_size(plan.total_bytes())
        ));
        self.line(&format!(
            "Skipped: {} excluded, {} .psd",
            Self::format_number(plan.files_excluded()),
            Self::format_number(plan.files_rejected())
        ));
        self.line(&format!("Would create: {}", plan.archive_path.display()));

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            self.line(&format!("{} {error:#}", style("ERROR:").red().bold()));
        } else {
            self.line(&format!("ERROR: {error:#}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            self.line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            self.line(&format!("WARNING: {message}"));
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
