//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use ncpack_core::PackPlan;
use ncpack_core::PackReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct PackOutput {
    output_path: String,
    files_added: usize,
    bytes_written: u64,
    bytes_compressed: u64,
    compression_ratio: f64,
    files_excluded: usize,
    files_rejected: usize,
    links_skipped: usize,
    entries: Vec<String>,
    duration_ms: u128,
}

impl PackOutput {
    fn new(output_path: &Path, report: &PackReport) -> Self {
        Self {
            output_path: output_path.display().to_string(),
            files_added: report.files_added,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            files_excluded: report.files_excluded,
            files_rejected: report.files_rejected,
            links_skipped: report.links_skipped,
            entries: report.entries.clone(),
            duration_ms: report.duration.as_millis(),
        }
    }
}

#[derive(Serialize)]
struct PlanEntryOutput {
    name: String,
    source: String,
    size: u64,
}

#[derive(Serialize)]
struct PlanOutput {
    archive_path: String,
    total_files: usize,
    total_bytes: u64,
    files_excluded: usize,
    files_rejected: usize,
    links_skipped: usize,
    entries: Vec<PlanEntryOutput>,
}

impl PlanOutput {
    fn new(plan: &PackPlan) -> Self {
        Self {
            archive_path: plan.archive_path.display().to_string(),
            total_files: plan.total_files(),
            total_bytes: plan.total_bytes(),
            files_excluded: plan.files_excluded(),
            files_rejected: plan.files_rejected(),
            links_skipped: plan.links_skipped(),
            entries: plan
                .entries()
                .map(|entry| PlanEntryOutput {
                    name: entry.name.clone(),
                    source: entry.source.display().to_string(),
                    size: entry.size,
                })
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        Self::output(&JsonOutput::success(
            "pack",
            PackOutput::new(output_path, report),
        ))
    }

    fn format_plan(&self, plan: &PackPlan) -> Result<()> {
        Self::output(&JsonOutput::success("plan", PlanOutput::new(plan)))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("pack", format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        // stdout carries a single document; warnings go to stderr
        let _ = writeln!(io::stderr(), "WARNING: {message}");
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_pack_output_structure() {
        let report = PackReport {
            files_added: 2,
            bytes_written: 100,
            bytes_compressed: 50,
            entries: vec!["new_commanders/a.txt".to_string(), "generic/b.txt".to_string()],
            duration: Duration::from_millis(12),
            ..PackReport::default()
        };

        let output = JsonOutput::success(
            "pack",
            PackOutput::new(&PathBuf::from("/mods/new-commanders-v1-J.zip"), &report),
        );
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["operation"], "pack");
        assert_eq!(json["data"]["files_added"], 2);
        assert_eq!(json["data"]["entries"][1], "generic/b.txt");
        assert_eq!(json["data"]["duration_ms"], 12);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_output_structure() {
        let output = JsonOutput::error("pack", "boom");
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }
}
