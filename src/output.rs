//! Console output formatting.
//!
//! Each concern has a `format_*` function returning display lines and a
//! `print_*` wrapper that writes them to stdout. The format functions do no
//! I/O of their own, so tests can assert on exact output.

use crate::plan::{PlanEntry, RenameOutcome};
use crate::process::{RunEvent, RunReport};
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format one progress event as display lines.
///
/// ```text
/// [2/5] gear.png
///     48x48 @2x
///     Proposed: ic_gear_wheel
/// ```
pub fn format_run_event(event: &RunEvent) -> Vec<String> {
    match event {
        RunEvent::Analyzing {
            index,
            total,
            filename,
        } => {
            vec![format!("[{index}/{total}] {filename}")]
        }
        RunEvent::Described {
            stem,
            dimensions,
            density,
            fallback,
            ..
        } => {
            let mut lines = Vec::new();
            if let Some((w, h)) = dimensions {
                let suffix = density.map(|d| d.suffix()).unwrap_or_default();
                if suffix.is_empty() {
                    lines.push(format!("    {w}x{h}"));
                } else {
                    lines.push(format!("    {w}x{h} {suffix}"));
                }
            }
            lines.push(format!("    Proposed: {stem}"));
            if let Some(reason) = fallback {
                lines.push(format!("    Fallback: {reason}"));
            }
            lines
        }
        RunEvent::Applied(report) => {
            let from = file_name(&report.entry.original_path);
            let to = &report.entry.proposed_name;
            let line = match &report.outcome {
                RenameOutcome::Renamed => format!("{from} \u{2192} {to}"),
                RenameOutcome::SkippedExists => {
                    format!("{from} \u{2192} {to} (target exists, skipped)")
                }
                RenameOutcome::Failed(reason) => {
                    format!("{from} \u{2192} {to} FAILED: {reason}")
                }
            };
            vec![line]
        }
    }
}

/// Print one progress event to stdout.
pub fn print_run_event(event: &RunEvent) {
    for line in format_run_event(event) {
        println!("{}", line);
    }
}

/// Format the preview listing for a plan that will not be executed.
pub fn format_plan_preview(entries: &[PlanEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No image files to rename.".to_string()];
    }
    let mut lines = vec![format!("Planned renames ({} files, not executed):", entries.len())];
    for entry in entries {
        lines.push(format!(
            "    {} \u{2192} {}",
            file_name(&entry.original_path),
            entry.proposed_name
        ));
    }
    lines
}

/// Format the end-of-run summary.
pub fn format_run_summary(report: &RunReport) -> Vec<String> {
    if report.preview {
        return format_plan_preview(&report.planned);
    }
    if report.planned.is_empty() {
        return vec!["No image files to rename.".to_string()];
    }

    let renamed = count(report, |o| matches!(o, RenameOutcome::Renamed));
    let skipped = count(report, |o| matches!(o, RenameOutcome::SkippedExists));
    let failed = count(report, |o| matches!(o, RenameOutcome::Failed(_)));

    let mut line = format!("Renamed {renamed} of {} files", report.planned.len());
    if skipped > 0 {
        line.push_str(&format!(", {skipped} skipped"));
    }
    if failed > 0 {
        line.push_str(&format!(", {failed} failed"));
    }
    vec![line]
}

/// Print the end-of-run summary to stdout.
pub fn print_run_summary(report: &RunReport) {
    for line in format_run_summary(report) {
        println!("{}", line);
    }
}

fn count(report: &RunReport, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
    report.applied.iter().filter(|r| pred(&r.outcome)).count()
}
