//! Batch orchestration: scan → describe → classify → plan → apply.
//!
//! One run makes two passes. The planning pass is read-only: each eligible
//! file has its dimensions read, its description fetched, and a unique target
//! name allocated. The execution pass applies the plan (skipped entirely in
//! preview mode). Per-file problems such as an unreadable image or a provider
//! failure downgrade that one file to the fallback stem and never abort the
//! batch; the only whole-run abort is a missing folder, surfaced before
//! planning.
//!
//! Progress is reported through an optional channel so the caller can print
//! while the (slow, rate-limited) provider calls happen.

use crate::config::Config;
use crate::density::Density;
use crate::naming::propose_stem;
use crate::plan::{self, EntryReport, PlanEntry, ProposedName};
use crate::provider::{Describe, Description};
use crate::scan::{self, ScanError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Options for one batch run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub folder: PathBuf,
    /// Walk subdirectories; renames still happen within each file's parent.
    pub recursive: bool,
    /// Plan and report without touching the filesystem.
    pub preview: bool,
}

/// Progress events emitted during a run.
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// A file is about to be analyzed.
    Analyzing {
        index: usize,
        total: usize,
        filename: String,
    },
    /// A file's name has been proposed (before collision resolution).
    Described {
        filename: String,
        stem: String,
        dimensions: Option<(u32, u32)>,
        density: Option<Density>,
        /// Why the file fell back to the fallback stem, when it did.
        fallback: Option<String>,
    },
    /// One plan entry was executed.
    Applied(EntryReport),
}

/// Everything a run decided and did, in batch order.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub planned: Vec<PlanEntry>,
    /// Empty in preview mode.
    pub applied: Vec<EntryReport>,
    pub preview: bool,
}

fn emit(events: &Option<Sender<RunEvent>>, event: RunEvent) {
    if let Some(tx) = events {
        let _ = tx.send(event);
    }
}

/// Runs one batch against `options.folder`.
pub fn run(
    options: &RunOptions,
    config: &Config,
    provider: &dyn Describe,
    events: Option<Sender<RunEvent>>,
) -> Result<RunReport, RunError> {
    let files = scan::collect_images(&options.folder, options.recursive)?;
    let total = files.len();
    let delay = Duration::from_millis(config.provider.delay_ms);
    let prefix = &config.naming.prefix;

    let mut index = 0usize;
    let mut provider_calls = 0usize;

    let planned = plan::plan(&files, |path| {
        index += 1;
        let filename = display_name(path);
        emit(
            &events,
            RunEvent::Analyzing {
                index,
                total,
                filename: filename.clone(),
            },
        );

        let (dimensions, density, mut fallback) = match read_dimensions(path) {
            Ok((w, h, d)) => (Some((w, h)), Some(d), None),
            Err(reason) => (None, None, Some(reason)),
        };

        // An unreadable image never reaches the provider; everything else
        // gets exactly one describe call, rate-limited between calls.
        let stem = if fallback.is_none() {
            match describe_file(path, provider, delay, &mut provider_calls) {
                Ok(description) => propose_stem(&description, prefix),
                Err(reason) => {
                    fallback = Some(reason);
                    propose_stem(&Description::default(), prefix)
                }
            }
        } else {
            propose_stem(&Description::default(), prefix)
        };

        let density = density.filter(|_| provider.appends_density());
        emit(
            &events,
            RunEvent::Described {
                filename,
                stem: stem.clone(),
                dimensions,
                density,
                fallback,
            },
        );

        ProposedName { stem, density }
    });

    let applied = if options.preview {
        Vec::new()
    } else {
        let reports = plan::apply(planned.clone());
        for report in &reports {
            emit(&events, RunEvent::Applied(report.clone()));
        }
        reports
    };

    Ok(RunReport {
        planned,
        applied,
        preview: options.preview,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads dimensions from the image header and classifies them.
///
/// Both failure modes (undecodable header, zero dimensions) collapse to one
/// reason string: either way the image is broken and gets the fallback
/// treatment without a provider call.
fn read_dimensions(path: &Path) -> Result<(u32, u32, Density), String> {
    let (width, height) = image::image_dimensions(path).map_err(|e| e.to_string())?;
    let density = Density::from_dimensions(width, height).map_err(|e| e.to_string())?;
    Ok((width, height, density))
}

fn describe_file(
    path: &Path,
    provider: &dyn Describe,
    delay: Duration,
    provider_calls: &mut usize,
) -> Result<Description, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    if *provider_calls > 0 && !delay.is_zero() {
        thread::sleep(delay);
    }
    *provider_calls += 1;
    provider.describe(path, &bytes).map_err(|e| e.to_string())
}
