//! Rename planning and execution.
//!
//! A batch run has two passes over a static listing snapshot:
//!
//! 1. **Plan** — read-only. Every eligible file gets a [`PlanEntry`] with a
//!    collision-free target name. Collisions are resolved by the
//!    [`NameAllocator`], which counts claims per proposed stem.
//! 2. **Apply** — mutating. Entries are renamed in plan order. A pre-existing
//!    target is skipped (never overwritten) and an I/O failure is confined to
//!    its entry; both show up in the per-entry report.
//!
//! There is no rollback. A partially applied batch is safe to re-run: already
//! renamed files keep their names and their targets are skipped.

use crate::density::Density;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions eligible for renaming, matched case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Proposed naming for one file, as produced by the orchestrator's callback.
#[derive(Debug, Clone)]
pub struct ProposedName {
    /// Stem before collision resolution, prefix included.
    pub stem: String,
    /// Density suffix to append, when the provider variant uses one.
    pub density: Option<Density>,
}

/// One scheduled rename: where the file is, what it becomes.
#[derive(Debug, Clone, Serialize)]
pub struct PlanEntry {
    pub original_path: PathBuf,
    /// Final filename, density suffix and extension included.
    pub proposed_name: String,
    pub final_path: PathBuf,
}

/// Outcome of applying one plan entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenameOutcome {
    Renamed,
    /// Target already existed; the entry was skipped and nothing overwritten.
    SkippedExists,
    /// The rename itself failed; the batch continued.
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub entry: PlanEntry,
    pub outcome: RenameOutcome,
}

/// Per-stem claim counter for one batch run.
///
/// The counter is keyed on the original proposed stem, so repeated collisions
/// number from the same base (`icon`, `icon_1`, `icon_2` — never `icon_1_1`).
/// Each planner owns its allocator; independent batches cannot contaminate
/// each other.
#[derive(Debug, Default)]
pub struct NameAllocator {
    counters: HashMap<String, u32>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a stem, returning it unmodified on first claim and suffixed
    /// with `_<n>` on each repeat.
    pub fn allocate(&mut self, stem: &str) -> String {
        match self.counters.get_mut(stem) {
            Some(count) => {
                *count += 1;
                format!("{stem}_{count}")
            }
            None => {
                self.counters.insert(stem.to_string(), 0);
                stem.to_string()
            }
        }
    }
}

/// Returns true for files the planner will consider.
pub fn is_eligible(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Builds a conflict-free rename plan for `files`, in input order.
///
/// `name_for` is called exactly once per eligible file. Ineligible files get
/// no entry (the scan layer filters them already; this is the planner's own
/// guarantee). Renames stay within each file's parent directory.
pub fn plan<F>(files: &[PathBuf], mut name_for: F) -> Vec<PlanEntry>
where
    F: FnMut(&Path) -> ProposedName,
{
    let mut allocator = NameAllocator::new();
    let mut entries = Vec::with_capacity(files.len());

    for path in files {
        if !is_eligible(path) {
            continue;
        }
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let proposed = name_for(path);
        let stem = allocator.allocate(&proposed.stem);
        let suffix = proposed.density.map(Density::suffix).unwrap_or_default();
        let filename = format!("{stem}{suffix}.{extension}");

        let final_path = path
            .parent()
            .map(|parent| parent.join(&filename))
            .unwrap_or_else(|| PathBuf::from(&filename));

        entries.push(PlanEntry {
            original_path: path.clone(),
            proposed_name: filename,
            final_path,
        });
    }

    entries
}

/// Executes a plan, renaming in entry order.
///
/// Every entry produces a report: renamed, skipped because the target
/// already existed, or failed with the I/O error message. A failure never
/// stops the remaining entries.
pub fn apply(entries: Vec<PlanEntry>) -> Vec<EntryReport> {
    entries
        .into_iter()
        .map(|entry| {
            let outcome = if entry.final_path.exists() {
                RenameOutcome::SkippedExists
            } else {
                match fs::rename(&entry.original_path, &entry.final_path) {
                    Ok(()) => RenameOutcome::Renamed,
                    Err(err) => RenameOutcome::Failed(err.to_string()),
                }
            };
            EntryReport { entry, outcome }
        })
        .collect()
}
