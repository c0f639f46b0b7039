//! # icon-namer
//!
//! Batch-renames icon image files from AI-generated descriptions. Each image
//! in a folder is sent to a description backend, the returned text is reduced
//! to a filesystem-safe stem, and the pixel dimensions decide the
//! `@2x`/`@3x` density suffix:
//!
//! ```text
//! IMG_0231.png (48x48, "a gear wheel on white")  →  ic_gear_wheel@2x.png
//! ```
//!
//! # Architecture: Plan, Then Apply
//!
//! A batch run makes two passes over a static directory snapshot:
//!
//! ```text
//! 1. Plan    scan folder → describe each image → allocate unique names
//! 2. Apply   execute the renames, skipping targets that already exist
//! ```
//!
//! Planning is read-only, so preview mode is just a run that stops after
//! stage 1. Apply never overwrites: a pre-existing target skips its entry,
//! which also makes interrupted batches safe to re-run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Collects eligible image files, flat or recursive |
//! | [`density`] | Classifies pixel dimensions into density tiers |
//! | [`provider`] | Description backends behind the [`provider::Describe`] trait |
//! | [`sanitize`] | Reduces free-form text to a safe filename stem |
//! | [`naming`] | Composes the proposed stem from caption + tags |
//! | [`plan`] | Collision-free rename planning and execution |
//! | [`process`] | The orchestrator tying the stages together |
//! | [`config`] | `icon-namer.toml` loading and validation |
//! | [`output`] | Console formatting for progress and reports |
//!
//! # Design Decisions
//!
//! ## Every File Gets a Name
//!
//! Description backends are flaky by nature: rate limits, junk responses,
//! timeouts. None of that may cost a batch: any per-file failure downgrades
//! that file to the `unknown` stem and the run continues. The only hard stop
//! is a folder that does not exist.
//!
//! ## One Batch Loop, Many Backends
//!
//! The orchestrator is written once against the [`provider::Describe`]
//! trait. Backends differ only in wire format (and in whether their names
//! carry a density suffix), never in batch behavior.
//!
//! ## Sequential on Purpose
//!
//! Description calls run one at a time with a configurable pause between
//! them. Hosted APIs rate-limit aggressively and icon batches are small;
//! parallelism would add failure modes without saving meaningful time.

pub mod config;
pub mod density;
pub mod naming;
pub mod output;
pub mod plan;
pub mod process;
pub mod provider;
pub mod sanitize;
pub mod scan;
