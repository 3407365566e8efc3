//! Per-language sync driver.
//!
//! For each configured target, in manifest order: read the file, locate
//! the language's dictionary literal, diff its catalog keys against the
//! base, splice, write the whole file back, and record an outcome line.
//! Any per-language failure is caught at the language boundary and
//! becomes a report line; the run always continues to the next language.
//!
//! Targets are processed strictly sequentially and each one re-reads its
//! file, so two languages sharing one file always splice against the
//! other's already-written edits rather than stale offsets.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info, warn};

use langsync_core::{
    Registry, contains_entry, diff_keys, insert_entries, locate_literal, remove_entries,
};

use crate::error::{Result, SyncError};
use crate::manifest::{Manifest, Target};
use crate::report::{LanguageOutcome, LanguageStatus, RunReport};

/// Arguments shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct SyncArgs {
    /// Path to the sync manifest.
    #[arg(long, default_value = "langsync.json")]
    pub manifest: PathBuf,
}

/// What a run does to drifted targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Insert `[TODO]` placeholders for keys missing from a secondary.
    Generate,
    /// Remove entries whose keys no longer exist in the base.
    Cleanup,
    /// Report drift counts without writing.
    Status,
}

/// Run the generate mode end to end.
pub fn run_generate(args: SyncArgs) -> Result<()> {
    run_mode(args, Mode::Generate)
}

/// Run the cleanup mode end to end.
pub fn run_cleanup(args: SyncArgs) -> Result<()> {
    run_mode(args, Mode::Cleanup)
}

/// Run the status mode end to end.
pub fn run_status(args: SyncArgs) -> Result<()> {
    run_mode(args, Mode::Status)
}

fn run_mode(args: SyncArgs, mode: Mode) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let registry = manifest.load_registry()?;
    let report = sync_all(&manifest, &registry, mode);
    report.print();
    Ok(())
}

/// Process every target and collect the run report.
///
/// Startup has already succeeded by the time this is called; nothing in
/// here returns an error to the caller.
#[must_use]
pub fn sync_all(manifest: &Manifest, registry: &Registry, mode: Mode) -> RunReport {
    let mut outcomes = Vec::with_capacity(manifest.targets.len());
    for target in &manifest.targets {
        let status = match sync_target(manifest, registry, target, mode) {
            Ok(status) => status,
            Err(error) => {
                warn!(lang = %target.lang, %error, "target skipped");
                LanguageStatus::Failed {
                    reason: error.to_string(),
                }
            }
        };
        outcomes.push(LanguageOutcome {
            lang: target.lang.clone(),
            status,
        });
    }
    RunReport { mode, outcomes }
}

fn sync_target(
    manifest: &Manifest,
    registry: &Registry,
    target: &Target,
    mode: Mode,
) -> Result<LanguageStatus> {
    let catalog = registry.catalog(&target.lang).ok_or_else(|| {
        SyncError::invalid(format!("no catalog loaded for language `{}`", target.lang))
    })?;
    if !target.file.exists() {
        return Err(SyncError::MissingPath {
            path: target.file.clone(),
        });
    }

    // Re-read per target: a previous target may have rewritten this file.
    let text = fs::read_to_string(&target.file)?;
    let span = locate_literal(&text, &target.marker).map_err(|source| SyncError::Locate {
        lang: target.lang.clone(),
        source,
    })?;
    debug!(lang = %target.lang, start = span.start, end = span.end, "located literal");

    let diff = diff_keys(registry.base(), catalog);

    match mode {
        Mode::Status => Ok(LanguageStatus::Drift {
            missing: diff.missing.len(),
            unused: diff.unused.len(),
        }),
        Mode::Generate => {
            // The catalog source can lag behind the file (an earlier run
            // already wrote placeholders); consult the literal itself so
            // reruns converge instead of duplicating entries.
            let missing: Vec<&String> = diff
                .missing
                .iter()
                .filter(|key| !contains_entry(&text, span, key.as_str()))
                .collect();
            if missing.is_empty() {
                return Ok(LanguageStatus::UpToDate);
            }
            let entries: Vec<(String, String)> = missing
                .into_iter()
                .map(|key| {
                    let base_value = registry.base().get(key).unwrap_or("");
                    (key.clone(), format!("[TODO] {base_value}"))
                })
                .collect();
            let updated = insert_entries(&text, span, &entries, &manifest.indent);
            fs::write(&target.file, updated)?;
            info!(lang = %target.lang, added = entries.len(), "placeholders inserted");
            Ok(LanguageStatus::Changed {
                added: entries.len(),
                removed: 0,
            })
        }
        Mode::Cleanup => {
            if diff.unused.is_empty() {
                return Ok(LanguageStatus::UpToDate);
            }
            let (updated, removed) = remove_entries(&text, span, &diff.unused);
            if removed == 0 {
                // Keys drifted in the catalog source but their lines are
                // already gone from the file.
                return Ok(LanguageStatus::UpToDate);
            }
            fs::write(&target.file, updated)?;
            info!(lang = %target.lang, removed, "stale entries removed");
            Ok(LanguageStatus::Changed { added: 0, removed })
        }
    }
}
