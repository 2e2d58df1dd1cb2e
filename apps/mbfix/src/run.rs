//! End-to-end run: validate, scan, analyze, report, back up, rewrite.
//!
//! Only the backup has recovery (warn and continue). Read and write errors
//! propagate to the caller and end the run.

use crate::config::Config;
use crate::models::{FileRecord, Summary};
use crate::{backup, fix, lint, output, walk};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Terminal state of a run.
pub enum Outcome {
    /// Source root absent; nothing else was done.
    MissingRoot,
    /// No file had issues.
    Clean(Summary),
    /// Issues reported; nothing written.
    DryRun(Summary),
    /// Flagged files rewritten; `backup` names the backup directory.
    Fixed { summary: Summary, backup: PathBuf },
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::MissingRoot => 1,
            _ => 0,
        }
    }
}

/// Walk and analyze every template under the root, printing flagged files.
fn scan(cfg: &Config, summary: &mut Summary) -> Result<Vec<FileRecord>> {
    output::print_scan_start(&cfg.extension);
    let files = walk::find_files(&cfg.root, &cfg.extension)?;
    output::print_scan_count(files.len(), &cfg.extension);
    summary.files_scanned = files.len();

    let mut flagged = Vec::new();
    for path in files {
        let record = lint::analyze_file(&path)?;
        if record.has_issues() {
            output::print_file_issues(&record, cfg.verbose);
            summary.files_with_issues += 1;
            summary.issues += record.issues.len();
            flagged.push(record);
        }
    }
    Ok(flagged)
}

/// Execute one run with the given configuration.
pub fn run(cfg: &Config) -> Result<Outcome> {
    output::print_banner(cfg.dry_run);
    if !cfg.root.is_dir() {
        output::print_missing_root(&cfg.root);
        return Ok(Outcome::MissingRoot);
    }

    let mut summary = Summary::default();
    let flagged = scan(cfg, &mut summary)?;
    if flagged.is_empty() {
        output::print_clean();
        return Ok(Outcome::Clean(summary));
    }
    output::print_found(&summary);
    if cfg.dry_run {
        output::print_dry_run_hint();
        return Ok(Outcome::DryRun(summary));
    }

    let backup = rewrite_with_backup(cfg, &flagged, &mut summary)?;
    Ok(Outcome::Fixed { summary, backup })
}

/// Write every modified record back to disk, counting into `summary`.
fn rewrite_all(flagged: &[FileRecord], summary: &mut Summary) -> Result<()> {
    for record in flagged {
        let result = fix::fix_record(record);
        if !result.modified {
            continue;
        }
        fs::write(&record.path, &result.content)
            .with_context(|| format!("failed to write {}", record.path.display()))?;
        summary.files_fixed += 1;
        summary.issues_fixed += record.issues.len();
        info!(file = %record.path.display(), issues = record.issues.len(), "rewrote file");
        output::print_fixed_file(&record.path);
    }
    Ok(())
}

/// Dispatch the backup, rewrite the flagged files, then collect the backup
/// outcome. The backup is awaited and reported even when a write fails; the
/// write error is returned afterwards.
fn rewrite_with_backup(
    cfg: &Config,
    flagged: &[FileRecord],
    summary: &mut Summary,
) -> Result<PathBuf> {
    output::print_backup_started(&cfg.backup_dir);
    let pending = backup::spawn_backup(&cfg.root, &cfg.backup_dir);

    output::print_applying();
    let written = rewrite_all(flagged, summary);
    if written.is_ok() {
        output::print_fix_summary(summary, &cfg.root, &cfg.backup_dir);
    }

    let destination = pending.destination().to_path_buf();
    let outcome = pending.wait();
    if let Err(e) = &outcome {
        warn!(error = %e, "backup failed");
    }
    output::print_backup_outcome(&outcome, &destination);

    written.map(|()| destination)
}
