//! Console printers for the scan, dry-run, and fix phases.
//!
//! Progress and results go to stdout; the missing-root error and backup
//! failures go to stderr with the shared prefixes from `utils`.

use crate::backup::BackupError;
use crate::models::{FileRecord, Issue, Summary};
use crate::utils::{error_prefix, info_prefix, note_prefix, rel_to_wd, warn_prefix};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn print_banner(dry_run: bool) {
    println!("{}", "🔍 mbfix — mb-6 input margin fix".cyan().bold());
    println!("{}", "================================".cyan());
    if dry_run {
        println!("{}", "🧪 DRY RUN MODE - no files will be modified".yellow());
    }
}

pub fn print_missing_root(root: &Path) {
    eprintln!(
        "{} {}",
        error_prefix(),
        format!("{} directory not found", root.display()).red()
    );
    eprintln!(
        "{} {}",
        note_prefix(),
        "Run mbfix from the frontend project root (the directory containing src/)."
    );
}

pub fn print_scan_start(extension: &str) {
    println!("{}", format!("📍 Searching for .{extension} files...").blue());
}

pub fn print_scan_count(count: usize, extension: &str) {
    println!("{}", format!("Found {count} .{extension} files").blue());
}

/// Plain-text lines for one issue: the location line, then the matched markup
/// when `verbose` is set.
pub fn issue_lines(issue: &Issue, verbose: bool) -> Vec<String> {
    let mut lines = vec![format!("  Line {}: {}", issue.line, issue.label)];
    if verbose {
        lines.push(format!("    {}", issue.matched));
    }
    lines
}

pub fn print_file_issues(record: &FileRecord, verbose: bool) {
    println!("\n{}", format!("📄 {}", rel_to_wd(&record.path)).yellow());
    for issue in &record.issues {
        let mut lines = issue_lines(issue, verbose).into_iter();
        if let Some(head) = lines.next() {
            println!("{}", head.red());
        }
        for detail in lines {
            println!("{}", detail.magenta());
        }
    }
}

pub fn print_clean() {
    println!("\n{}", "✅ No problematic mb-6 patterns found!".green());
}

pub fn print_found(summary: &Summary) {
    println!(
        "\n{}",
        format!(
            "🔧 Found {} issues in {} files",
            summary.issues, summary.files_with_issues
        )
        .yellow()
    );
}

pub fn print_dry_run_hint() {
    println!(
        "\n{}",
        "📋 To apply fixes, run without --dry-run".blue()
    );
}

pub fn print_backup_started(dst: &Path) {
    println!(
        "{} {}",
        info_prefix(),
        format!("Creating backup: {}", rel_to_wd(dst)).yellow()
    );
}

pub fn print_applying() {
    println!("\n{}", "🛠️  Applying fixes...".blue());
}

pub fn print_fixed_file(path: &Path) {
    println!("{} {}", "✅ Fixed:".green().bold(), rel_to_wd(path));
}

/// Shell command that restores the source tree from the backup.
pub fn rollback_command(root: &Path, backup: &Path) -> String {
    let (root, backup) = (rel_to_wd(root), rel_to_wd(backup));
    format!("rm -rf {root} && mv {backup} {root}")
}

pub fn print_fix_summary(summary: &Summary, root: &Path, backup: &Path) {
    println!(
        "\n{}",
        format!(
            "🎉 Fixed {} issues in {} files",
            summary.issues_fixed, summary.files_fixed
        )
        .green()
        .bold()
    );
    println!("{}", "📋 Next steps:".blue());
    println!("{}", "  1. Test the affected forms in the browser".blue());
    println!("{}", "  2. Verify input alignment and spacing".blue());
    println!(
        "{}",
        format!(
            "  3. If needed, restore from backup: {}",
            rollback_command(root, backup)
        )
        .blue()
    );
}

pub fn print_backup_outcome(outcome: &Result<usize, BackupError>, dst: &Path) {
    match outcome {
        Ok(files) => println!(
            "{}",
            format!("Backup created successfully ({files} files in {})", rel_to_wd(dst)).green()
        ),
        Err(e) => eprintln!(
            "{} {}",
            warn_prefix(),
            format!("Error creating backup: {e}").red()
        ),
    }
}
