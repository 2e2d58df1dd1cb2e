//! Run configuration, resolved once at startup and passed by reference.
//!
//! There is no config file and no environment lookup: the source root is
//! fixed, the flags come from the CLI, and the backup location is derived
//! from the start time.

use crate::backup::backup_dir_for;
use crate::cli::Cli;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Source root, relative to the working directory.
pub const SOURCE_ROOT: &str = "./src";
/// Extension of the template files that are scanned.
pub const TEMPLATE_EXTENSION: &str = "vue";

#[derive(Debug, Clone)]
/// Immutable settings for one run.
pub struct Config {
    pub root: PathBuf,
    pub extension: String,
    pub backup_dir: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, dry_run: bool, verbose: bool, now: DateTime<Utc>) -> Self {
        let root = root.into();
        let backup_dir = backup_dir_for(&root, now);
        Config {
            root,
            extension: TEMPLATE_EXTENSION.to_string(),
            backup_dir,
            dry_run,
            verbose,
        }
    }

    /// Build from parsed CLI flags using the current time.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(SOURCE_ROOT, cli.dry_run, cli.verbose, Utc::now())
    }

    /// Diagnostics level for the tracing subscriber.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::Parser;

    #[test]
    fn test_from_cli_uses_fixed_root() {
        let cli = Cli::try_parse_from(["mbfix", "--dry-run"]).unwrap();
        let cfg = Config::from_cli(&cli);
        assert_eq!(cfg.root, PathBuf::from(SOURCE_ROOT));
        assert_eq!(cfg.extension, "vue");
        assert!(cfg.dry_run);
        assert!(!cfg.verbose);
        assert_eq!(cfg.log_level(), "warn");
        let name = cfg.backup_dir.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("src_backup_"));
        assert!(!name.contains(':') && !name.contains('-'));
    }

    #[test]
    fn test_backup_dir_is_sibling_of_root() {
        let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        let cfg = Config::new("/tmp/project/src", false, true, now);
        assert_eq!(
            cfg.backup_dir,
            PathBuf::from("/tmp/project/src_backup_20251231T235959")
        );
        assert_eq!(cfg.log_level(), "debug");
    }
}
