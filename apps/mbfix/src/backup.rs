//! Backup of the source tree before any file is rewritten.
//!
//! The copy is dispatched onto the rayon pool and the caller continues right
//! away; rewrites are not ordered after it. A failed backup is reported by the
//! caller and never stops or rolls back the rewrite.

use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("backup source is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("backup destination already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    #[error("backup worker stopped before reporting a result")]
    Interrupted,
}

/// Backup directory next to `root`: `<name>_backup_<YYYYMMDDTHHMMSS>`.
///
/// The stamp is the ISO-8601 UTC time with `-` and `:` removed.
pub fn backup_dir_for(root: &Path, now: DateTime<Utc>) -> PathBuf {
    let stamp = now.format("%Y%m%dT%H%M%S");
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "src".to_string());
    let parent = root.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{name}_backup_{stamp}"))
}

/// Copy `src` into the new directory `dst`, returning the number of files and
/// links copied. Symlinks are recreated as links, not followed.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, BackupError> {
    if !src.is_dir() {
        return Err(BackupError::NotADirectory(src.to_path_buf()));
    }
    if dst.exists() {
        return Err(BackupError::AlreadyExists(dst.to_path_buf()));
    }
    let mut copied = 0;
    copy_dir(src, dst, &mut copied)?;
    Ok(copied)
}

fn copy_err(from: &Path, to: &Path) -> impl FnOnce(io::Error) -> BackupError {
    let (from, to) = (from.to_path_buf(), to.to_path_buf());
    move |source| BackupError::Copy { from, to, source }
}

fn copy_dir(src: &Path, dst: &Path, copied: &mut usize) -> Result<(), BackupError> {
    fs::create_dir(dst).map_err(copy_err(src, dst))?;
    for entry in fs::read_dir(src).map_err(copy_err(src, dst))? {
        let entry = entry.map_err(copy_err(src, dst))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        // file_type() does not follow links, so links are recreated, never descended.
        let kind = entry.file_type().map_err(copy_err(&from, &to))?;
        if kind.is_symlink() {
            copy_link(&from, &to).map_err(copy_err(&from, &to))?;
            *copied += 1;
        } else if kind.is_dir() {
            copy_dir(&from, &to, copied)?;
        } else {
            fs::copy(&from, &to).map_err(copy_err(&from, &to))?;
            *copied += 1;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_link(from: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(from)?, to)
}

#[cfg(windows)]
fn copy_link(from: &Path, to: &Path) -> io::Result<()> {
    let target = fs::read_link(from)?;
    if fs::metadata(from).map(|m| m.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(target, to)
    } else {
        std::os::windows::fs::symlink_file(target, to)
    }
}

/// Handle to a backup running in the background.
pub struct BackupHandle {
    destination: PathBuf,
    rx: mpsc::Receiver<Result<usize, BackupError>>,
}

impl BackupHandle {
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Block until the copy finishes and return its outcome.
    pub fn wait(self) -> Result<usize, BackupError> {
        self.rx.recv().unwrap_or(Err(BackupError::Interrupted))
    }
}

/// Start copying `src` to `dst` without waiting for it.
pub fn spawn_backup(src: &Path, dst: &Path) -> BackupHandle {
    let (tx, rx) = mpsc::channel();
    let (from, to) = (src.to_path_buf(), dst.to_path_buf());
    debug!(from = %from.display(), to = %to.display(), "dispatching backup");
    rayon::spawn(move || {
        let _ = tx.send(copy_tree(&from, &to));
    });
    BackupHandle {
        destination: dst.to_path_buf(),
        rx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_backup_dir_name_strips_separators() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(
            backup_dir_for(Path::new("./src"), now),
            PathBuf::from("./src_backup_20240307T090501")
        );
        assert_eq!(
            backup_dir_for(Path::new("/work/app/src"), now),
            PathBuf::from("/work/app/src_backup_20240307T090501")
        );
    }

    #[test]
    fn test_copy_tree_copies_everything() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("components/.hidden")).unwrap();
        fs::create_dir_all(src.join("node_modules/x")).unwrap();
        fs::write(src.join("App.vue"), "app").unwrap();
        fs::write(src.join("components/.hidden/a.txt"), "a").unwrap();
        fs::write(src.join("node_modules/x/i.js"), "i").unwrap();
        let dst = tmp.path().join("src_backup");
        assert_eq!(copy_tree(&src, &dst).unwrap(), 3);
        assert_eq!(fs::read_to_string(dst.join("App.vue")).unwrap(), "app");
        assert!(dst.join("components/.hidden/a.txt").is_file());
        assert!(dst.join("node_modules/x/i.js").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_keeps_symlinks_as_links() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join(".cache")).unwrap();
        fs::write(src.join("App.vue"), "app").unwrap();
        std::os::unix::fs::symlink("..", src.join(".cache/up")).unwrap();
        std::os::unix::fs::symlink("App.vue", src.join("Alias.vue")).unwrap();
        let dst = tmp.path().join("bak");
        assert_eq!(copy_tree(&src, &dst).unwrap(), 3);
        let up = dst.join(".cache/up");
        assert!(fs::symlink_metadata(&up).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&up).unwrap(), PathBuf::from(".."));
        assert_eq!(fs::read_link(dst.join("Alias.vue")).unwrap(), PathBuf::from("App.vue"));
        assert_eq!(fs::read_dir(dst.join(".cache")).unwrap().count(), 1);
    }

    #[test]
    fn test_copy_tree_refuses_existing_destination() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        assert!(matches!(
            copy_tree(&src, &dst),
            Err(BackupError::AlreadyExists(_))
        ));
        assert!(matches!(
            copy_tree(&tmp.path().join("missing"), &tmp.path().join("x")),
            Err(BackupError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_spawned_backup_reports_outcome() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("A.vue"), "a").unwrap();
        let dst = tmp.path().join("bak");
        let handle = spawn_backup(&src, &dst);
        assert_eq!(handle.destination(), dst.as_path());
        assert_eq!(handle.wait().unwrap(), 1);
        assert!(dst.join("A.vue").is_file());

        let again = spawn_backup(&src, &dst);
        assert!(again.wait().is_err());
    }
}
