//! Console helpers shared by the printers and the binary.

use owo_colors::OwoColorize;
use std::path::Path;

pub fn error_prefix() -> String {
    "error:".red().bold().to_string()
}

pub fn warn_prefix() -> String {
    "warning:".yellow().bold().to_string()
}

pub fn info_prefix() -> String {
    "info:".blue().bold().to_string()
}

pub fn note_prefix() -> String {
    "note:".cyan().bold().to_string()
}

/// Render `path` relative to the working directory when possible.
pub fn rel_to_wd(path: &Path) -> String {
    let Ok(cwd) = std::env::current_dir() else {
        return path.display().to_string();
    };
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    match pathdiff::diff_paths(&abs, &cwd) {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => abs.display().to_string(),
    }
}
