//! Pattern analyzer for Vue templates.
//!
//! Each detector is applied to the whole file content (not line by line) and
//! every occurrence is recorded. Issues keep detector declaration order:
//! matches from different detectors are concatenated, not re-sorted by
//! position. Analysis never mutates the content it is given.

use crate::models::{FileRecord, Issue, IssueKind};
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Margin utility class that belongs on the wrapper, not on the input.
pub const MARGIN_TOKEN: &str = "mb-6";
/// Field name whose inputs are always wrapped when they carry the margin token.
pub const NAMED_FIELD: &str = "webshop_domain";
/// Placeholder fragment flagged for manual review.
pub const PLACEHOLDER_NEEDLE: &str = "shop domain";

/// A compiled detector.
pub struct Detector {
    pub kind: IssueKind,
    pub regex: Regex,
}

/// Regex body matching a `class` value that contains the margin token as a
/// whitespace-separated token.
pub(crate) fn class_with_token() -> String {
    format!(
        r#"(?:[^"]*\s)?{}(?:\s[^"]*)?"#,
        regex::escape(MARGIN_TOKEN)
    )
}

/// The fixed detector set, in declaration order.
pub fn detectors() -> &'static [Detector] {
    static DETECTORS: OnceLock<Vec<Detector>> = OnceLock::new();
    DETECTORS.get_or_init(|| {
        vec![
            Detector {
                kind: IssueKind::InputMb6,
                regex: Regex::new(&format!(
                    r#"<input[^>]*\sclass="{}"[^>]*>"#,
                    class_with_token()
                ))
                .unwrap(),
            },
            Detector {
                kind: IssueKind::WebshopDomain,
                regex: Regex::new(&format!(
                    r#"<input[^>]*\sname="{}"[^>]*>"#,
                    regex::escape(NAMED_FIELD)
                ))
                .unwrap(),
            },
            // Whole pattern is case-insensitive, tag and attribute included.
            Detector {
                kind: IssueKind::ShopDomainPlaceholder,
                regex: Regex::new(&format!(
                    r#"(?i)<input[^>]*\splaceholder="[^"]*{}[^"]*"[^>]*>"#,
                    regex::escape(PLACEHOLDER_NEEDLE)
                ))
                .unwrap(),
            },
        ]
    })
}

/// Look up the detector for `kind`.
pub fn detector(kind: IssueKind) -> &'static Detector {
    detectors()
        .iter()
        .find(|d| d.kind == kind)
        .unwrap_or_else(|| unreachable!("every IssueKind has a detector"))
}

/// 1-based line number of `offset`: one plus the newlines before it.
pub fn line_of(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset]
        .iter()
        .filter(|b| **b == b'\n')
        .count()
        + 1
}

/// Run every detector over `content`.
pub fn find_issues(content: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for det in detectors() {
        for m in det.regex.find_iter(content) {
            issues.push(Issue {
                kind: det.kind,
                label: det.kind.label(),
                line: line_of(content, m.start()),
                matched: m.as_str().to_string(),
                offset: m.start(),
            });
        }
    }
    issues
}

/// Analyze already-loaded content.
pub fn analyze(path: &Path, content: String) -> FileRecord {
    let issues = find_issues(&content);
    FileRecord {
        path: path.to_path_buf(),
        content,
        issues,
    }
}

/// Read and analyze one template file.
pub fn analyze_file(path: &Path) -> Result<FileRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(analyze(path, content))
}
