//! Shared data models for analysis, rewriting, and run summaries.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Category of a detector match.
pub enum IssueKind {
    /// `mb-6` present in an input's `class` attribute.
    InputMb6,
    /// Input carrying `name="webshop_domain"`.
    WebshopDomain,
    /// Input whose placeholder mentions a shop domain.
    ShopDomainPlaceholder,
}

impl IssueKind {
    /// Short stable tag, e.g. `input-mb6`.
    pub fn tag(self) -> &'static str {
        match self {
            IssueKind::InputMb6 => "input-mb6",
            IssueKind::WebshopDomain => "webshop-domain",
            IssueKind::ShopDomainPlaceholder => "shop-domain-placeholder",
        }
    }

    /// Human-readable label printed next to each reported line.
    pub fn label(self) -> &'static str {
        match self {
            IssueKind::InputMb6 => "mb-6 on input element",
            IssueKind::WebshopDomain => "input with name=\"webshop_domain\"",
            IssueKind::ShopDomainPlaceholder => "input with shop domain placeholder",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single detector match inside one file.
pub struct Issue {
    pub kind: IssueKind,
    pub label: &'static str,
    /// 1-based line of the match start.
    pub line: usize,
    pub matched: String,
    /// Byte offset of the match start.
    pub offset: usize,
}

#[derive(Debug, Clone)]
/// One analyzed template: its path, untouched content, and issues in detector order.
pub struct FileRecord {
    pub path: PathBuf,
    pub content: String,
    pub issues: Vec<Issue>,
}

impl FileRecord {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Output of the rewriter for one file.
pub struct FixResult {
    pub content: String,
    /// Set when any substitution ran, even if the text came out identical.
    pub modified: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Counters accumulated over one run and used by the printers.
pub struct Summary {
    pub files_scanned: usize,
    pub files_with_issues: usize,
    pub issues: usize,
    pub files_fixed: usize,
    pub issues_fixed: usize,
}
