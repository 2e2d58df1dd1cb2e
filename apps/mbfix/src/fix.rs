//! Rewriter that moves the margin token from `<input>` elements onto a `<div>`.
//!
//! Two rules are evaluated against the original content:
//! - general: strip the token and wrap the input in a new `<div class="mb-6">`
//!   unless the most recent `<div` before it is later than the most recent
//!   `</div>` (the input is then assumed to sit in an open container);
//! - specific: inputs that also carry `name="webshop_domain"` are always
//!   wrapped, whatever the general heuristic decides.
//!
//! The container check is a plain string-position heuristic, not a parse. It
//! misjudges malformed or deeply nested markup and that is accepted.

use crate::lint::{class_with_token, detector, MARGIN_TOKEN};
use crate::models::{FileRecord, FixResult, IssueKind};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Where the cleaned input ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Token stripped, element left where it is.
    InPlace,
    /// Token stripped and element wrapped in a new container.
    Wrapped,
}

fn input_with_margin() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r#"<input(?P<pre>[^>]*\sclass=")(?P<classes>{})(?P<post>"[^>]*>)"#,
            class_with_token()
        ))
        .unwrap()
    })
}

/// True when the last `<div` in `before` comes after the last `</div>`.
pub fn inside_open_div(before: &str) -> bool {
    before.rfind("<div") > before.rfind("</div>")
}

/// Drop the margin token from a class list, re-joining the rest with single spaces.
pub fn strip_token(classes: &str) -> String {
    classes
        .split_whitespace()
        .filter(|c| *c != MARGIN_TOKEN)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decide placement for an element starting at `start` in `content`.
pub fn placement(content: &str, start: usize, element: &str) -> Placement {
    if detector(IssueKind::WebshopDomain).regex.is_match(element) {
        return Placement::Wrapped;
    }
    if inside_open_div(&content[..start]) {
        Placement::InPlace
    } else {
        Placement::Wrapped
    }
}

fn wrap(input: &str) -> String {
    format!("<div class=\"{MARGIN_TOKEN}\">\n      {input}\n    </div>")
}

/// Rewrite `content`, returning the new text and whether any substitution ran.
pub fn fix_content(content: &str) -> FixResult {
    let mut modified = false;
    let out = input_with_margin().replace_all(content, |caps: &Captures| {
        modified = true;
        let start = caps.get(0).map_or(0, |m| m.start());
        let input = format!(
            "<input{}{}{}",
            &caps["pre"],
            strip_token(&caps["classes"]),
            &caps["post"]
        );
        match placement(content, start, &caps[0]) {
            Placement::InPlace => input,
            Placement::Wrapped => wrap(&input),
        }
    });
    FixResult {
        content: out.into_owned(),
        modified,
    }
}

/// Rewrite an analyzed file. The record itself is left untouched.
pub fn fix_record(record: &FileRecord) -> FixResult {
    fix_content(&record.content)
}
