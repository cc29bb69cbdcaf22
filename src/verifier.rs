//! Read-only link verification.
//!
//! Applies the same classification as the fixer but only reports: every local
//! Markdown link with a fix-worthy verdict becomes an issue record. Never
//! mutates the filesystem, so the issues for a file are exactly the rewrites
//! the fixer would apply in dry-run mode.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::classifier::{self, Verdict};
use crate::scanner;

/// One link that should point at a Chinese variant but does not.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Source file, relative to the repository root.
    pub file: String,
    /// Line number, 1-indexed.
    pub line: usize,
    /// Display text of the link.
    pub link_text: String,
    /// Current link target.
    pub current: String,
    /// Target the link should have.
    pub expected: String,
    /// Why the link is flagged.
    pub reason: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}:{}", self.file, self.line)?;
        writeln!(f, "  Link text: {}", self.link_text)?;
        writeln!(f, "  Current: {}", self.current)?;
        writeln!(f, "  Should be: {}", self.expected)?;
        write!(f, "  Reason: {}", self.reason)
    }
}

/// Verifies all links in one Chinese documentation file.
///
/// Returns the list of issues found, empty when the file is fully compliant.
/// Issue paths are reported relative to `repo_root` when possible.
pub fn verify_file(path: &Path, repo_root: &Path) -> Result<Vec<Issue>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let rel = path.strip_prefix(repo_root).unwrap_or(path);

    let mut issues = Vec::new();
    for link in scanner::find_links(&content) {
        if !classifier::is_local_md_link(&link.target) {
            continue;
        }
        if let Verdict::Fix {
            replacement,
            sibling,
        } = classifier::classify(&link.target, path)
        {
            let sibling_name = sibling.file_name().map_or_else(
                || sibling.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            issues.push(Issue {
                file: rel.display().to_string(),
                line: link.line,
                link_text: link.text,
                current: link.target,
                expected: replacement,
                reason: format!("Chinese version exists: {sibling_name}"),
            });
        }
    }

    Ok(issues)
}
