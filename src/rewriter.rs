//! File rewriting for applying link fixes.
//!
//! Performs position-aware replacement of link targets using the byte spans
//! captured by the scanner. Rewrites are sorted by position and applied in
//! reverse order to preserve offset validity.

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;

use crate::classifier::{self, Verdict};
use crate::scanner::{self, Link};

/// One applied (or planned) link rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Line number, 1-indexed.
    pub line: usize,
    /// Original link target.
    pub old: String,
    /// Rewritten link target.
    pub new: String,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {} → {}", self.line, self.old, self.new)
    }
}

/// Result of fixing one file.
#[derive(Debug, Default)]
pub struct FixOutcome {
    /// Number of links rewritten (or that would be rewritten in dry-run).
    pub fixes: usize,
    /// Change log in descending document order, matching the order in which
    /// spans were spliced.
    pub changes: Vec<Change>,
}

/// Fixes all qualifying links in one file.
///
/// Loads the file, scans links, and splices `[text](replacement)` over the
/// span of every link the classifier marks fix-worthy. Writes the result back
/// only when at least one fix was made and `dry_run` is false; dry-run
/// computes an identical outcome without touching the filesystem. Rerunning
/// on a fixed file is a no-op since rewritten links are already Chinese.
pub fn fix_file(path: &Path, dry_run: bool) -> Result<FixOutcome> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let links = scanner::find_links(&content);
    let mut rewrites: Vec<(Link, String)> = Vec::new();
    for link in links {
        if !classifier::is_local_md_link(&link.target) {
            continue;
        }
        if let Verdict::Fix { replacement, .. } = classifier::classify(&link.target, path) {
            rewrites.push((link, replacement));
        }
    }

    let changes: Vec<Change> = rewrites
        .iter()
        .rev()
        .map(|(link, replacement)| Change {
            line: link.line,
            old: link.target.clone(),
            new: replacement.clone(),
        })
        .collect();

    let outcome = FixOutcome {
        fixes: rewrites.len(),
        changes,
    };

    if outcome.fixes > 0 && !dry_run {
        let rewritten = apply_rewrites(&content, &rewrites);
        std::fs::write(path, rewritten)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(outcome)
}

/// Applies link rewrites to document text, returning the modified string.
///
/// Sorts rewrites by start offset descending and splices each in turn, so
/// earlier splices never invalidate spans that are still pending.
pub fn apply_rewrites(content: &str, rewrites: &[(Link, String)]) -> String {
    let mut ordered: Vec<&(Link, String)> = rewrites.iter().collect();
    ordered.sort_by(|a, b| b.0.start.cmp(&a.0.start));

    let mut result = content.to_string();
    for (link, replacement) in ordered {
        if link.start < link.end && link.end <= result.len() {
            let new_link = format!("[{}]({})", link.text, replacement);
            result.replace_range(link.start..link.end, &new_link);
        }
    }

    result
}
