//! Link classification.
//!
//! Decides whether a link found in a Chinese document should instead point at
//! the Chinese-suffixed sibling of its target. The decision is total: every
//! input produces exactly one verdict, and resolution failures become a
//! `Skip` with the failure text as the reason rather than an error.

use std::path::{Component, Path, PathBuf};

/// Suffix marking a Chinese documentation variant.
pub const CHINESE_SUFFIX: &str = ".zh.md";

/// Demo applications have no Chinese variants; links into that area are
/// never rewritten.
pub const DEMO_APPS_MARKER: &str = "demo-apps";

/// Outcome of classifying a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The link should be rewritten to `replacement`; `sibling` is the
    /// Chinese file that exists on disk.
    Fix {
        replacement: String,
        sibling: PathBuf,
    },
    /// The link is left alone.
    Skip { reason: String },
}

/// Returns whether `target` is a same-repository Markdown reference worth
/// classifying: contains `.md`, not an external URL, not an in-page anchor.
/// Intentionally permissive; this is a gate, not a URL parser.
pub fn is_local_md_link(target: &str) -> bool {
    target.contains(".md") && !target.starts_with("http") && !target.starts_with('#')
}

/// Decides whether `target`, found in `source_file`, should point at the
/// Chinese sibling of its target document.
pub fn classify(target: &str, source_file: &Path) -> Verdict {
    if target.contains(DEMO_APPS_MARKER) {
        return skip("demo-apps link (no Chinese version)");
    }
    if target.contains(CHINESE_SUFFIX) {
        return skip("already Chinese");
    }
    if !target.starts_with("./") && !target.starts_with("../") {
        return skip("not a relative docs link");
    }

    let (clean, anchor) = split_anchor(target);
    let Some(dir) = source_file.parent() else {
        return skip(&format!(
            "path resolution error: {} has no parent directory",
            source_file.display()
        ));
    };
    let resolved = normalize_path(&dir.join(clean));
    let Some(resolved_str) = resolved.to_str() else {
        return skip(&format!(
            "path resolution error: non-UTF-8 path {}",
            resolved.display()
        ));
    };
    let (Some(sibling), Some(new_clean)) = (chinese_sibling(resolved_str), chinese_sibling(clean))
    else {
        return skip("not fixable");
    };

    let sibling = PathBuf::from(sibling);
    if sibling.exists() {
        Verdict::Fix {
            replacement: format!("{new_clean}{anchor}"),
            sibling,
        }
    } else {
        skip("not fixable")
    }
}

/// Replaces the `.md` suffix of `path` with `.zh.md`.
///
/// Prefers the trailing suffix (`guide.md` → `guide.zh.md`); when `.md` only
/// appears mid-string, the first occurrence is replaced. Returns `None` when
/// the path contains no `.md` at all.
pub fn chinese_sibling(path: &str) -> Option<String> {
    if let Some(stem) = path.strip_suffix(".md") {
        return Some(format!("{stem}{CHINESE_SUFFIX}"));
    }
    if path.contains(".md") {
        return Some(path.replacen(".md", CHINESE_SUFFIX, 1));
    }
    None
}

/// Splits an anchor fragment off a link target. The anchor keeps its leading
/// `#` so it can be reattached verbatim.
fn split_anchor(target: &str) -> (&str, &str) {
    match target.find('#') {
        Some(pos) => (&target[..pos], &target[pos..]),
        None => (target, ""),
    }
}

/// Collapses `.` and `..` components lexically, without touching the
/// filesystem. Preserves leading `..` when there is nothing left to pop.
fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

fn skip(reason: &str) -> Verdict {
    Verdict::Skip {
        reason: reason.to_string(),
    }
}
