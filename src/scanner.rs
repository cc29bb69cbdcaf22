//! Markdown link scanner and documentation file collector.
//!
//! Recursively walks a documentation root to collect `.zh.md` files, skipping
//! entries whose names start with `.` or `_`. Extracts inline `[text](path)`
//! links from document text with their line numbers and byte spans.

use anyhow::{Result, bail};
use glob::Pattern;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

use crate::classifier::CHINESE_SUFFIX;

/// Inline Markdown links: `[text](path)`. Links never span lines, so the
/// pattern is applied line by line.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

/// One inline link occurrence found in a document.
#[derive(Debug, Clone)]
pub struct Link {
    /// Line number, 1-indexed.
    pub line: usize,
    /// Display text between the brackets.
    pub text: String,
    /// Target path between the parentheses.
    pub target: String,
    /// Byte offset of `[` within the whole document text.
    pub start: usize,
    /// Byte offset just past the closing `)`.
    pub end: usize,
}

/// Extracts all inline links from `content` in document order.
///
/// Spans are byte offsets into the full text; line offsets accumulate by line
/// length plus one for the newline. Purely syntactic, no path validation.
pub fn find_links(content: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut offset = 0;

    for (idx, line) in content.split('\n').enumerate() {
        for cap in LINK_RE.captures_iter(line) {
            let (Some(whole), Some(text), Some(target)) = (cap.get(0), cap.get(1), cap.get(2))
            else {
                continue;
            };
            links.push(Link {
                line: idx + 1,
                text: text.as_str().to_string(),
                target: target.as_str().to_string(),
                start: offset + whole.start(),
                end: offset + whole.end(),
            });
        }
        offset += line.len() + 1;
    }

    links
}

/// Collects all `.zh.md` files under `root`, sorted for deterministic order.
///
/// Hidden and underscore-prefixed entries are always skipped; `excludes`
/// patterns are matched against entry file names.
pub fn collect_chinese_files(root: &Path, excludes: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden_or_underscore(e) && !is_excluded(e, excludes))
    {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(CHINESE_SUFFIX))
        {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Collects the `.zh.md` files to process, validating the setup first.
///
/// A missing docs root or zero matching files is an error, not a vacuous
/// success, since the tool's whole purpose is to operate on such files.
pub fn collect_targets(root: &Path, excludes: &[Pattern]) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("docs directory not found at {}", root.display());
    }
    let files = collect_chinese_files(root, excludes)?;
    if files.is_empty() {
        bail!(
            "no Chinese documentation files found under {}",
            root.display()
        );
    }
    Ok(files)
}

fn is_hidden_or_underscore(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.') || s.starts_with('_'))
}

fn is_excluded(entry: &walkdir::DirEntry, excludes: &[Pattern]) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| excludes.iter().any(|p| p.matches(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `tempfile::tempdir()` names directories with a `.tmp` prefix, which the
    /// hidden-entry filter would prune at the walk root; use a visible prefix.
    fn tempdir() -> tempfile::TempDir {
        tempfile::Builder::new()
            .prefix("zhlink-test")
            .tempdir()
            .unwrap()
    }

    #[test]
    fn finds_single_link_with_exact_span() {
        let content = "See [the guide](./guide.md) for details.";
        let links = find_links(content);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].line, 1);
        assert_eq!(links[0].text, "the guide");
        assert_eq!(links[0].target, "./guide.md");
        assert_eq!(
            &content[links[0].start..links[0].end],
            "[the guide](./guide.md)"
        );
    }

    #[test]
    fn finds_multiple_links_on_same_line_in_order() {
        let content = "[a](./a.md) and [b](./b.md)";
        let links = find_links(content);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target, "./a.md");
        assert_eq!(links[1].target, "./b.md");
        assert!(links[0].end <= links[1].start);
    }

    #[test]
    fn spans_stay_valid_with_multibyte_text() {
        let content = "# 简介\n\n请参阅 [见指南](../guide.md) 了解详情。\n";
        let links = find_links(content);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].line, 3);
        assert_eq!(links[0].text, "见指南");
        assert_eq!(
            &content[links[0].start..links[0].end],
            "[见指南](../guide.md)"
        );
    }

    #[test]
    fn accumulates_offsets_across_lines() {
        let content = "first line\n[x](./x.md)\n";
        let links = find_links(content);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].line, 2);
        assert_eq!(links[0].start, 11);
        assert_eq!(&content[links[0].start..links[0].end], "[x](./x.md)");
    }

    #[test]
    fn ignores_text_without_links() {
        assert!(find_links("no links here, just [brackets] and (parens)").is_empty());
    }

    #[test]
    fn does_not_match_links_spanning_lines() {
        assert!(find_links("[text\n](./a.md)").is_empty());
    }

    #[test]
    fn collects_only_chinese_files_sorted() {
        let dir = tempdir();
        let root = dir.path();
        std::fs::create_dir_all(root.join("nested")).unwrap();
        std::fs::write(root.join("b.zh.md"), "").unwrap();
        std::fs::write(root.join("a.md"), "").unwrap();
        std::fs::write(root.join("nested/a.zh.md"), "").unwrap();

        let files = collect_chinese_files(root, &[]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["b.zh.md", "nested/a.zh.md"]);
    }

    #[test]
    fn skips_hidden_and_underscore_entries() {
        let dir = tempdir();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("_drafts")).unwrap();
        std::fs::write(root.join(".git/x.zh.md"), "").unwrap();
        std::fs::write(root.join("_drafts/y.zh.md"), "").unwrap();
        std::fs::write(root.join("z.zh.md"), "").unwrap();

        let files = collect_chinese_files(root, &[]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("z.zh.md"));
    }

    #[test]
    fn missing_docs_root_is_a_setup_error() {
        let dir = tempdir();
        let err = collect_targets(&dir.path().join("docs"), &[]).unwrap_err();
        assert!(err.to_string().contains("docs directory not found"));
    }

    #[test]
    fn zero_chinese_files_is_a_setup_error() {
        let dir = tempdir();
        let root = dir.path();
        std::fs::write(root.join("guide.md"), "").unwrap();

        let err = collect_targets(root, &[]).unwrap_err();
        assert!(
            err.to_string()
                .contains("no Chinese documentation files found")
        );
    }

    #[test]
    fn collect_targets_returns_files_when_setup_is_valid() {
        let dir = tempdir();
        let root = dir.path();
        std::fs::write(root.join("guide.zh.md"), "").unwrap();

        let files = collect_targets(root, &[]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn applies_exclude_patterns_to_names() {
        let dir = tempdir();
        let root = dir.path();
        std::fs::create_dir_all(root.join("drafts")).unwrap();
        std::fs::write(root.join("drafts/a.zh.md"), "").unwrap();
        std::fs::write(root.join("b.tmp.zh.md"), "").unwrap();
        std::fs::write(root.join("keep.zh.md"), "").unwrap();

        let excludes = vec![
            Pattern::new("drafts").unwrap(),
            Pattern::new("*.tmp.zh.md").unwrap(),
        ];
        let files = collect_chinese_files(root, &excludes).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.zh.md"));
    }
}
