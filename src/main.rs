//! zhlink: Check and fix links in Chinese Markdown documentation.
//!
//! Scans a documentation tree for `.zh.md` files and rewrites (or reports)
//! links that point at a plain `.md` document whose Chinese variant exists
//! on disk next to it.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;
use glob::Pattern;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use zhlink::cli::{Args, Commands};
use zhlink::verifier::Issue;
use zhlink::{rewriter, scanner, verifier};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    match args.command {
        Commands::Check {
            root,
            exclude,
            json,
            verbose,
        } => cmd_check(root, &exclude, json, verbose),
        Commands::Fix {
            dry_run,
            interactive,
            root,
            exclude,
            verbose,
        } => cmd_fix(dry_run, interactive, root, &exclude, verbose),
        Commands::Scan { root, exclude } => cmd_scan(root, &exclude),
    }
}

/// Run summary for `check --json` output.
#[derive(Debug, Serialize)]
struct Diagnostics {
    files_checked: usize,
    issues_found: usize,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    issues: Vec<Issue>,
    diagnostics: Diagnostics,
}

fn cmd_check(
    root: Option<PathBuf>,
    exclude: &[String],
    json: bool,
    verbose: bool,
) -> Result<ExitCode> {
    let docs_root = resolve_docs_root(root);
    let repo_root = repo_root_of(&docs_root);
    let files = collect_targets(&docs_root, exclude)?;

    if verbose {
        eprintln!(
            "{} checking {} Chinese files under {}",
            "info:".blue().bold(),
            files.len(),
            docs_root.display()
        );
    }
    if !json {
        println!("Verifying {} Chinese documentation files...", files.len());
        println!();
    }

    let mut issues = Vec::new();
    for file in &files {
        match verifier::verify_file(file, &repo_root) {
            Ok(found) => issues.extend(found),
            Err(err) => eprintln!("{} {:#}", "warn:".yellow().bold(), err),
        }
    }

    let diagnostics = Diagnostics {
        files_checked: files.len(),
        issues_found: issues.len(),
    };
    let clean = issues.is_empty();

    if json {
        let result = CheckResult {
            issues,
            diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if clean {
        println!("{} All links verified successfully!", "ok:".green().bold());
        println!("   Checked {} files", diagnostics.files_checked);
        println!("   All Chinese documentation correctly links to Chinese versions");
    } else {
        println!(
            "{} {} issue(s):\n",
            "Found".red().bold(),
            diagnostics.issues_found
        );
        for issue in &issues {
            println!("{issue}");
            println!();
        }
    }

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_fix(
    dry_run: bool,
    interactive: bool,
    root: Option<PathBuf>,
    exclude: &[String],
    verbose: bool,
) -> Result<ExitCode> {
    let docs_root = resolve_docs_root(root);
    let repo_root = repo_root_of(&docs_root);
    let files = collect_targets(&docs_root, exclude)?;

    if verbose {
        eprintln!(
            "{} fixing {} Chinese files under {}",
            "info:".blue().bold(),
            files.len(),
            docs_root.display()
        );
    }

    let mode = if dry_run { " (DRY RUN)" } else { "" };
    println!(
        "Processing {} Chinese documentation files...{}",
        files.len(),
        mode.yellow()
    );
    println!();

    let action = fix_action(dry_run, interactive);
    let mut total_fixes = 0;
    let mut files_changed = 0;

    for file in &files {
        // Plan in dry-run first so interactive mode can show the changes
        // before anything is written.
        let planned = match rewriter::fix_file(file, true) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("{} {:#}", "warn:".yellow().bold(), err);
                continue;
            }
        };
        if planned.fixes == 0 {
            continue;
        }

        let rel = file.strip_prefix(&repo_root).unwrap_or(file);
        println!("{} {}:", action.yellow().bold(), rel.display());
        for change in &planned.changes {
            println!(
                "  Line {}: {} → {}",
                change.line,
                change.old.red(),
                change.new.green()
            );
        }
        println!();

        if !dry_run {
            if interactive {
                let apply = Confirm::new()
                    .with_prompt(format!(
                        "Apply {} fix(es) to {}?",
                        planned.fixes,
                        rel.display()
                    ))
                    .default(true)
                    .interact()?;
                if !apply {
                    continue;
                }
            }
            if let Err(err) = rewriter::fix_file(file, false) {
                eprintln!("{} {:#}", "warn:".yellow().bold(), err);
                continue;
            }
        }

        total_fixes += planned.fixes;
        files_changed += 1;
    }

    if total_fixes > 0 {
        println!(
            "{} {} link(s) in {} file(s)",
            if dry_run { "Would fix" } else { "Fixed" },
            total_fixes,
            files_changed
        );
        if dry_run {
            println!(
                "\n{} Run without --dry-run to apply changes",
                "hint:".cyan().bold()
            );
        }
    } else {
        println!(
            "{} No fixes needed! All links are already correct.",
            "ok:".green().bold()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_scan(root: Option<PathBuf>, exclude: &[String]) -> Result<ExitCode> {
    let docs_root = resolve_docs_root(root);
    let files = collect_targets(&docs_root, exclude)?;

    println!("Would process {} files:", files.len());
    for file in files {
        println!("  {}", file.display());
    }

    Ok(ExitCode::SUCCESS)
}

/// Header verb for a file's change block. Interactive mode prints the block
/// before asking for confirmation, so it must not claim the fix is done.
fn fix_action(dry_run: bool, interactive: bool) -> &'static str {
    if dry_run {
        "Would fix"
    } else if interactive {
        "Fixing"
    } else {
        "Fixed"
    }
}

/// Resolves the documentation root, defaulting to `./docs`. Existence is
/// checked when targets are collected.
fn resolve_docs_root(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| PathBuf::from("docs"))
}

/// Repository root used for relative paths in reports: the parent of the
/// docs root when it has one.
fn repo_root_of(docs_root: &Path) -> PathBuf {
    match docs_root.parent() {
        // A relative root like "docs" has an empty parent; keep reports
        // relative to the working directory in that case.
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => docs_root.to_path_buf(),
    }
}

/// Parses exclude patterns and collects the `.zh.md` files to process.
/// Missing root and zero matching files are setup errors, surfaced from
/// `scanner::collect_targets`.
fn collect_targets(docs_root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = exclude
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("invalid exclude pattern '{p}'")))
        .collect::<Result<Vec<_>>>()?;

    scanner::collect_targets(docs_root, &patterns)
}
