//! zhlink library for checking and fixing links in Chinese documentation.
//!
//! Chinese variants of Markdown documents carry a `.zh.md` suffix next to
//! their plain `.md` counterparts. Links inside a Chinese document should
//! point at the Chinese variant of their target whenever one exists. The
//! core workflow involves three phases:
//!
//! 1. **Scanning**: Collect `.zh.md` files and extract `[text](path)` links
//!    with their byte spans
//! 2. **Classification**: Decide per link whether a Chinese sibling of the
//!    target exists and the link should be rewritten
//! 3. **Rewriting / verification**: Apply the rewrites in place, or report
//!    them as issues without touching anything
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use zhlink::{rewriter, scanner, verifier};
//!
//! // Collect Chinese documentation files
//! let files = scanner::collect_chinese_files(Path::new("docs"), &[]).unwrap();
//!
//! // Report links that should point at Chinese variants
//! let mut issues = Vec::new();
//! for file in &files {
//!     issues.extend(verifier::verify_file(file, Path::new(".")).unwrap());
//! }
//! println!("Found {} stale links", issues.len());
//!
//! // Or rewrite them in place (dry_run = true only reports)
//! for file in &files {
//!     let outcome = rewriter::fix_file(file, false).unwrap();
//!     println!("{}: {} fix(es)", file.display(), outcome.fixes);
//! }
//! ```

pub mod classifier;
pub mod cli;
pub mod rewriter;
pub mod scanner;
pub mod verifier;

// Re-export commonly used types at crate root
pub use classifier::Verdict;
pub use rewriter::{Change, FixOutcome};
pub use scanner::Link;
pub use verifier::Issue;
