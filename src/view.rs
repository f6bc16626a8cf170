//! Recent-commits view: state machine and pure rendering.
//!
//! The view starts in `Loading`, takes exactly one completion with the
//! endpoint outcome, and lands in a terminal `Loaded` or `Failed` state.
//! There is no re-fetch and no polling. Rendering is pure string formatting
//! (teardown mid-fetch simply means the completed view is never rendered).
//!
//! One renderer covers both display variants: parsing is always performed,
//! only the styling is conditional on [DisplayMode].

use std::fmt::Write as _;

use console::style;

use crate::api::GitLogResponse;
use crate::conventional::ParsedCommit;

/// How loaded commits are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Raw lines, verbatim.
    Plain,
    /// Parsed rows with the type label color-coded.
    Colored,
}

/// View over one fetch of the recent-commit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogView {
    /// Fetch in flight; render a placeholder.
    Loading,
    /// Fetch failed; carries the user-visible error text.
    Failed(String),
    /// Fetch succeeded; every line already parsed.
    Loaded(Vec<ParsedCommit>),
}

impl LogView {
    /// A fresh view, before its single fetch completes.
    pub fn new() -> Self {
        LogView::Loading
    }

    /// Apply the fetch outcome, moving to a terminal state.
    ///
    /// Success parses every line; failure keeps the response's error text as
    /// the inline message. An empty commit list is a `Loaded` state, not a
    /// failure.
    pub fn complete(self, response: GitLogResponse) -> Self {
        match response {
            GitLogResponse::Ok(list) => LogView::Loaded(
                list.commits
                    .iter()
                    .map(|line| ParsedCommit::parse(line))
                    .collect(),
            ),
            GitLogResponse::Failed(err) => LogView::Failed(err.error),
        }
    }

    /// Render the view to a displayable string.
    pub fn render(&self, mode: DisplayMode) -> String {
        let mut out = String::new();

        match self {
            LogView::Loading => {
                let _ = writeln!(out, "{}", style("Recent Commits").bold());
                let _ = writeln!(out, "Loading git log...");
            }
            LogView::Failed(message) => {
                let _ = writeln!(out, "{}", style("Recent Commits").bold());
                let _ = writeln!(out, "{} {}", style("Error:").red().bold(), message);
            }
            LogView::Loaded(commits) => {
                let _ = writeln!(
                    out,
                    "{}",
                    style(format!("Recent Commits ({})", commits.len())).bold()
                );

                if commits.is_empty() {
                    let _ = writeln!(out, "No commits found");
                    return out;
                }

                for commit in commits {
                    let _ = writeln!(out, "{}", format_row(commit, mode));
                }
            }
        }

        out
    }
}

impl Default for LogView {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a single commit row.
///
/// Plain mode prints the original line verbatim. Colored mode dims the hash
/// and color-codes the conventional type: `feat` as a highlighted green block,
/// `fix` as a red label, `docs` as a blue label, anything else neutral. Lines
/// that did not parse fall back to the verbatim original.
fn format_row(commit: &ParsedCommit, mode: DisplayMode) -> String {
    if mode == DisplayMode::Plain || commit.hash.is_empty() {
        return commit.full_line.clone();
    }

    let hash = style(&commit.hash).dim();

    if commit.r#type.is_empty() {
        return format!("{} {}", hash, commit.message);
    }

    let label = match commit.r#type.as_str() {
        "feat" => style(format!(" {} ", commit.r#type)).black().on_green().to_string(),
        "fix" => style(commit.r#type.clone()).red().bold().to_string(),
        "docs" => style(commit.r#type.clone()).blue().bold().to_string(),
        _ => commit.r#type.clone(),
    };

    format!("{} {} {}", hash, label, commit.message)
}
