//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CommitOutcome, Gate, RepoOutcome, Step};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a publish run that finished without a fatal error
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    /// Steps that completed, in order
    pub completed: Vec<Step>,
    /// Gate that was declined, if the run stopped early
    pub aborted_at: Option<Gate>,
    /// Top-level entries removed from the output directory
    pub cleaned_entries: usize,
    /// Files present in the output directory after generation
    pub generated_files: usize,
    /// Output repository result, once it has been pushed
    pub output: Option<RepoOutcome>,
    /// Sources repository result, once it has been pushed
    pub sources: Option<RepoOutcome>,
}

impl PublishReport {
    /// Whether a gate ended the run
    #[must_use]
    pub const fn was_declined(&self) -> bool {
        self.aborted_at.is_some()
    }

    /// Whether `step` completed
    #[must_use]
    pub fn has_completed(&self, step: Step) -> bool {
        self.completed.contains(&step)
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.aborted_at == Some(Gate::Publish) {
            println!("Publish cancelled. Nothing was changed.");
            return;
        }

        if self.has_completed(Step::Generate) {
            println!(
                "Generated {} file(s) (removed {} stale entr{}).",
                self.generated_files,
                self.cleaned_entries,
                if self.cleaned_entries == 1 { "y" } else { "ies" }
            );
        }

        if let Some(outcome) = &self.output {
            render_repo("Output", outcome);
        }

        match (&self.sources, self.aborted_at) {
            (Some(outcome), _) => render_repo("Sources", outcome),
            (None, Some(Gate::UpdateSources)) => {
                println!("{} sources repository not updated", "Skipped:".yellow());
                println!("  Run sitepub again to commit and push it.");
            },
            _ => {},
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn render_repo(label: &str, outcome: &RepoOutcome) {
    match outcome.commit {
        CommitOutcome::Committed => println!(
            "{} {} -> {}/{} ({})",
            "Published:".green().bold(),
            label,
            outcome.remote,
            outcome.branch,
            outcome.message
        ),
        CommitOutcome::NothingToCommit => println!(
            "{} {} -> {}/{} (nothing new to commit)",
            "Up to date:".green(),
            label,
            outcome.remote,
            outcome.branch
        ),
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Snapshot of one repository for `sitepub status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoStatus {
    /// Which repository this is (`sources` or `output`)
    pub name: String,
    /// Working tree root
    pub path: String,
    /// Current branch, `None` when detached or not a repository
    pub branch: Option<String>,
    /// Number of changed or untracked paths
    pub changes: usize,
    /// Whether the directory is a git repository at all
    pub is_repository: bool,
}

/// Result of `sitepub status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    /// Sources repository
    pub sources: RepoStatus,
    /// Output repository
    pub output: RepoStatus,
    /// Configured publish branch
    pub publish_branch: String,
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for repo in [&self.sources, &self.output] {
                    render_status(repo);
                }
                println!("Publish branch: {}", self.publish_branch);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

fn render_status(repo: &RepoStatus) {
    println!("{} ({})", repo.name.bold(), repo.path);
    if !repo.is_repository {
        println!("  {}", "not a git repository".red());
        return;
    }
    println!("  Branch:  {}", repo.branch.as_deref().unwrap_or("(detached)"));
    if repo.changes == 0 {
        println!("  Changes: clean");
    } else {
        println!("  Changes: {} path(s)", repo.changes);
    }
}
