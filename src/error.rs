//! Error types for the publish pipeline
//!
//! Every variant is fatal: the pipeline stops at the step that produced it.
//! Declined gates and empty commits are not errors and never show up here.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::ToolOutput;

/// Result alias used across the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal pipeline errors
#[derive(Debug, Error)]
pub enum Error {
    /// An external program could not be started at all
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// A version-control invocation exited unsuccessfully
    #[error("{0}")]
    Tool(Box<ToolOutput>),

    /// The static site generator exited unsuccessfully
    #[error("site generator failed: {0}")]
    Generator(Box<ToolOutput>),

    /// The output repository could not be brought onto the publish branch
    #[error("could not sync output repository {}: {output}", repo.display())]
    Sync {
        /// Output repository root
        repo: PathBuf,
        /// Diagnostics from the failed invocation
        output: Box<ToolOutput>,
    },

    /// The output directory is neither a repository nor a registered submodule
    #[error("{} is not a git repository (and not a registered submodule)", .0.display())]
    NotARepository(PathBuf),

    /// A push was rejected by the remote
    #[error("push to {remote}/{branch} was rejected: {output}")]
    Push {
        /// Remote name
        remote: String,
        /// Remote branch
        branch: String,
        /// Diagnostics from git
        output: Box<ToolOutput>,
    },

    /// The sources repository has no current branch to push
    #[error("{} is in detached HEAD state; check out a branch before publishing", .0.display())]
    DetachedHead(PathBuf),

    /// The configured custom-domain marker file does not exist
    #[error("custom domain file not found: {}", .0.display())]
    MissingCname(PathBuf),

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {}: {message}", path.display())]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Filesystem error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the output tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Error from libgit2 while inspecting a repository
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

impl Error {
    /// Wrap a failed version-control invocation
    #[must_use]
    pub fn tool(output: ToolOutput) -> Self {
        Self::Tool(Box::new(output))
    }
}
