//! Git integration adapter
//!
//! Implements `VersionControl` using git commands run through a
//! [`CommandRunner`]. Read-only inspection goes through `git2`.
//!
//! - [`status`] - Branch and working-tree snapshot for `sitepub status`

pub mod status;

use std::path::{Path, PathBuf};

use crate::adapters::process::SystemRunner;
use crate::core::models::{Classification, CommitOutcome, InvocationKind, ToolOutput, classify};
use crate::core::ports::{CommandRunner, VersionControl};
use crate::error::{Error, Result};

pub use status::describe;

/// Git-based version control for one working tree
#[derive(Debug, Clone)]
pub struct GitRepository<R = SystemRunner> {
    /// Working tree root
    root: PathBuf,
    /// How git is invoked
    runner: R,
}

impl GitRepository {
    /// Create a git adapter for the working tree at `root`
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self::with_runner(root, SystemRunner)
    }

    /// Create a git adapter for `root`, failing unless it is a repository
    pub fn open(root: PathBuf) -> Result<Self> {
        git2::Repository::open(&root)?;
        Ok(Self::new(root))
    }
}

impl<R: CommandRunner> GitRepository<R> {
    /// Create a git adapter that invokes git through `runner`
    #[must_use]
    pub const fn with_runner(root: PathBuf, runner: R) -> Self {
        Self { root, runner }
    }

    fn git(&self, args: &[&str]) -> Result<ToolOutput> {
        self.runner.run("git", args, &self.root)
    }

    /// Run git, mapping a fatal result through `on_fatal`
    fn git_classified(
        &self,
        kind: InvocationKind,
        args: &[&str],
        on_fatal: impl FnOnce(ToolOutput) -> Error,
    ) -> Result<Classification> {
        let output = self.git(args)?;
        match classify(kind, &output) {
            Classification::Fatal => Err(on_fatal(output)),
            verdict => Ok(verdict),
        }
    }

    fn sync_error(&self) -> impl FnOnce(ToolOutput) -> Error + '_ {
        move |output| Error::Sync {
            repo: self.root.clone(),
            output: Box::new(output),
        }
    }

    fn ref_exists(&self, reference: &str) -> Result<bool> {
        let verdict = self.git_classified(
            InvocationKind::RefProbe,
            &["rev-parse", "--verify", "--quiet", reference],
            self.sync_error(),
        )?;
        Ok(verdict == Classification::Success)
    }

    /// Put `HEAD` on local `branch` when the remote has no such branch yet
    fn switch_local_branch(&self, branch: &str) -> Result<()> {
        if self.current_branch()?.as_deref() == Some(branch) {
            return Ok(());
        }

        let local_ref = format!("refs/heads/{branch}");
        let args: Vec<&str> = if !self.ref_exists("HEAD")? {
            // Unborn HEAD: nothing to check out, just point HEAD at the branch
            vec!["symbolic-ref", "HEAD", local_ref.as_str()]
        } else if self.ref_exists(&local_ref)? {
            vec!["checkout", "--force", branch]
        } else {
            vec!["checkout", "--force", "-b", branch]
        };
        self.git_classified(InvocationKind::Plain, &args, self.sync_error())?;
        Ok(())
    }
}

impl<R: CommandRunner> VersionControl for GitRepository<R> {
    fn root(&self) -> &Path {
        &self.root
    }

    fn init_submodule(&self, path: &Path) -> Result<bool> {
        let repo = git2::Repository::open(&self.root)?;
        // A bare gitlink without a .gitmodules entry has no url to clone from
        let registered = repo
            .submodules()?
            .iter()
            .any(|sm| sm.path() == path && sm.url().is_some());
        if !registered {
            return Ok(false);
        }

        let path_arg = path.to_string_lossy();
        self.git_classified(
            InvocationKind::Plain,
            &["submodule", "update", "--init", "--", &*path_arg],
            |output| Error::Sync {
                repo: self.root.join(path),
                output: Box::new(output),
            },
        )?;
        Ok(true)
    }

    fn sync_to_remote_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.git_classified(InvocationKind::Plain, &["fetch", remote], self.sync_error())?;

        if !self.ref_exists(&format!("refs/remotes/{remote}/{branch}"))? {
            log::info!("{remote}/{branch} does not exist yet; the first push will create it");
            return self.switch_local_branch(branch);
        }

        let start_point = format!("{remote}/{branch}");
        self.git_classified(
            InvocationKind::Plain,
            &["checkout", "--force", "-B", branch, start_point.as_str()],
            self.sync_error(),
        )?;
        Ok(())
    }

    fn stage_all(&self) -> Result<()> {
        self.git_classified(InvocationKind::Plain, &["add", "--all"], Error::tool)?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<CommitOutcome> {
        let staged =
            self.git_classified(InvocationKind::StagedDiff, &["diff", "--cached", "--quiet"], Error::tool)?;
        if staged == Classification::NoOp {
            return Ok(CommitOutcome::NothingToCommit);
        }

        match self.git_classified(InvocationKind::Commit, &["commit", "-m", message], Error::tool)? {
            Classification::NoOp => Ok(CommitOutcome::NothingToCommit),
            _ => Ok(CommitOutcome::Committed),
        }
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        let refspec = format!("HEAD:refs/heads/{branch}");
        self.git_classified(InvocationKind::Plain, &["push", remote, refspec.as_str()], |output| {
            Error::Push {
                remote: remote.to_string(),
                branch: branch.to_string(),
                output: Box::new(output),
            }
        })?;
        Ok(())
    }

    fn current_branch(&self) -> Result<Option<String>> {
        let output = self.git(&["branch", "--show-current"])?;
        if classify(InvocationKind::Plain, &output) == Classification::Fatal {
            return Err(Error::tool(output));
        }

        let branch = output.stdout.trim().to_string();
        if branch.is_empty() {
            Ok(None) // Detached HEAD
        } else {
            Ok(Some(branch))
        }
    }
}
