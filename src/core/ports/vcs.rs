//! Version control system port
//!
//! Defines the interface for interacting with one repository.

use std::path::Path;

use crate::core::models::CommitOutcome;
use crate::error::Result;

/// Version control system abstraction
///
/// One value per repository: the publisher holds one for the sources
/// repository and one for the nested output repository.
pub trait VersionControl {
    /// Working tree root of this repository
    fn root(&self) -> &Path;

    /// Initialize a registered submodule at `path` (relative to [`root`](Self::root))
    ///
    /// Returns `false` when no submodule is registered at that path.
    fn init_submodule(&self, path: &Path) -> Result<bool>;

    /// Fetch `remote` and check out `branch` at the remote's tip
    ///
    /// When the remote has no such branch yet, `branch` is checked out
    /// locally as is (or created).
    fn sync_to_remote_branch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Stage every change in the working tree, including deletions
    fn stage_all(&self) -> Result<()>;

    /// Commit what is staged
    ///
    /// An empty index is [`CommitOutcome::NothingToCommit`], not an error.
    fn commit(&self, message: &str) -> Result<CommitOutcome>;

    /// Push the current `HEAD` to `branch` on `remote`
    fn push(&self, remote: &str, branch: &str) -> Result<()>;

    /// Get the current branch name, `None` when `HEAD` is detached
    fn current_branch(&self) -> Result<Option<String>>;
}
