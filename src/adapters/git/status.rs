//! Repository snapshot for `sitepub status`
//!
//! Read-only; uses libgit2 so nothing is spawned and nothing is modified.

use std::path::Path;

use git2::{Repository, StatusOptions};

use crate::output::RepoStatus;

/// Describe the repository whose working tree is exactly `path`
///
/// A directory that is not a repository (or cannot be opened) is reported
/// as such rather than as an error.
#[must_use]
pub fn describe(name: &str, path: &Path) -> RepoStatus {
    let mut status = RepoStatus {
        name: name.to_string(),
        path: path.display().to_string(),
        branch: None,
        changes: 0,
        is_repository: false,
    };

    let Ok(repo) = Repository::open(path) else {
        return status;
    };

    status.is_repository = true;
    status.branch = branch_of(&repo);
    status.changes = count_changes(&repo).unwrap_or_else(|e| {
        log::warn!("Could not read status of {}: {e}", path.display());
        0
    });
    status
}

fn branch_of(repo: &Repository) -> Option<String> {
    if repo.head_detached().unwrap_or(false) {
        return None;
    }

    match repo.head() {
        Ok(head) => head.shorthand().map(String::from),
        // Unborn branch: HEAD is symbolic but points nowhere yet
        Err(_) => {
            let head = repo.find_reference("HEAD").ok()?;
            head.symbolic_target()
                .and_then(|target| target.strip_prefix("refs/heads/"))
                .map(String::from)
        },
    }
}

fn count_changes(repo: &Repository) -> Result<usize, git2::Error> {
    let mut options = StatusOptions::new();
    options.include_untracked(true).recurse_untracked_dirs(false);
    Ok(repo.statuses(Some(&mut options))?.len())
}
