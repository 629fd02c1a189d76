//! Build orchestration
//!
//! Brings the output directory to a freshly generated state: sync the nested
//! repository, wipe everything but its git metadata, run the generator, and
//! optionally drop the custom-domain marker in.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::core::ports::{SiteGenerator, VersionControl};
use crate::error::{Error, Result};
use crate::paths;

/// Make sure the output directory is a repository of its own
///
/// Without its own git metadata every git command in the output directory
/// would act on the enclosing sources repository. A directory registered as a
/// submodule of the sources repository is initialized; anything else is
/// [`Error::NotARepository`].
pub fn ensure_output_repository(sources: &dyn VersionControl, output: &dyn VersionControl) -> Result<()> {
    let output_root = output.root();
    if paths::has_git_entry(output_root) {
        return Ok(());
    }

    let relative = output_root.strip_prefix(sources.root()).unwrap_or(output_root);
    log::info!("Initializing submodule {}", relative.display());
    if sources.init_submodule(relative)? && paths::has_git_entry(output_root) {
        Ok(())
    } else {
        Err(Error::NotARepository(output_root.to_path_buf()))
    }
}

/// Bring the output repository onto its remote publish branch
///
/// Runs [`ensure_output_repository`] first. Any failure is fatal.
pub fn sync_output_repository_ref(
    sources: &dyn VersionControl,
    output: &dyn VersionControl,
    remote: &str,
    branch: &str,
) -> Result<()> {
    ensure_output_repository(sources, output)?;

    log::info!("Syncing {} to {remote}/{branch}", output.root().display());
    output.sync_to_remote_branch(remote, branch)
}

/// Remove every entry of the output directory except its git metadata
///
/// A missing directory is created; an empty one is left alone. Returns the
/// number of top-level entries removed.
pub fn clean_output(output_root: &Path) -> Result<usize> {
    if !output_root.exists() {
        log::debug!("{} does not exist, creating it", output_root.display());
        fs::create_dir_all(output_root)?;
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(output_root)? {
        let entry = entry?;
        if entry.file_name() == paths::GIT_ENTRY {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }

    log::debug!("Removed {removed} entries from {}", output_root.display());
    Ok(removed)
}

/// Run the generator against `source_root`
pub fn generate(generator: &dyn SiteGenerator, source_root: &Path) -> Result<()> {
    log::info!("Generating site from {}", source_root.display());
    generator.generate(source_root)
}

/// Copy the custom-domain marker verbatim into the output root
pub fn copy_cname(source: &Path, output_root: &Path) -> Result<()> {
    if !source.is_file() {
        return Err(Error::MissingCname(source.to_path_buf()));
    }

    let file_name = source
        .file_name()
        .ok_or_else(|| Error::MissingCname(source.to_path_buf()))?;
    fs::copy(source, output_root.join(file_name))?;
    log::debug!("Copied {} into {}", source.display(), output_root.display());
    Ok(())
}

/// Count the generated files under `output_root`, ignoring git metadata
pub fn count_generated_files(output_root: &Path) -> Result<usize> {
    let mut count = 0;
    let walker = WalkDir::new(output_root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.depth() != 1 || e.file_name() != paths::GIT_ENTRY);

    for entry in walker {
        if entry?.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}
