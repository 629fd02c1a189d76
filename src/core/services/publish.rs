//! Dual-repository publisher
//!
//! Drives the whole run in a fixed order:
//!
//! ```text
//! confirm(publish) -> check/sync output repo -> clean -> generate -> copy cname
//!   -> commit+push output -> confirm(update sources) -> commit+push sources
//! ```
//!
//! A declined gate ends the run successfully. Any error ends it at the step
//! that failed; nothing already pushed is rolled back.

use std::fmt;

use crate::config::PublishConfig;
use crate::core::models::{CommitOutcome, Gate, RepoOutcome, Step, commit_message};
use crate::core::ports::{Clock, Confirm, SiteGenerator, VersionControl};
use crate::core::services::build;
use crate::error::{Error, Result};
use crate::output::PublishReport;

/// Stage everything, commit with a timestamped message, and push
///
/// An empty commit is a no-op, but the push still runs so that a run whose
/// earlier push failed can catch up.
pub fn stage_commit_push(
    vcs: &dyn VersionControl,
    remote: &str,
    branch: &str,
    clock: &dyn Clock,
) -> Result<RepoOutcome> {
    vcs.stage_all()?;
    let message = commit_message(clock.now());

    let commit = vcs.commit(&message)?;
    match commit {
        CommitOutcome::Committed => log::info!("Committed \"{message}\" in {}", vcs.root().display()),
        CommitOutcome::NothingToCommit => {
            log::info!("Nothing to commit in {}", vcs.root().display());
        },
    }

    vcs.push(remote, branch)?;
    log::info!("Pushed {} to {remote}/{branch}", vcs.root().display());

    Ok(RepoOutcome {
        remote: remote.to_string(),
        branch: branch.to_string(),
        message,
        commit,
    })
}

/// One publish run wired to its collaborators
pub struct Pipeline<'a> {
    config: &'a PublishConfig,
    sources: &'a dyn VersionControl,
    output: &'a dyn VersionControl,
    generator: &'a dyn SiteGenerator,
    confirm: &'a dyn Confirm,
    clock: &'a dyn Clock,
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", self.config)
            .field("sources", &self.sources.root())
            .field("output", &self.output.root())
            .finish_non_exhaustive()
    }
}

impl<'a> Pipeline<'a> {
    /// Wire a pipeline
    #[must_use]
    pub fn new(
        config: &'a PublishConfig,
        sources: &'a dyn VersionControl,
        output: &'a dyn VersionControl,
        generator: &'a dyn SiteGenerator,
        confirm: &'a dyn Confirm,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            config,
            sources,
            output,
            generator,
            confirm,
            clock,
        }
    }

    /// Run every step in order
    ///
    /// Returns the report on success and on a declined gate; returns the
    /// first fatal error otherwise.
    pub fn run(&self) -> Result<PublishReport> {
        let mut report = PublishReport::default();

        if !self.confirm.confirm(Gate::Publish)? {
            log::info!("Publish declined, nothing changed");
            report.aborted_at = Some(Gate::Publish);
            return Ok(report);
        }

        let output_root = self.config.output_root();

        if self.config.output.sync {
            build::sync_output_repository_ref(
                self.sources,
                self.output,
                &self.config.output.remote,
                &self.config.output.branch,
            )?;
            report.completed.push(Step::SyncOutputRef);
        } else {
            build::ensure_output_repository(self.sources, self.output)?;
        }

        report.cleaned_entries = build::clean_output(&output_root)?;
        report.completed.push(Step::CleanOutput);

        build::generate(self.generator, &self.config.source_root)?;
        report.completed.push(Step::Generate);

        if let Some(cname) = self.config.cname_source() {
            build::copy_cname(&cname, &output_root)?;
            report.completed.push(Step::CopyCname);
        }
        report.generated_files = build::count_generated_files(&output_root)?;

        report.output = Some(stage_commit_push(
            self.output,
            &self.config.output.remote,
            &self.config.output.branch,
            self.clock,
        )?);
        report.completed.push(Step::PublishOutput);

        if !self.confirm.confirm(Gate::UpdateSources)? {
            log::info!("Sources update declined; output repository already pushed");
            report.aborted_at = Some(Gate::UpdateSources);
            return Ok(report);
        }

        let branch = self
            .sources
            .current_branch()?
            .ok_or_else(|| Error::DetachedHead(self.sources.root().to_path_buf()))?;
        report.sources = Some(stage_commit_push(
            self.sources,
            &self.config.sources.remote,
            &branch,
            self.clock,
        )?);
        report.completed.push(Step::PublishSources);

        Ok(report)
    }
}
