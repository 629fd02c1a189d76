//! Run the publish pipeline

use std::path::Path;

use anyhow::Context;
use sitepub::adapters::{AssumeYes, CommandGenerator, GitRepository, SystemClock, TerminalPrompt};
use sitepub::core::ports::Confirm;
use sitepub::core::services::Pipeline;
use sitepub::output::OutputMode;

use super::load_config;

/// Regenerate the site and publish both repositories
pub fn publish(
    source_root: &Path,
    config_path: Option<&Path>,
    assume_yes: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = load_config(source_root, config_path)?;

    let sources = GitRepository::open(config.source_root.clone()).with_context(|| {
        format!("{} is not the root of a git repository", config.source_root.display())
    })?;
    let output = GitRepository::new(config.output_root());
    let generator = CommandGenerator::from_config(&config.generator);
    let confirm: &dyn Confirm = if assume_yes { &AssumeYes } else { &TerminalPrompt };

    let report = Pipeline::new(&config, &sources, &output, &generator, confirm, &SystemClock)
        .run()
        .context("publish failed")?;

    report.render(mode);
    Ok(())
}
