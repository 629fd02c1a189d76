//! Show the state of both repositories

use std::path::Path;

use sitepub::adapters::git::describe;
use sitepub::output::{OutputMode, StatusResult};

use super::load_config;

/// Print branch and working-tree state of the sources and output repositories
pub fn status(source_root: &Path, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = load_config(source_root, config_path)?;

    StatusResult {
        sources: describe("sources", &config.source_root),
        output: describe("output", &config.output_root()),
        publish_branch: config.output.branch.clone(),
    }
    .render(mode);
    Ok(())
}
