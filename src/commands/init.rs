//! Write a default configuration file

use std::fs;
use std::path::Path;

use sitepub::output::{OperationResult, OutputMode};
use sitepub::{config, paths};

/// Create `.sitepub.toml` in the sources repository
pub fn init(source_root: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::config_file(source_root);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to reinitialize.",
                paths::CONFIG_FILE
            ),
        }
        .render(mode);
        return Ok(());
    }

    fs::write(&path, config::default_toml())?;
    log::debug!("Wrote {}", path.display());

    OperationResult {
        success: true,
        message: format!(
            "Created {}\n\nEdit [generator] to match your site generator, then run: sitepub",
            paths::CONFIG_FILE
        ),
    }
    .render(mode);
    Ok(())
}
