//! Command implementations

mod init;
mod publish;
mod status;

use std::path::Path;

use sitepub::config::PublishConfig;

pub use init::init;
pub use publish::publish;
pub use status::status;

/// Load configuration from an explicit file or from the source root
fn load_config(source_root: &Path, config_path: Option<&Path>) -> anyhow::Result<PublishConfig> {
    let config = match config_path {
        Some(path) => PublishConfig::load_from(path, source_root)?,
        None => PublishConfig::load(source_root)?,
    };
    Ok(config)
}
