//! Publish configuration
//!
//! Everything the pipeline needs to know about where things live, in one
//! explicit value. Read from `.sitepub.toml` in the source root when present;
//! every field has a default, so the file is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::paths;

/// Complete configuration for one publish run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Sources repository root; not stored in the file
    #[serde(skip)]
    pub source_root: PathBuf,
    /// Static site generator invocation
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Output repository settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Sources repository settings
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// How to invoke the static site generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Executable, looked up on `PATH`
    #[serde(default = "default_generator_command")]
    pub command: String,
    /// Arguments
    #[serde(default = "default_generator_args")]
    pub args: Vec<String>,
}

fn default_generator_command() -> String {
    "hexo".to_string()
}

fn default_generator_args() -> Vec<String> {
    vec!["generate".to_string()]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: default_generator_command(),
            args: default_generator_args(),
        }
    }
}

/// Output repository settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the source root
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Remote the output repository pushes to
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Publish branch
    #[serde(default = "default_publish_branch")]
    pub branch: String,
    /// Bring the output repository onto the remote publish branch before cleaning
    #[serde(default = "default_sync")]
    pub sync: bool,
    /// Custom-domain marker copied into the output root, relative to the source root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cname: Option<PathBuf>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_OUTPUT_DIR)
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_publish_branch() -> String {
    "master".to_string()
}

const fn default_sync() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            remote: default_remote(),
            branch: default_publish_branch(),
            sync: default_sync(),
            cname: None,
        }
    }
}

/// Sources repository settings
///
/// The sources repository always pushes its current branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Remote the sources repository pushes to
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
        }
    }
}

impl PublishConfig {
    /// Default configuration rooted at `source_root`
    #[must_use]
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            generator: GeneratorConfig::default(),
            output: OutputConfig::default(),
            sources: SourcesConfig::default(),
        }
    }

    /// Load `.sitepub.toml` from `source_root`, or defaults if it does not exist
    pub fn load(source_root: &Path) -> Result<Self> {
        let path = paths::config_file(source_root);
        if path.exists() {
            Self::load_from(&path, source_root)
        } else {
            log::debug!("No {} in {}, using defaults", paths::CONFIG_FILE, source_root.display());
            Ok(Self::new(source_root))
        }
    }

    /// Load an explicit configuration file for `source_root`
    pub fn load_from(path: &Path, source_root: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.source_root = source_root.to_path_buf();
        config.validate(path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Absolute output directory
    #[must_use]
    pub fn output_root(&self) -> PathBuf {
        self.source_root.join(&self.output.dir)
    }

    /// Custom-domain marker in the source root, when configured
    #[must_use]
    pub fn cname_source(&self) -> Option<PathBuf> {
        self.output.cname.as_ref().map(|cname| self.source_root.join(cname))
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: &str| Error::Config {
            path: path.to_path_buf(),
            message: message.to_string(),
        };

        if self.generator.command.trim().is_empty() {
            return Err(invalid("generator.command must not be empty"));
        }
        if self.output.dir.as_os_str().is_empty() || self.output.dir == Path::new(".") {
            return Err(invalid("output.dir must name a subdirectory of the source root"));
        }
        if self.output.dir.is_absolute() {
            return Err(invalid("output.dir must be relative to the source root"));
        }
        if self.output.branch.trim().is_empty() {
            return Err(invalid("output.branch must not be empty"));
        }
        Ok(())
    }
}

/// Commented template written by `sitepub init`
#[must_use]
pub fn default_toml() -> String {
    format!(
        r#"# sitepub configuration

[generator]
command = "{command}"
args = ["generate"]

[output]
# Nested repository holding the generated site
dir = "{dir}"
remote = "origin"
branch = "master"
# Check out the remote publish branch before regenerating
sync = true
# Custom-domain marker copied into the output directory (uncomment to use):
# cname = "CNAME"

[sources]
remote = "origin"
"#,
        command = default_generator_command(),
        dir = paths::DEFAULT_OUTPUT_DIR,
    )
}
