//! Static site generator adapter
//!
//! Runs the configured generator command with the source root as working
//! directory. Only the exit status is interpreted.

use std::path::Path;

use crate::adapters::process::SystemRunner;
use crate::config::GeneratorConfig;
use crate::core::models::{Classification, InvocationKind, classify};
use crate::core::ports::{CommandRunner, SiteGenerator};
use crate::error::{Error, Result};

/// Generator invoked as an external command
#[derive(Debug, Clone)]
pub struct CommandGenerator<R = SystemRunner> {
    command: String,
    args: Vec<String>,
    runner: R,
}

impl CommandGenerator {
    /// Generator from configuration, run on the host
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> CommandGenerator<R> {
    /// Generator from configuration, run through `runner`
    #[must_use]
    pub fn with_runner(config: &GeneratorConfig, runner: R) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            runner,
        }
    }
}

impl<R: CommandRunner> SiteGenerator for CommandGenerator<R> {
    fn generate(&self, project_root: &Path) -> Result<()> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        let output = self.runner.run(&self.command, &args, project_root)?;

        match classify(InvocationKind::Plain, &output) {
            Classification::Fatal => Err(Error::Generator(Box::new(output))),
            _ => {
                log::debug!("{}", output.stdout.trim());
                Ok(())
            },
        }
    }
}
