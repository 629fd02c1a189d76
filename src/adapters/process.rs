//! External process adapter
//!
//! Implements [`CommandRunner`] with `std::process::Command`.

use std::path::Path;
use std::process::Command;

use crate::core::models::ToolOutput;
use crate::core::ports::CommandRunner;
use crate::error::{Error, Result};

/// Runs programs on the host, blocking until they exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ToolOutput> {
        log::debug!("Running `{program} {}` in {}", args.join(" "), cwd.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| Error::Spawn {
                program: program.to_string(),
                source,
            })?;

        let result = ToolOutput {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if result.success() {
            log::trace!("`{}` succeeded", result.command_line());
        } else {
            log::debug!("{result}");
        }
        Ok(result)
    }
}
