//! External process port

use std::path::Path;

use crate::core::models::ToolOutput;
use crate::error::Result;

/// Runs an external program synchronously and captures its output
///
/// There is no timeout: a hung program hangs the caller.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd` and wait for it to exit
    ///
    /// A non-zero exit is not an error here; callers classify the
    /// returned [`ToolOutput`]. Only a failure to start the program is.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ToolOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ToolOutput> {
        (**self).run(program, args, cwd)
    }
}
