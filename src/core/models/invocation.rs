//! External tool invocations and their classification
//!
//! Every external program (git, the site generator) is run synchronously and
//! its result captured in a [`ToolOutput`]. [`classify`] is the one place that
//! decides whether a result is a success, a benign no-op, or fatal.

use std::fmt;

/// What an invocation was meant to do
///
/// Some kinds give a non-zero exit a benign meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    /// Any invocation where a non-zero exit is always fatal
    Plain,
    /// `git commit`; "nothing to commit" is a no-op
    Commit,
    /// `git diff --cached --quiet`; exit 0 means nothing is staged
    StagedDiff,
    /// `git rev-parse --verify --quiet`; exit 1 means the ref is absent
    RefProbe,
}

/// Verdict for a finished invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The invocation did what was asked
    Success,
    /// Nothing needed doing; the pipeline carries on
    NoOp,
    /// The pipeline must stop here
    Fatal,
}

/// Captured result of an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Program name
    pub program: String,
    /// Arguments passed
    pub args: Vec<String>,
    /// Exit code, `None` when killed by a signal
    pub status: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl ToolOutput {
    /// Whether the program exited with status 0
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.status, Some(0))
    }

    /// The command line, for messages
    #[must_use]
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    /// Combined diagnostic text (stderr first), trimmed
    #[must_use]
    pub fn diagnostics(&self) -> String {
        let stderr = self.stderr.trim();
        let stdout = self.stdout.trim();
        match (stderr.is_empty(), stdout.is_empty()) {
            (false, false) => format!("{stderr}\n{stdout}"),
            (false, true) => stderr.to_string(),
            (true, false) => stdout.to_string(),
            (true, true) => String::new(),
        }
    }

    fn mentions(&self, needle: &str) -> bool {
        self.stdout.contains(needle) || self.stderr.contains(needle)
    }
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "`{}` exited with status {code}", self.command_line())?,
            None => write!(f, "`{}` was terminated by a signal", self.command_line())?,
        }
        let diagnostics = self.diagnostics();
        if !diagnostics.is_empty() {
            write!(f, "\n{diagnostics}")?;
        }
        Ok(())
    }
}

const NOTHING_TO_COMMIT: [&str; 3] = [
    "nothing to commit",
    "nothing added to commit",
    "no changes added to commit",
];

/// Classify a finished invocation
#[must_use]
pub fn classify(kind: InvocationKind, output: &ToolOutput) -> Classification {
    match (kind, output.status) {
        (InvocationKind::StagedDiff, Some(0)) | (InvocationKind::RefProbe, Some(1)) => {
            Classification::NoOp
        },
        (InvocationKind::StagedDiff, Some(1)) | (_, Some(0)) => Classification::Success,
        (InvocationKind::Commit, Some(_))
            if NOTHING_TO_COMMIT.iter().any(|needle| output.mentions(needle)) =>
        {
            Classification::NoOp
        },
        _ => Classification::Fatal,
    }
}
