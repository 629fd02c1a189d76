//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `process` - Running external programs
//! - `git/` - Git repositories (CLI for changes, libgit2 for inspection)
//! - `generator` - The external static site generator
//! - `prompt` - Terminal confirmation and the system clock

pub mod generator;
pub mod git;
pub mod process;
pub mod prompt;

pub use generator::CommandGenerator;
pub use git::GitRepository;
pub use process::SystemRunner;
pub use prompt::{AssumeYes, SystemClock, TerminalPrompt};
