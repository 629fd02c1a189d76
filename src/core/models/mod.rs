//! Domain models for sitepub
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Gate`] - An interactive yes/no checkpoint
//! - [`Step`] - A stage of the publish pipeline
//! - [`ToolOutput`] - Captured result of an external program
//! - [`Classification`] - Fatal / no-op / success verdict for a tool run
//! - [`CommitOutcome`] - Whether a commit was created or skipped as empty

mod commit;
mod gate;
mod invocation;
mod step;

pub use commit::{COMMIT_MESSAGE_PREFIX, CommitOutcome, RepoOutcome, TIMESTAMP_FORMAT, commit_message};
pub use gate::{Gate, is_affirmative};
pub use invocation::{Classification, InvocationKind, ToolOutput, classify};
pub use step::Step;
