//! Port traits (interfaces) for external collaborators
//!
//! The pipeline depends only on these traits. Implementations live in the
//! `adapters` module; tests substitute scripted ones.
//!
//! - [`CommandRunner`] - run an external program to completion
//! - [`VersionControl`] - one git repository
//! - [`SiteGenerator`] - the external static site generator
//! - [`Confirm`] - the operator answering a gate
//! - [`Clock`] - wall-clock time for commit messages

mod clock;
mod confirm;
mod generator;
mod runner;
mod vcs;

pub use clock::Clock;
pub use confirm::Confirm;
pub use generator::SiteGenerator;
pub use runner::CommandRunner;
pub use vcs::VersionControl;
