//! Common test utilities shared across test types
//!
//! - `mocks.rs` - Scripted implementations of the port traits
//! - `git_repo.rs` - Temporary sources/output repositories with bare remotes
