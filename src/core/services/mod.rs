//! Publish services
//!
//! Orchestration over the port traits. File-system work on the output
//! directory happens here directly; everything else goes through a port.
//!
//! - [`build`] - Sync, clean, generate, copy the custom-domain marker
//! - [`publish`] - Commit and push both repositories behind the gates

pub mod build;
pub mod publish;

pub use build::{
    clean_output, copy_cname, count_generated_files, ensure_output_repository, generate,
    sync_output_repository_ref,
};
pub use publish::{Pipeline, stage_commit_push};
