//! Core publish logic for sitepub
//!
//! The pipeline itself lives here. It never touches git, the generator or the
//! terminal directly; those are reached through the port traits.
//!
//! ## Architecture
//!
//! - `models/` - Pipeline vocabulary (gates, steps, tool output, commit messages)
//! - `services/` - Build orchestration and the dual-repository publisher
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
