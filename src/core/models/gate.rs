//! Confirmation gates
//!
//! A gate blocks the pipeline until the operator answers. Anything but an
//! affirmative answer ends the run successfully at that point.

use serde::Serialize;

/// Interactive checkpoints of the publish pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    /// Before anything is touched
    Publish,
    /// After the output repository has been pushed
    UpdateSources,
}

impl Gate {
    /// Question shown to the operator
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Self::Publish => "Regenerate and publish the site?",
            Self::UpdateSources => "Also commit and push the sources repository?",
        }
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Publish => write!(f, "publish"),
            Self::UpdateSources => write!(f, "update-sources"),
        }
    }
}

/// Whether a line of operator input affirms a gate
///
/// Only `y` (either case, surrounding whitespace ignored) counts as yes.
#[must_use]
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
