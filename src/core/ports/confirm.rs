//! Confirmation port

use crate::core::models::Gate;
use crate::error::Result;

/// Two-state confirmation capability
///
/// Answers `true` to proceed past `gate`. Anything else ends the run
/// gracefully.
pub trait Confirm {
    /// Ask the operator about `gate` and block until answered
    fn confirm(&self, gate: Gate) -> Result<bool>;
}
