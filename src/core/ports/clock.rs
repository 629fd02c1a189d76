//! Wall-clock port

use chrono::NaiveDateTime;

/// Source of the local wall-clock time stamped into commit messages
pub trait Clock {
    /// Current local time
    fn now(&self) -> NaiveDateTime;
}
