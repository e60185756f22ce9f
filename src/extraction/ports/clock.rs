//! Reference clock port for temporal resolution.

use chrono::NaiveDateTime;

/// Source of the wall-clock "now" that relative date phrases resolve
/// against.
///
/// Resolution works on naive wall-clock values only, so implementations
/// report the reading without any timezone conversion.
pub trait ReferenceClock: Send + Sync {
    /// Returns the current wall-clock instant.
    fn wall_clock(&self) -> NaiveDateTime;
}
