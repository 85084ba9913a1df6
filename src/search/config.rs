//! # Search Configuration Module
//!
//! Constants controlling debounce timing and suggestion list sizes.

use std::time::Duration;

/// Default idle interval before a keystroke burst settles (milliseconds)
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Maximum number of project suggestions
pub const MAX_PROJECT_SUGGESTIONS: usize = 4;

/// Maximum number of team suggestions
pub const MAX_TEAM_SUGGESTIONS: usize = 3;

/// Maximum number of suggestions shown in total
pub const MAX_SUGGESTIONS: usize = 6;

/// Default debounce interval as a [`Duration`]
pub fn default_debounce() -> Duration {
    Duration::from_millis(DEFAULT_DEBOUNCE_MS)
}
