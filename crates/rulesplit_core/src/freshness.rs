use chrono::{DateTime, TimeDelta, Utc};

/// Default validity window for every artifact, in seconds (12 hours).
pub const FRESHNESS_WINDOW_SECS: i64 = 43_200;

/// The default validity window as a `TimeDelta`.
pub fn default_window() -> TimeDelta {
    TimeDelta::seconds(FRESHNESS_WINDOW_SECS)
}

/// True when `modified` lies strictly within `window` before `now`.
///
/// An age of exactly `window` is stale. A modification time ahead of `now`
/// counts as age zero.
pub fn is_within_window(modified: DateTime<Utc>, now: DateTime<Utc>, window: TimeDelta) -> bool {
    let age = (now - modified).max(TimeDelta::zero());
    age < window
}
