//! Tracker lookup by configured name.

use tracing::debug;

use super::backends::LogTracker;
use super::traits::NavigationTracker;

/// Tracker names accepted in `[tracking] tracker`.
pub const VALID_TRACKERS: [&str; 2] = ["log", "none"];

/// Build the tracker configured under `name`.
///
/// Returns `None` for `"none"` and for unknown names; configuration validation rejects
/// unknown names before they get here.
pub fn tracker_from_name(name: &str) -> Option<Box<dyn NavigationTracker>> {
    match name {
        "log" => Some(Box::new(LogTracker)),
        _ => {
            debug!(event = "core.tracking.tracker_disabled", tracker = name);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_tracker_by_name() {
        let tracker = tracker_from_name("log");
        assert_eq!(tracker.map(|t| t.name()), Some("log"));
    }

    #[test]
    fn test_none_disables_tracking() {
        assert!(tracker_from_name("none").is_none());
    }

    #[test]
    fn test_unknown_name_disables_tracking() {
        assert!(tracker_from_name("mixpanel").is_none());
    }

    #[test]
    fn test_every_valid_name_resolves_without_panicking() {
        for name in VALID_TRACKERS {
            let _ = tracker_from_name(name);
        }
    }
}
