//! Built-in tracker implementations.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::{info, warn};

use super::traits::NavigationTracker;
use crate::state::events::NavigationEvent;

/// Writes every navigation event to the structured log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracker;

impl NavigationTracker for LogTracker {
    fn name(&self) -> &'static str {
        "log"
    }

    fn track(&self, nav_event: &NavigationEvent) {
        info!(
            event = "core.tracking.navigation_event",
            kind = %nav_event.kind(),
            detail = ?nav_event,
        );
    }
}

/// Keeps events in memory.
///
/// Clones share one buffer, so a caller can hand one clone to the router and read the
/// recorded events through another.
#[derive(Debug, Default, Clone)]
pub struct RecordingTracker {
    events: Rc<RefCell<Vec<NavigationEvent>>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Return and forget everything recorded so far.
    pub fn take(&self) -> Vec<NavigationEvent> {
        self.events.take()
    }
}

impl NavigationTracker for RecordingTracker {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn track(&self, event: &NavigationEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Forwards each event to several trackers in order.
///
/// A tracker that panics is logged and skipped; the ones after it still see the event.
#[derive(Default)]
pub struct FanOutTracker {
    trackers: Vec<Box<dyn NavigationTracker>>,
}

impl FanOutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, tracker: impl NavigationTracker + 'static) -> Self {
        self.trackers.push(Box::new(tracker));
        self
    }

    pub fn with_boxed(mut self, tracker: Option<Box<dyn NavigationTracker>>) -> Self {
        self.trackers.extend(tracker);
        self
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}

impl NavigationTracker for FanOutTracker {
    fn name(&self) -> &'static str {
        "fan_out"
    }

    fn track(&self, event: &NavigationEvent) {
        for tracker in &self.trackers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| tracker.track(event)));
            if outcome.is_err() {
                warn!(
                    event = "core.tracking.track_panicked",
                    tracker = tracker.name(),
                    kind = %event.kind(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_tracker_clones_share_buffer() {
        let tracker = RecordingTracker::new();
        let sink = tracker.clone();
        sink.track(&NavigationEvent::PaywallDismissed);
        assert_eq!(tracker.events(), vec![NavigationEvent::PaywallDismissed]);
    }

    #[test]
    fn test_recording_tracker_take_drains() {
        let tracker = RecordingTracker::new();
        tracker.track(&NavigationEvent::SuccessDismissed);
        assert_eq!(tracker.take().len(), 1);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_fan_out_forwards_to_every_tracker() {
        let first = RecordingTracker::new();
        let second = RecordingTracker::new();
        let fan_out = FanOutTracker::new()
            .with(first.clone())
            .with_boxed(None)
            .with_boxed(Some(Box::new(second.clone())));
        assert_eq!(fan_out.len(), 2);

        fan_out.track(&NavigationEvent::PaywallDismissed);

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    struct PanickingTracker;

    impl NavigationTracker for PanickingTracker {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn track(&self, _event: &NavigationEvent) {
            panic!("tracker failure");
        }
    }

    #[test]
    fn test_fan_out_continues_after_panicking_tracker() {
        let recorded = RecordingTracker::new();
        let fan_out = FanOutTracker::new()
            .with(PanickingTracker)
            .with(recorded.clone());

        fan_out.track(&NavigationEvent::PaywallDismissed);
        fan_out.track(&NavigationEvent::SuccessDismissed);

        assert_eq!(
            recorded.events(),
            vec![
                NavigationEvent::PaywallDismissed,
                NavigationEvent::SuccessDismissed
            ]
        );
    }

    #[test]
    fn test_router_events_reach_tracker_behind_panicking_sibling() {
        use crate::routes::HomeRoute;
        use crate::state::routing::HomeRouting;
        use crate::stack::StackEvent;
        use crate::state::Router;

        let recorded = RecordingTracker::new();
        let mut router = Router::new().with_tracker(
            FanOutTracker::new()
                .with(PanickingTracker)
                .with(recorded.clone()),
        );

        router.home_push(HomeRoute::Filters);

        assert_eq!(router.home_stack(), &[HomeRoute::Filters]);
        assert_eq!(
            recorded.events(),
            vec![NavigationEvent::Home(StackEvent::Pushed {
                route: HomeRoute::Filters
            })]
        );
    }

    #[test]
    fn test_log_tracker_does_not_panic_without_subscriber() {
        LogTracker.track(&NavigationEvent::SuccessDismissed);
        assert_eq!(LogTracker.name(), "log");
    }
}
