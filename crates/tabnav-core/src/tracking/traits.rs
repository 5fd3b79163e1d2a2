//! Tracker trait definition.

use crate::state::events::NavigationEvent;

/// Sink for navigation events.
///
/// Implementors take `&self`; use interior mutability to keep state. Trackers run on
/// the router's thread, in the middle of a router operation, and must not call back
/// into the router.
pub trait NavigationTracker {
    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;

    fn track(&self, event: &NavigationEvent);
}
