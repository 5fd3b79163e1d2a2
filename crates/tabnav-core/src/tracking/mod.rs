//! Navigation event tracking.
//!
//! The router reports every mutation to an optional [`NavigationTracker`]. Tracking is
//! fire-and-forget: a tracker returns nothing, and a panicking tracker is logged at
//! warn level without affecting router state.

pub mod backends;
pub mod registry;
pub mod traits;

pub use backends::{FanOutTracker, LogTracker, RecordingTracker};
pub use registry::{VALID_TRACKERS, tracker_from_name};
pub use traits::NavigationTracker;
