//! tabnav-core: navigation router for a multi-flow, tabbed application
//!
//! One [`Router`] holds the active flow, the selected tab, a push/pop stack per
//! navigation area and the modal overlay slots. Screens drive it through narrow
//! capability traits, and every applied mutation is reported to an optional
//! [`NavigationTracker`].
//!
//! # Main Entry Points
//!
//! - [`state`] - Router state, capability traits, commands and events
//! - [`routes`] - Per-area route vocabularies
//! - [`overlays`] - Paywall and success overlay payloads
//! - [`tracking`] - Tracker trait and built-in trackers
//! - [`script`] - JSON navigation scripts and built-in recipes
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod logging;
pub mod overlays;
pub mod routes;
pub mod script;
pub mod stack;
pub mod state;
pub mod tracking;

pub use config::{ConfigError, TabnavConfig};
pub use errors::TabnavError;
pub use overlays::{OverlayId, PaywallPayload, PresentationStyle, SuccessAction, SuccessPayload};
pub use routes::{AnyRoute, Area, AreaRoute, HomeRoute, OnboardingRoute, ProfileRoute};
pub use script::{Recipe, Script, ScriptError, Step};
pub use stack::{NavStack, StackEvent};
pub use state::{
    Command, CommandHandling, Flow, HandleError, HomeRouting, NavigationEvent, OnboardingRouting,
    ProfileRouting, Router, RouterHandle, RouterOptions, RouterSnapshot, StackSnapshot,
    SuccessRouting, Tab, TabRouting,
};
pub use tracking::{FanOutTracker, LogTracker, NavigationTracker, RecordingTracker};
