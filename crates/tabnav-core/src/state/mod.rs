//! Router state machine.
//!
//! [`Router`] owns flow, tab, the per-area stacks and the overlay slots. Mutations go
//! through the capability traits in [`routing`]; each applied mutation produces one
//! [`NavigationEvent`] for the tracker.

mod dispatch;
pub mod errors;
pub mod events;
mod handle;
mod overlays;
pub mod routing;
mod snapshot;
mod store;
pub mod types;


pub use errors::HandleError;
pub use events::NavigationEvent;
pub use handle::RouterHandle;
pub use routing::{
    CommandHandling, HomeRouting, OnboardingRouting, ProfileRouting, SuccessRouting, TabRouting,
};
pub use snapshot::{RouterSnapshot, StackSnapshot};
pub use store::Router;
pub use types::{Command, Flow, RouterOptions, Tab};
