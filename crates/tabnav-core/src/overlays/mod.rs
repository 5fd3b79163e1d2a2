//! Modal overlay payloads.
//!
//! Two overlay kinds exist: the onboarding paywall and the global success dialog. Each
//! presentation gets a fresh [`OverlayId`] so a dismissal can target one specific
//! instance and ignore a newer replacement.

mod types;

pub use types::{OverlayId, PaywallPayload, PresentationStyle, SuccessAction, SuccessPayload};
