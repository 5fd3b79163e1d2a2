use serde::Serialize;

use crate::overlays::{PaywallPayload, SuccessPayload};
use crate::routes::{Area, HomeRoute, OnboardingRoute, ProfileRoute};
use crate::stack::NavStack;
use crate::state::types::{Flow, Tab};

/// Read-only copy of one stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackSnapshot<R> {
    pub depth: usize,
    pub entries: Vec<R>,
}

impl<R: Clone + PartialEq> StackSnapshot<R> {
    pub(crate) fn of(stack: &NavStack<R>) -> Self {
        Self {
            depth: stack.len(),
            entries: stack.entries().to_vec(),
        }
    }
}

/// Point-in-time copy of the whole router, for rendering and diagnostics.
///
/// Snapshots are output only. There is no way to load one back into a router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterSnapshot {
    pub flow: Flow,
    pub selected_tab: Tab,
    pub onboarding: StackSnapshot<OnboardingRoute>,
    pub home: StackSnapshot<HomeRoute>,
    pub profile: StackSnapshot<ProfileRoute>,
    pub paywall: Option<PaywallPayload>,
    pub success: Option<SuccessPayload>,
}

impl RouterSnapshot {
    pub fn depth(&self, area: Area) -> usize {
        match area {
            Area::Onboarding => self.onboarding.depth,
            Area::Home => self.home.depth,
            Area::Profile => self.profile.depth,
        }
    }

    /// True when no area has pushed screens and no overlay is live.
    pub fn is_at_rest(&self) -> bool {
        Area::ALL.iter().all(|area| self.depth(*area) == 0)
            && self.paywall.is_none()
            && self.success.is_none()
    }
}
