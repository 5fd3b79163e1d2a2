use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::config::TabnavConfig;
use crate::overlays::{PaywallPayload, PresentationStyle, SuccessPayload};
use crate::routes::{Area, AreaRoute, HomeRoute, OnboardingRoute, ProfileRoute};
use crate::stack::{NavStack, StackEvent};
use crate::state::events::NavigationEvent;
use crate::state::snapshot::{RouterSnapshot, StackSnapshot};
use crate::state::types::{Flow, RouterOptions, Tab};
use crate::tracking::{NavigationTracker, tracker_from_name};

/// The single source of truth for navigation state.
///
/// One router exists per application. State is read through the accessors below and
/// changed only through the capability traits in [`crate::state::routing`], each of
/// which reports its mutation to the tracker.
pub struct Router {
    pub(super) flow: Flow,
    pub(super) selected_tab: Tab,
    pub(super) onboarding: NavStack<OnboardingRoute>,
    pub(super) home: NavStack<HomeRoute>,
    pub(super) profile: NavStack<ProfileRoute>,
    pub(super) paywall: Option<PaywallPayload>,
    pub(super) success: Option<SuccessPayload>,
    pub(super) options: RouterOptions,
    tracker: Option<Box<dyn NavigationTracker>>,
}

impl Router {
    pub fn new() -> Self {
        Self::with_options(RouterOptions::default())
    }

    pub fn with_options(options: RouterOptions) -> Self {
        debug!(
            event = "core.router.created",
            default_tab = %options.default_tab,
            default_success_style = %options.default_success_style,
        );
        Self {
            flow: Flow::default(),
            selected_tab: options.default_tab,
            onboarding: NavStack::new(),
            home: NavStack::new(),
            profile: NavStack::new(),
            paywall: None,
            success: None,
            options,
            tracker: None,
        }
    }

    /// Router configured from a loaded config: options plus the named tracker.
    pub fn from_config(config: &TabnavConfig) -> Self {
        Self::with_options(config.router_options())
            .with_boxed_tracker(tracker_from_name(config.tracking.tracker()))
    }

    pub fn with_tracker(self, tracker: impl NavigationTracker + 'static) -> Self {
        self.with_boxed_tracker(Some(Box::new(tracker)))
    }

    pub fn with_boxed_tracker(mut self, tracker: Option<Box<dyn NavigationTracker>>) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn onboarding_stack(&self) -> &[OnboardingRoute] {
        self.onboarding.entries()
    }

    pub fn home_stack(&self) -> &[HomeRoute] {
        self.home.entries()
    }

    pub fn profile_stack(&self) -> &[ProfileRoute] {
        self.profile.entries()
    }

    /// Number of screens pushed above the root of `area`.
    pub fn depth(&self, area: Area) -> usize {
        match area {
            Area::Onboarding => self.onboarding.len(),
            Area::Home => self.home.len(),
            Area::Profile => self.profile.len(),
        }
    }

    pub fn paywall(&self) -> Option<&PaywallPayload> {
        self.paywall.as_ref()
    }

    pub fn success(&self) -> Option<&SuccessPayload> {
        self.success.as_ref()
    }

    /// The live success payload, only if it is shown with `style`.
    pub fn success_for(&self, style: PresentationStyle) -> Option<&SuccessPayload> {
        self.success
            .as_ref()
            .filter(|payload| payload.presentation_style == style)
    }

    pub fn snapshot(&self) -> RouterSnapshot {
        RouterSnapshot {
            flow: self.flow,
            selected_tab: self.selected_tab,
            onboarding: StackSnapshot::of(&self.onboarding),
            home: StackSnapshot::of(&self.home),
            profile: StackSnapshot::of(&self.profile),
            paywall: self.paywall.clone(),
            success: self.success.clone(),
        }
    }

    /// Report a mutation to the tracker. Tracker panics are contained and logged.
    pub(super) fn emit(&self, nav_event: NavigationEvent) {
        let Some(tracker) = self.tracker.as_deref() else {
            return;
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| tracker.track(&nav_event)));
        if outcome.is_err() {
            warn!(
                event = "core.tracking.track_panicked",
                tracker = tracker.name(),
                kind = %nav_event.kind(),
            );
        }
    }

    pub(super) fn stack_push<R: StackSlot>(&mut self, route: R) {
        debug!(event = "core.router.push", area = %R::AREA, route = ?route);
        let change = R::slot(self).push(route);
        self.emit(R::wrap(change));
    }

    pub(super) fn stack_pop<R: StackSlot>(&mut self, count: usize) {
        let change = R::slot(self).pop(count);
        self.finish_stack_op::<R>("pop", change);
    }

    pub(super) fn stack_pop_to<R: StackSlot>(&mut self, route: &R) {
        let change = R::slot(self).pop_to(route);
        self.finish_stack_op::<R>("pop_to", change);
    }

    pub(super) fn stack_pop_to_root<R: StackSlot>(&mut self) {
        let change = R::slot(self).pop_to_root();
        self.finish_stack_op::<R>("pop_to_root", change);
    }

    fn finish_stack_op<R: StackSlot>(&mut self, op: &'static str, change: Option<StackEvent<R>>) {
        let depth = R::slot(self).len();
        match change {
            Some(change) => {
                debug!(
                    event = "core.router.stack_changed",
                    area = %R::AREA,
                    op = op,
                    depth = depth,
                );
                self.emit(R::wrap(change));
            }
            None => {
                debug!(
                    event = "core.router.stack_unchanged",
                    area = %R::AREA,
                    op = op,
                    depth = depth,
                );
            }
        }
    }

    /// Silently empty the stack behind `tab`.
    pub(super) fn clear_tab_stack(&mut self, tab: Tab) -> usize {
        match tab {
            Tab::Home => self.home.clear(),
            Tab::Profile => self.profile.clear(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("flow", &self.flow)
            .field("selected_tab", &self.selected_tab)
            .field("onboarding", &self.onboarding)
            .field("home", &self.home)
            .field("profile", &self.profile)
            .field("paywall", &self.paywall)
            .field("success", &self.success)
            .field("tracker", &self.tracker.as_ref().map(|t| t.name()))
            .finish()
    }
}

/// Locates the stack holding routes of one area and wraps its changes as events.
pub(super) trait StackSlot: AreaRoute {
    fn slot(router: &mut Router) -> &mut NavStack<Self>;

    fn wrap(change: StackEvent<Self>) -> NavigationEvent;
}

impl StackSlot for OnboardingRoute {
    fn slot(router: &mut Router) -> &mut NavStack<Self> {
        &mut router.onboarding
    }

    fn wrap(change: StackEvent<Self>) -> NavigationEvent {
        NavigationEvent::Onboarding(change)
    }
}

impl StackSlot for HomeRoute {
    fn slot(router: &mut Router) -> &mut NavStack<Self> {
        &mut router.home
    }

    fn wrap(change: StackEvent<Self>) -> NavigationEvent {
        NavigationEvent::Home(change)
    }
}

impl StackSlot for ProfileRoute {
    fn slot(router: &mut Router) -> &mut NavStack<Self> {
        &mut router.profile
    }

    fn wrap(change: StackEvent<Self>) -> NavigationEvent {
        NavigationEvent::Profile(change)
    }
}
