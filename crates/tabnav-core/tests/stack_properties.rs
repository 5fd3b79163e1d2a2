//! Property tests for router invariants.
//!
//! Uses proptest to verify:
//! 1. Pop clamping: `pop(n)` leaves `max(0, len - n)` entries and never faults
//! 2. Push/pop inverse: `push(r); pop(1)` restores the prior stack
//! 3. No-op silence: operations that change nothing emit nothing
//! 4. Command reset: commands leave every stack empty from any state

use proptest::prelude::*;
use tabnav_core::{
    Command, CommandHandling, Flow, HomeRoute, HomeRouting, NavStack, OnboardingRoute,
    OnboardingRouting, ProfileRoute, ProfileRouting, RecordingTracker, Router, Tab,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_home_route() -> impl Strategy<Value = HomeRoute> {
    prop_oneof![
        (0u64..5).prop_map(|id| HomeRoute::Details { id }),
        Just(HomeRoute::Filters),
    ]
}

fn arb_home_stack() -> impl Strategy<Value = Vec<HomeRoute>> {
    prop::collection::vec(arb_home_route(), 0..12)
}

fn arb_tab() -> impl Strategy<Value = Tab> {
    prop_oneof![Just(Tab::Home), Just(Tab::Profile)]
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        arb_tab().prop_map(|tab| Command::GoAuthorizedRoot { tab }),
        Just(Command::LogoutToOnboarding),
    ]
}

/// A random walk of router mutations, encoded as small integers.
fn arb_ops() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..8, 0u8..4), 0..30)
}

fn stack_from(routes: &[HomeRoute]) -> NavStack<HomeRoute> {
    let mut stack = NavStack::new();
    for route in routes {
        stack.push(route.clone());
    }
    stack
}

fn drive(router: &mut Router, ops: &[(u8, u8)]) {
    for &(op, arg) in ops {
        match op {
            0 => router.onboarding_push(OnboardingRoute::Step2),
            1 => router.home_push(HomeRoute::Details { id: u64::from(arg) }),
            2 => router.profile_push(ProfileRoute::Notifications),
            3 => router.home_pop(usize::from(arg)),
            4 => router.present_paywall("walk", "Offer", "Trial"),
            5 => router.handle_command(Command::GoAuthorizedRoot { tab: Tab::Profile }),
            6 => router.profile_pop_to(&ProfileRoute::Edit),
            _ => router.onboarding_pop(usize::from(arg)),
        }
    }
}

// ── 1. Pop clamping ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn pop_clamps_to_depth(routes in arb_home_stack(), n in 0usize..20) {
        let mut stack = stack_from(&routes);
        let event = stack.pop(n);
        prop_assert_eq!(stack.len(), routes.len().saturating_sub(n));
        prop_assert_eq!(event.is_some(), n > 0 && !routes.is_empty());
        prop_assert_eq!(stack.entries(), &routes[..stack.len()]);
    }
}

// ── 2. Push/pop inverse ──────────────────────────────────────────────

proptest! {
    #[test]
    fn push_then_pop_restores(routes in arb_home_stack(), extra in arb_home_route()) {
        let mut stack = stack_from(&routes);
        let before = stack.clone();
        stack.push(extra);
        stack.pop(1);
        prop_assert_eq!(stack, before);
    }
}

// ── 3. No-op silence ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn pop_to_absent_or_top_emits_nothing(routes in arb_home_stack(), target in arb_home_route()) {
        let tracker = RecordingTracker::new();
        let mut router = Router::new().with_tracker(tracker.clone());
        for route in &routes {
            router.home_push(route.clone());
        }
        tracker.take();

        let absent = !routes.contains(&target);
        let on_top = routes.last() == Some(&target);
        router.home_pop_to(&target);

        if absent || on_top {
            prop_assert_eq!(router.home_stack(), routes.as_slice());
            prop_assert!(tracker.is_empty());
        } else {
            prop_assert_eq!(router.home_stack().last(), Some(&target));
            prop_assert_eq!(tracker.len(), 1);
        }
    }

    #[test]
    fn pop_to_root_is_idempotent(routes in arb_home_stack()) {
        let tracker = RecordingTracker::new();
        let mut router = Router::new().with_tracker(tracker.clone());
        for route in &routes {
            router.home_push(route.clone());
        }
        router.home_pop_to_root();
        let after_first = tracker.len();
        router.home_pop_to_root();
        prop_assert!(router.home_stack().is_empty());
        prop_assert_eq!(tracker.len(), after_first);
    }
}

// ── 4. Command reset ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn commands_reset_from_any_state(ops in arb_ops(), command in arb_command()) {
        let mut router = Router::new();
        drive(&mut router, &ops);

        router.handle_command(command);

        let snapshot = router.snapshot();
        prop_assert_eq!(snapshot.onboarding.depth, 0);
        prop_assert_eq!(snapshot.home.depth, 0);
        prop_assert_eq!(snapshot.profile.depth, 0);
        prop_assert!(snapshot.paywall.is_none());
        match command {
            Command::GoAuthorizedRoot { tab } => {
                prop_assert_eq!(snapshot.flow, Flow::Authorized);
                prop_assert_eq!(snapshot.selected_tab, tab);
            }
            Command::LogoutToOnboarding => {
                prop_assert_eq!(snapshot.flow, Flow::Onboarding);
                prop_assert_eq!(snapshot.selected_tab, Tab::Home);
            }
        }
    }
}
