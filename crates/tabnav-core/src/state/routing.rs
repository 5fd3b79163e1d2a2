//! Capability traits, one per navigation area.
//!
//! Screens receive only the capability they need. [`Router`] implements all of them;
//! a test fake can implement just one.

use crate::overlays::{OverlayId, PaywallPayload, PresentationStyle, SuccessAction, SuccessPayload};
use crate::routes::{HomeRoute, OnboardingRoute, ProfileRoute};
use crate::state::store::Router;
use crate::state::types::{Command, Tab};

pub trait OnboardingRouting {
    fn onboarding_push(&mut self, route: OnboardingRoute);
    fn onboarding_pop(&mut self, count: usize);
    fn onboarding_pop_to(&mut self, route: &OnboardingRoute);
    fn onboarding_pop_to_root(&mut self);
    fn present_paywall(&mut self, source: &str, offer_title: &str, offer_subtitle: &str);
    fn dismiss_paywall(&mut self);
    /// Dismiss only if the live paywall is the instance `id`.
    fn dismiss_paywall_instance(&mut self, id: OverlayId);
}

pub trait HomeRouting {
    fn home_push(&mut self, route: HomeRoute);
    fn home_pop(&mut self, count: usize);
    fn home_pop_to(&mut self, route: &HomeRoute);
    fn home_pop_to_root(&mut self);
}

pub trait ProfileRouting {
    fn profile_push(&mut self, route: ProfileRoute);
    fn profile_pop(&mut self, count: usize);
    fn profile_pop_to(&mut self, route: &ProfileRoute);
    fn profile_pop_to_root(&mut self);
}

pub trait SuccessRouting {
    fn present_success_styled(
        &mut self,
        title: &str,
        message: &str,
        primary_button: &str,
        primary_action: SuccessAction,
        style: PresentationStyle,
    );

    /// Style used by [`SuccessRouting::present_success`].
    fn default_success_style(&self) -> PresentationStyle {
        PresentationStyle::Sheet
    }

    fn present_success(
        &mut self,
        title: &str,
        message: &str,
        primary_button: &str,
        primary_action: SuccessAction,
    ) {
        let style = self.default_success_style();
        self.present_success_styled(title, message, primary_button, primary_action, style);
    }

    /// Handle the primary button: close the overlay and run its mapped command.
    fn resolve_success_primary(&mut self);

    /// Close the overlay without running its action.
    fn dismiss_success(&mut self);

    fn dismiss_success_instance(&mut self, id: OverlayId);
}

pub trait TabRouting {
    fn select_tab(&mut self, tab: Tab);
}

pub trait CommandHandling {
    fn handle_command(&mut self, command: Command);
}

impl OnboardingRouting for Router {
    fn onboarding_push(&mut self, route: OnboardingRoute) {
        self.stack_push(route);
    }

    fn onboarding_pop(&mut self, count: usize) {
        self.stack_pop::<OnboardingRoute>(count);
    }

    fn onboarding_pop_to(&mut self, route: &OnboardingRoute) {
        self.stack_pop_to(route);
    }

    fn onboarding_pop_to_root(&mut self) {
        self.stack_pop_to_root::<OnboardingRoute>();
    }

    fn present_paywall(&mut self, source: &str, offer_title: &str, offer_subtitle: &str) {
        self.show_paywall(PaywallPayload::new(source, offer_title, offer_subtitle));
    }

    fn dismiss_paywall(&mut self) {
        self.hide_paywall(None);
    }

    fn dismiss_paywall_instance(&mut self, id: OverlayId) {
        self.hide_paywall(Some(id));
    }
}

impl HomeRouting for Router {
    fn home_push(&mut self, route: HomeRoute) {
        self.stack_push(route);
    }

    fn home_pop(&mut self, count: usize) {
        self.stack_pop::<HomeRoute>(count);
    }

    fn home_pop_to(&mut self, route: &HomeRoute) {
        self.stack_pop_to(route);
    }

    fn home_pop_to_root(&mut self) {
        self.stack_pop_to_root::<HomeRoute>();
    }
}

impl ProfileRouting for Router {
    fn profile_push(&mut self, route: ProfileRoute) {
        self.stack_push(route);
    }

    fn profile_pop(&mut self, count: usize) {
        self.stack_pop::<ProfileRoute>(count);
    }

    fn profile_pop_to(&mut self, route: &ProfileRoute) {
        self.stack_pop_to(route);
    }

    fn profile_pop_to_root(&mut self) {
        self.stack_pop_to_root::<ProfileRoute>();
    }
}

impl SuccessRouting for Router {
    fn present_success_styled(
        &mut self,
        title: &str,
        message: &str,
        primary_button: &str,
        primary_action: SuccessAction,
        style: PresentationStyle,
    ) {
        self.show_success(SuccessPayload::new(
            title,
            message,
            primary_button,
            primary_action,
            style,
        ));
    }

    fn default_success_style(&self) -> PresentationStyle {
        self.options.default_success_style
    }

    fn resolve_success_primary(&mut self) {
        self.resolve_success();
    }

    fn dismiss_success(&mut self) {
        self.hide_success(None);
    }

    fn dismiss_success_instance(&mut self, id: OverlayId) {
        self.hide_success(Some(id));
    }
}

impl TabRouting for Router {
    fn select_tab(&mut self, tab: Tab) {
        self.change_tab(tab);
    }
}

impl CommandHandling for Router {
    fn handle_command(&mut self, command: Command) {
        self.apply_command(command);
    }
}
