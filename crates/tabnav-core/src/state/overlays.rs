use tracing::{debug, info};

use crate::overlays::{OverlayId, PaywallPayload, SuccessPayload};
use crate::state::events::NavigationEvent;
use crate::state::store::Router;

impl Router {
    pub(super) fn show_paywall(&mut self, payload: PaywallPayload) {
        info!(
            event = "core.router.paywall_presented",
            source = %payload.source,
            overlay_id = %payload.id(),
            replaced = self.paywall.is_some(),
        );
        let source = payload.source.clone();
        self.paywall = Some(payload);
        self.emit(NavigationEvent::PaywallPresented { source });
    }

    pub(super) fn hide_paywall(&mut self, target: Option<OverlayId>) {
        let Some(live) = self.paywall.as_ref() else {
            debug!(event = "core.router.paywall_dismiss_skipped", reason = "none live");
            return;
        };
        if target.is_some_and(|id| id != live.id()) {
            debug!(
                event = "core.router.paywall_dismiss_skipped",
                reason = "stale instance",
                live_id = %live.id(),
            );
            return;
        }

        info!(event = "core.router.paywall_dismissed", overlay_id = %live.id());
        self.paywall = None;
        self.emit(NavigationEvent::PaywallDismissed);
    }

    pub(super) fn show_success(&mut self, payload: SuccessPayload) {
        info!(
            event = "core.router.success_presented",
            title = %payload.title,
            action = %payload.primary_action,
            style = %payload.presentation_style,
            overlay_id = %payload.id(),
            replaced = self.success.is_some(),
        );
        let style = payload.presentation_style;
        self.success = Some(payload);
        self.emit(NavigationEvent::SuccessPresented { style });
    }

    pub(super) fn hide_success(&mut self, target: Option<OverlayId>) {
        let Some(live) = self.success.as_ref() else {
            debug!(event = "core.router.success_dismiss_skipped", reason = "none live");
            return;
        };
        if target.is_some_and(|id| id != live.id()) {
            debug!(
                event = "core.router.success_dismiss_skipped",
                reason = "stale instance",
                live_id = %live.id(),
            );
            return;
        }

        info!(event = "core.router.success_dismissed", overlay_id = %live.id());
        self.success = None;
        self.emit(NavigationEvent::SuccessDismissed);
    }

    /// Consume the live success overlay and run the command its primary action maps to.
    pub(super) fn resolve_success(&mut self) {
        let Some(payload) = self.success.take() else {
            debug!(event = "core.router.success_resolve_skipped", reason = "none live");
            return;
        };

        let action = payload.primary_action;
        info!(
            event = "core.router.success_resolved",
            action = %action,
            overlay_id = %payload.id(),
        );
        self.emit(NavigationEvent::SuccessPrimaryHandled { action });

        if let Some(command) = action.route_command() {
            self.apply_command(command);
        }
    }
}
