use tracing::{debug, info};

use crate::state::events::NavigationEvent;
use crate::state::store::Router;
use crate::state::types::{Command, Flow, Tab};

impl Router {
    /// Apply a cross-flow command as one coordinated transition.
    ///
    /// Stack clears are silent. Overlay dismissals go through the ordinary dismiss path
    /// and report themselves. `CommandHandled` is emitted last.
    pub(super) fn apply_command(&mut self, command: Command) {
        info!(
            event = "core.router.command_started",
            command = %command,
            flow = %self.flow,
            tab = %self.selected_tab,
        );

        match command {
            Command::GoAuthorizedRoot { tab } => {
                let onboarding_cleared = self.onboarding.clear();
                let feature_cleared = self.clear_feature_stacks();
                self.hide_paywall(None);
                self.hide_success(None);
                self.flow = Flow::Authorized;
                self.selected_tab = tab;
                debug!(
                    event = "core.router.stacks_cleared",
                    onboarding = onboarding_cleared,
                    feature = feature_cleared,
                );
            }
            Command::LogoutToOnboarding => {
                let feature_cleared = self.clear_feature_stacks();
                self.hide_paywall(None);
                self.hide_success(None);
                self.selected_tab = self.options.default_tab;
                self.flow = Flow::Onboarding;
                let onboarding_cleared = self.onboarding.clear();
                debug!(
                    event = "core.router.stacks_cleared",
                    onboarding = onboarding_cleared,
                    feature = feature_cleared,
                );
            }
        }

        info!(
            event = "core.router.command_completed",
            command = %command,
            flow = %self.flow,
            tab = %self.selected_tab,
        );
        self.emit(NavigationEvent::CommandHandled { command });
    }

    fn clear_feature_stacks(&mut self) -> usize {
        Tab::ALL
            .into_iter()
            .map(|tab| self.clear_tab_stack(tab))
            .sum()
    }

    pub(super) fn change_tab(&mut self, tab: Tab) {
        if self.flow != Flow::Authorized {
            debug!(
                event = "core.router.tab_select_skipped",
                tab = %tab,
                reason = "not authorized",
            );
            return;
        }
        if self.selected_tab == tab {
            debug!(
                event = "core.router.tab_select_skipped",
                tab = %tab,
                reason = "already selected",
            );
            return;
        }

        info!(event = "core.router.tab_selected", from = %self.selected_tab, to = %tab);
        self.selected_tab = tab;
        self.emit(NavigationEvent::TabSelected { tab });
    }
}
