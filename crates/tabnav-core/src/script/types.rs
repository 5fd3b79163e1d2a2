use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::overlays::{PresentationStyle, SuccessAction};
use crate::routes::{AnyRoute, Area};
use crate::script::errors::ScriptError;
use crate::state::routing::{
    CommandHandling, HomeRouting, OnboardingRouting, ProfileRouting, SuccessRouting, TabRouting,
};
use crate::state::types::{Command, Tab};
use crate::state::Router;

fn one() -> usize {
    1
}

/// One router operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Push {
        route: AnyRoute,
    },
    Pop {
        area: Area,
        #[serde(default = "one")]
        count: usize,
    },
    PopTo {
        route: AnyRoute,
    },
    PopToRoot {
        area: Area,
    },
    SelectTab {
        tab: Tab,
    },
    PresentPaywall {
        source: String,
        offer_title: String,
        offer_subtitle: String,
    },
    DismissPaywall,
    PresentSuccess {
        title: String,
        message: String,
        primary_button: String,
        primary_action: SuccessAction,
        /// Falls back to the router's default style.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<PresentationStyle>,
    },
    ResolveSuccessPrimary,
    DismissSuccess,
    Command {
        command: Command,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Push { .. } => "push",
            Step::Pop { .. } => "pop",
            Step::PopTo { .. } => "pop_to",
            Step::PopToRoot { .. } => "pop_to_root",
            Step::SelectTab { .. } => "select_tab",
            Step::PresentPaywall { .. } => "present_paywall",
            Step::DismissPaywall => "dismiss_paywall",
            Step::PresentSuccess { .. } => "present_success",
            Step::ResolveSuccessPrimary => "resolve_success_primary",
            Step::DismissSuccess => "dismiss_success",
            Step::Command { .. } => "command",
        }
    }

    /// The stack area a step operates on, if any.
    pub fn area(&self) -> Option<Area> {
        match self {
            Step::Push { route } | Step::PopTo { route } => Some(route.area()),
            Step::Pop { area, .. } | Step::PopToRoot { area } => Some(*area),
            _ => None,
        }
    }

    pub fn apply(&self, router: &mut Router) {
        match self {
            Step::Push { route } => match route.clone() {
                AnyRoute::Onboarding(route) => router.onboarding_push(route),
                AnyRoute::Home(route) => router.home_push(route),
                AnyRoute::Profile(route) => router.profile_push(route),
            },
            Step::Pop { area, count } => match area {
                Area::Onboarding => router.onboarding_pop(*count),
                Area::Home => router.home_pop(*count),
                Area::Profile => router.profile_pop(*count),
            },
            Step::PopTo { route } => match route {
                AnyRoute::Onboarding(route) => router.onboarding_pop_to(route),
                AnyRoute::Home(route) => router.home_pop_to(route),
                AnyRoute::Profile(route) => router.profile_pop_to(route),
            },
            Step::PopToRoot { area } => match area {
                Area::Onboarding => router.onboarding_pop_to_root(),
                Area::Home => router.home_pop_to_root(),
                Area::Profile => router.profile_pop_to_root(),
            },
            Step::SelectTab { tab } => router.select_tab(*tab),
            Step::PresentPaywall {
                source,
                offer_title,
                offer_subtitle,
            } => router.present_paywall(source, offer_title, offer_subtitle),
            Step::DismissPaywall => router.dismiss_paywall(),
            Step::PresentSuccess {
                title,
                message,
                primary_button,
                primary_action,
                style,
            } => match style {
                Some(style) => router.present_success_styled(
                    title,
                    message,
                    primary_button,
                    *primary_action,
                    *style,
                ),
                None => router.present_success(title, message, primary_button, *primary_action),
            },
            Step::ResolveSuccessPrimary => router.resolve_success_primary(),
            Step::DismissSuccess => router.dismiss_success(),
            Step::Command { command } => router.handle_command(*command),
        }
    }
}

/// An ordered list of steps, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            description: None,
            steps,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::ParseError {
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|e| match e {
            ScriptError::ParseError { message } => ScriptError::ParseError {
                message: format!("'{}': {}", path.display(), message),
            },
            other => other,
        })
    }

    /// Apply every step in order. Returns the number of steps applied.
    pub fn apply(&self, router: &mut Router) -> usize {
        info!(event = "core.script.apply_started", steps = self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            debug!(
                event = "core.script.step_applied",
                index = index,
                op = step.name(),
                area = ?step.area(),
            );
            step.apply(router);
        }
        info!(event = "core.script.apply_completed", steps = self.steps.len());
        self.steps.len()
    }
}
