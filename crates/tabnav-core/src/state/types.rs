use std::fmt;

use serde::{Deserialize, Serialize};

use crate::overlays::PresentationStyle;

/// Top-level flow. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    #[default]
    Onboarding,
    Authorized,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flow::Onboarding => write!(f, "onboarding"),
            Flow::Authorized => write!(f, "authorized"),
        }
    }
}

/// Tab of the authorized flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Profile];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Profile => "profile",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cross-flow transitions. Commands are inputs only and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Enter the authorized flow on a fresh root of `tab`.
    GoAuthorizedRoot { tab: Tab },
    /// Reset everything and return to the start of onboarding.
    LogoutToOnboarding,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::GoAuthorizedRoot { tab } => write!(f, "go_authorized_root({tab})"),
            Command::LogoutToOnboarding => write!(f, "logout_to_onboarding"),
        }
    }
}

/// Startup options fixed for the lifetime of a router.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterOptions {
    /// Tab selected at startup and after logout.
    pub default_tab: Tab,
    /// Style used when a success overlay is presented without one.
    pub default_success_style: PresentationStyle,
}
