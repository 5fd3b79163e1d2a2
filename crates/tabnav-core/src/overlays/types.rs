use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::types::{Command, Tab};

/// Identity of one overlay presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayId(Uuid);

impl OverlayId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OverlayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the success overlay is shown by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationStyle {
    #[default]
    Sheet,
    FullScreen,
}

impl PresentationStyle {
    pub fn name(&self) -> &'static str {
        match self {
            PresentationStyle::Sheet => "sheet",
            PresentationStyle::FullScreen => "full_screen",
        }
    }
}

impl fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What pressing the success overlay's primary button should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessAction {
    Dismiss,
    GoAuthorizedHomeRoot,
    GoAuthorizedProfileRoot,
    LogoutToOnboarding,
}

impl SuccessAction {
    /// The command this action triggers. `Dismiss` only closes the overlay.
    pub fn route_command(self) -> Option<Command> {
        match self {
            SuccessAction::Dismiss => None,
            SuccessAction::GoAuthorizedHomeRoot => {
                Some(Command::GoAuthorizedRoot { tab: Tab::Home })
            }
            SuccessAction::GoAuthorizedProfileRoot => {
                Some(Command::GoAuthorizedRoot { tab: Tab::Profile })
            }
            SuccessAction::LogoutToOnboarding => Some(Command::LogoutToOnboarding),
        }
    }
}

impl fmt::Display for SuccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SuccessAction::Dismiss => "dismiss",
            SuccessAction::GoAuthorizedHomeRoot => "go_authorized_home_root",
            SuccessAction::GoAuthorizedProfileRoot => "go_authorized_profile_root",
            SuccessAction::LogoutToOnboarding => "logout_to_onboarding",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaywallPayload {
    id: OverlayId,
    pub source: String,
    pub offer_title: String,
    pub offer_subtitle: String,
}

impl PaywallPayload {
    pub fn new(
        source: impl Into<String>,
        offer_title: impl Into<String>,
        offer_subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id: OverlayId::new(),
            source: source.into(),
            offer_title: offer_title.into(),
            offer_subtitle: offer_subtitle.into(),
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessPayload {
    id: OverlayId,
    pub title: String,
    pub message: String,
    pub primary_button: String,
    pub primary_action: SuccessAction,
    pub presentation_style: PresentationStyle,
}

impl SuccessPayload {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        primary_button: impl Into<String>,
        primary_action: SuccessAction,
        presentation_style: PresentationStyle,
    ) -> Self {
        Self {
            id: OverlayId::new(),
            title: title.into(),
            message: message.into(),
            primary_button: primary_button.into(),
            primary_action,
            presentation_style,
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }
}
