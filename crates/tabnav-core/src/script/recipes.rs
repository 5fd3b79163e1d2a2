//! Named navigation recipes for common cross-area moves.

use crate::overlays::{PresentationStyle, SuccessAction};
use crate::routes::{AnyRoute, Area, OnboardingRoute, ProfileRoute};
use crate::script::errors::ScriptError;
use crate::script::types::{Script, Step};
use crate::state::types::{Command, Tab};

#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    pub name: &'static str,
    pub summary: &'static str,
    steps: fn() -> Vec<Step>,
}

impl Recipe {
    pub fn script(&self) -> Script {
        Script {
            description: Some(self.summary.to_string()),
            steps: (self.steps)(),
        }
    }
}

static RECIPES: [Recipe; 8] = [
    Recipe {
        name: "go-to-onboarding-start",
        summary: "Log out and return to the first onboarding screen",
        steps: go_to_onboarding_start,
    },
    Recipe {
        name: "go-to-profile-root",
        summary: "Enter the authorized flow on the profile tab root",
        steps: go_to_profile_root,
    },
    Recipe {
        name: "pop-two-in-home",
        summary: "Go back two screens in the home stack",
        steps: pop_two_in_home,
    },
    Recipe {
        name: "back-to-edit-in-profile",
        summary: "Pop the profile stack back to the edit screen",
        steps: back_to_edit_in_profile,
    },
    Recipe {
        name: "open-profile-notifications",
        summary: "Open profile edit, then notifications",
        steps: open_profile_notifications,
    },
    Recipe {
        name: "show-onboarding-paywall",
        summary: "Present the onboarding paywall",
        steps: show_onboarding_paywall,
    },
    Recipe {
        name: "show-global-success-sheet",
        summary: "Present a dismiss-only success sheet",
        steps: show_global_success_sheet,
    },
    Recipe {
        name: "finish-onboarding",
        summary: "Complete onboarding through the success screen into home",
        steps: finish_onboarding,
    },
];

pub fn recipes() -> &'static [Recipe] {
    &RECIPES
}

pub fn find_recipe(name: &str) -> Result<&'static Recipe, ScriptError> {
    RECIPES
        .iter()
        .find(|recipe| recipe.name == name)
        .ok_or_else(|| ScriptError::UnknownRecipe {
            name: name.to_string(),
            available: RECIPES
                .iter()
                .map(|recipe| recipe.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

fn go_to_onboarding_start() -> Vec<Step> {
    vec![Step::Command {
        command: Command::LogoutToOnboarding,
    }]
}

fn go_to_profile_root() -> Vec<Step> {
    vec![Step::Command {
        command: Command::GoAuthorizedRoot { tab: Tab::Profile },
    }]
}

fn pop_two_in_home() -> Vec<Step> {
    vec![Step::Pop {
        area: Area::Home,
        count: 2,
    }]
}

fn back_to_edit_in_profile() -> Vec<Step> {
    vec![Step::PopTo {
        route: AnyRoute::Profile(ProfileRoute::Edit),
    }]
}

fn open_profile_notifications() -> Vec<Step> {
    vec![
        Step::Push {
            route: AnyRoute::Profile(ProfileRoute::Edit),
        },
        Step::Push {
            route: AnyRoute::Profile(ProfileRoute::Notifications),
        },
    ]
}

fn show_onboarding_paywall() -> Vec<Step> {
    vec![Step::PresentPaywall {
        source: "onboarding".to_string(),
        offer_title: "Premium Annual".to_string(),
        offer_subtitle: "Start your 7-day free trial".to_string(),
    }]
}

fn show_global_success_sheet() -> Vec<Step> {
    vec![Step::PresentSuccess {
        title: "Saved".to_string(),
        message: "Your changes were saved.".to_string(),
        primary_button: "OK".to_string(),
        primary_action: SuccessAction::Dismiss,
        style: Some(PresentationStyle::Sheet),
    }]
}

fn finish_onboarding() -> Vec<Step> {
    vec![
        Step::Push {
            route: AnyRoute::Onboarding(OnboardingRoute::FinalStep),
        },
        Step::PresentSuccess {
            title: "Done!".to_string(),
            message: "Onboarding is complete.".to_string(),
            primary_button: "Open App".to_string(),
            primary_action: SuccessAction::GoAuthorizedHomeRoot,
            style: Some(PresentationStyle::FullScreen),
        },
        Step::ResolveSuccessPrimary,
    ]
}
