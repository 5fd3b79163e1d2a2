use serde::{Deserialize, Serialize};

use crate::overlays::{PresentationStyle, SuccessAction};
use crate::routes::{Area, HomeRoute, OnboardingRoute, ProfileRoute};
use crate::stack::StackEvent;
use crate::state::types::{Command, Tab};

/// One state mutation, reported to the tracker after it has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum NavigationEvent {
    Onboarding(StackEvent<OnboardingRoute>),
    Home(StackEvent<HomeRoute>),
    Profile(StackEvent<ProfileRoute>),
    TabSelected { tab: Tab },
    PaywallPresented { source: String },
    PaywallDismissed,
    SuccessPresented { style: PresentationStyle },
    SuccessPrimaryHandled { action: SuccessAction },
    SuccessDismissed,
    CommandHandled { command: Command },
}

impl NavigationEvent {
    /// Stable dotted name used in logs, e.g. `home.popped` or `command_handled`.
    pub fn kind(&self) -> String {
        match self {
            NavigationEvent::Onboarding(event) => format!("{}.{}", Area::Onboarding, event.op()),
            NavigationEvent::Home(event) => format!("{}.{}", Area::Home, event.op()),
            NavigationEvent::Profile(event) => format!("{}.{}", Area::Profile, event.op()),
            NavigationEvent::TabSelected { .. } => "tab_selected".to_string(),
            NavigationEvent::PaywallPresented { .. } => "paywall_presented".to_string(),
            NavigationEvent::PaywallDismissed => "paywall_dismissed".to_string(),
            NavigationEvent::SuccessPresented { .. } => "success_presented".to_string(),
            NavigationEvent::SuccessPrimaryHandled { .. } => {
                "success_primary_handled".to_string()
            }
            NavigationEvent::SuccessDismissed => "success_dismissed".to_string(),
            NavigationEvent::CommandHandled { .. } => "command_handled".to_string(),
        }
    }

    /// The stack area this event touched, if it is a stack event.
    pub fn area(&self) -> Option<Area> {
        match self {
            NavigationEvent::Onboarding(_) => Some(Area::Onboarding),
            NavigationEvent::Home(_) => Some(Area::Home),
            NavigationEvent::Profile(_) => Some(Area::Profile),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let events = vec![
            NavigationEvent::Onboarding(StackEvent::Pushed {
                route: OnboardingRoute::Step2,
            }),
            NavigationEvent::Home(StackEvent::Popped { count: 2 }),
            NavigationEvent::Profile(StackEvent::PoppedTo {
                route: ProfileRoute::Edit,
            }),
            NavigationEvent::Home(StackEvent::PoppedToRoot),
            NavigationEvent::TabSelected { tab: Tab::Profile },
            NavigationEvent::PaywallPresented {
                source: "onboarding".to_string(),
            },
            NavigationEvent::PaywallDismissed,
            NavigationEvent::SuccessPresented {
                style: PresentationStyle::FullScreen,
            },
            NavigationEvent::SuccessPrimaryHandled {
                action: SuccessAction::LogoutToOnboarding,
            },
            NavigationEvent::SuccessDismissed,
            NavigationEvent::CommandHandled {
                command: Command::LogoutToOnboarding,
            },
        ];

        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let parsed: NavigationEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }
    }

    #[test]
    fn test_stack_event_json_shape() {
        let event = NavigationEvent::Home(StackEvent::Pushed {
            route: HomeRoute::Details { id: 4 },
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "home",
                "data": {"op": "pushed", "route": {"details": {"id": 4}}}
            })
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(
            NavigationEvent::Profile(StackEvent::PoppedToRoot).kind(),
            "profile.popped_to_root"
        );
        assert_eq!(NavigationEvent::PaywallDismissed.kind(), "paywall_dismissed");
        assert_eq!(
            NavigationEvent::CommandHandled {
                command: Command::LogoutToOnboarding
            }
            .kind(),
            "command_handled"
        );
    }

    #[test]
    fn test_area() {
        assert_eq!(
            NavigationEvent::Onboarding(StackEvent::Popped { count: 1 }).area(),
            Some(Area::Onboarding)
        );
        assert_eq!(NavigationEvent::SuccessDismissed.area(), None);
    }
}
