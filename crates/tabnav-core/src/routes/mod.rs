//! Route vocabularies for every navigation area.
//!
//! Each area owns a closed set of destinations. Routes compare structurally, so two
//! `HomeRoute::Details { id: 7 }` values are the same destination, and a stack may hold
//! the same route more than once.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An independent navigation area with its own stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Onboarding,
    Home,
    Profile,
}

impl Area {
    pub const ALL: [Area; 3] = [Area::Onboarding, Area::Home, Area::Profile];

    pub fn name(&self) -> &'static str {
        match self {
            Area::Onboarding => "onboarding",
            Area::Home => "home",
            Area::Profile => "profile",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingRoute {
    Details,
    Step2,
    Step3,
    FinalStep,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeRoute {
    Details { id: u64 },
    Filters,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRoute {
    Edit,
    Notifications,
}

/// Ties a route type to the area whose stack holds it.
pub trait AreaRoute: Clone + PartialEq + fmt::Debug {
    const AREA: Area;

    fn into_any(self) -> AnyRoute;
}

impl AreaRoute for OnboardingRoute {
    const AREA: Area = Area::Onboarding;

    fn into_any(self) -> AnyRoute {
        AnyRoute::Onboarding(self)
    }
}

impl AreaRoute for HomeRoute {
    const AREA: Area = Area::Home;

    fn into_any(self) -> AnyRoute {
        AnyRoute::Home(self)
    }
}

impl AreaRoute for ProfileRoute {
    const AREA: Area = Area::Profile;

    fn into_any(self) -> AnyRoute {
        AnyRoute::Profile(self)
    }
}

/// A route from any area, tagged with the area it belongs to.
///
/// Serialized as `{"area": "home", "route": {"details": {"id": 7}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "area", content = "route", rename_all = "snake_case")]
pub enum AnyRoute {
    Onboarding(OnboardingRoute),
    Home(HomeRoute),
    Profile(ProfileRoute),
}

impl AnyRoute {
    pub fn area(&self) -> Area {
        match self {
            AnyRoute::Onboarding(_) => Area::Onboarding,
            AnyRoute::Home(_) => Area::Home,
            AnyRoute::Profile(_) => Area::Profile,
        }
    }
}

impl fmt::Display for AnyRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyRoute::Onboarding(route) => write!(f, "onboarding/{route:?}"),
            AnyRoute::Home(HomeRoute::Details { id }) => write!(f, "home/Details({id})"),
            AnyRoute::Home(route) => write!(f, "home/{route:?}"),
            AnyRoute::Profile(route) => write!(f, "profile/{route:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_compare_structurally() {
        assert_eq!(HomeRoute::Details { id: 7 }, HomeRoute::Details { id: 7 });
        assert_ne!(HomeRoute::Details { id: 7 }, HomeRoute::Details { id: 8 });
    }

    #[test]
    fn test_any_route_area() {
        assert_eq!(OnboardingRoute::Step2.into_any().area(), Area::Onboarding);
        assert_eq!(HomeRoute::Filters.into_any().area(), Area::Home);
        assert_eq!(ProfileRoute::Edit.into_any().area(), Area::Profile);
    }

    #[test]
    fn test_any_route_json_shape() {
        let route = AnyRoute::Home(HomeRoute::Details { id: 7 });
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"area": "home", "route": {"details": {"id": 7}}})
        );

        let parsed: AnyRoute =
            serde_json::from_str(r#"{"area": "onboarding", "route": "final_step"}"#).unwrap();
        assert_eq!(parsed, AnyRoute::Onboarding(OnboardingRoute::FinalStep));
    }

    #[test]
    fn test_any_route_rejects_route_from_other_area() {
        let result: Result<AnyRoute, _> =
            serde_json::from_str(r#"{"area": "profile", "route": "filters"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AnyRoute::Home(HomeRoute::Details { id: 3 }).to_string(),
            "home/Details(3)"
        );
        assert_eq!(
            AnyRoute::Profile(ProfileRoute::Edit).to_string(),
            "profile/Edit"
        );
        assert_eq!(Area::Onboarding.to_string(), "onboarding");
    }
}
