use serde::{Deserialize, Serialize};

use crate::overlays::PresentationStyle;
use crate::state::types::{RouterOptions, Tab};

/// Tracker used when none is configured.
pub const DEFAULT_TRACKER: &str = "log";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabnavConfig {
    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,
}

impl TabnavConfig {
    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            default_tab: self.router.default_tab(),
            default_success_style: self.router.default_success_style(),
        }
    }
}

/// `[router]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Tab selected at startup and after logout.
    #[serde(default)]
    pub default_tab: Option<Tab>,

    /// Style used when a success overlay is presented without one.
    #[serde(default)]
    pub default_success_style: Option<PresentationStyle>,
}

impl RouterConfig {
    pub fn default_tab(&self) -> Tab {
        self.default_tab.unwrap_or_default()
    }

    pub fn default_success_style(&self) -> PresentationStyle {
        self.default_success_style.unwrap_or_default()
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            default_tab: override_config.default_tab.or(base.default_tab),
            default_success_style: override_config
                .default_success_style
                .or(base.default_success_style),
        }
    }
}

/// `[tracking]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Tracker name, one of `VALID_TRACKERS`.
    #[serde(default)]
    pub tracker: Option<String>,
}

impl TrackingConfig {
    pub fn tracker(&self) -> &str {
        self.tracker.as_deref().unwrap_or(DEFAULT_TRACKER)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            tracker: override_config
                .tracker
                .clone()
                .or_else(|| base.tracker.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: TabnavConfig = toml::from_str("").unwrap();
        assert_eq!(config.router.default_tab(), Tab::Home);
        assert_eq!(
            config.router.default_success_style(),
            PresentationStyle::Sheet
        );
        assert_eq!(config.tracking.tracker(), "log");
    }

    #[test]
    fn test_full_config_parses() {
        let config: TabnavConfig = toml::from_str(
            r#"
[router]
default_tab = "profile"
default_success_style = "full_screen"

[tracking]
tracker = "none"
"#,
        )
        .unwrap();
        assert_eq!(
            config.router_options(),
            RouterOptions {
                default_tab: Tab::Profile,
                default_success_style: PresentationStyle::FullScreen,
            }
        );
        assert_eq!(config.tracking.tracker(), "none");
    }

    #[test]
    fn test_unknown_tab_is_parse_error() {
        let result: Result<TabnavConfig, _> = toml::from_str("[router]\ndefault_tab = \"settings\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_router_merge_override_wins_when_set() {
        let base = RouterConfig {
            default_tab: Some(Tab::Profile),
            default_success_style: Some(PresentationStyle::FullScreen),
        };
        let override_config = RouterConfig {
            default_tab: Some(Tab::Home),
            default_success_style: None,
        };
        let merged = RouterConfig::merge(&base, &override_config);
        assert_eq!(merged.default_tab, Some(Tab::Home));
        assert_eq!(
            merged.default_success_style,
            Some(PresentationStyle::FullScreen)
        );
    }

    #[test]
    fn test_tracking_merge_keeps_base_when_unset() {
        let base = TrackingConfig {
            tracker: Some("none".to_string()),
        };
        let merged = TrackingConfig::merge(&base, &TrackingConfig::default());
        assert_eq!(merged.tracker(), "none");
    }
}
