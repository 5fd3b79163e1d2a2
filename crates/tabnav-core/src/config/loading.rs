use std::fs;
use std::path::Path;

use tabnav_paths::TabnavPaths;
use tracing::{debug, warn};

use crate::config::errors::ConfigError;
use crate::config::types::{RouterConfig, TabnavConfig, TrackingConfig};
use crate::config::validation::validate_config;

/// Load and validate user then project config, resolving both from the environment.
pub fn load_hierarchy() -> Result<TabnavConfig, ConfigError> {
    let paths = match TabnavPaths::resolve() {
        Ok(paths) => Some(paths),
        Err(e) => {
            warn!(event = "core.config.user_config_skipped", error = %e);
            None
        }
    };
    let project_root = std::env::current_dir()?;
    load_hierarchy_at(paths.as_ref(), &project_root)
}

/// Load and validate config from explicit locations.
///
/// `paths` locates the user config; `None` skips it. Missing files are skipped, files
/// that exist but fail to parse are errors.
pub fn load_hierarchy_at(
    paths: Option<&TabnavPaths>,
    project_root: &Path,
) -> Result<TabnavConfig, ConfigError> {
    let mut config = TabnavConfig::default();

    if let Some(paths) = paths {
        config = merge_optional(config, &paths.user_config())?;
    }
    config = merge_optional(config, &TabnavPaths::project_config(project_root))?;

    validate_config(&config)?;
    debug!(
        event = "core.config.load_completed",
        default_tab = %config.router.default_tab(),
        default_success_style = %config.router.default_success_style(),
        tracker = config.tracking.tracker(),
    );
    Ok(config)
}

fn merge_optional(base: TabnavConfig, path: &Path) -> Result<TabnavConfig, ConfigError> {
    match load_config_file(path) {
        Ok(loaded) => {
            debug!(event = "core.config.file_loaded", path = %path.display());
            Ok(merge_configs(base, loaded))
        }
        Err(e) if e.is_file_not_found() => {
            debug!(event = "core.config.file_missing", path = %path.display());
            Ok(base)
        }
        Err(e) => {
            warn!(event = "core.config.load_failed", path = %path.display(), error = %e);
            Err(e)
        }
    }
}

/// Read and parse one config file. A missing file is an `IoError` with `NotFound`.
pub fn load_config_file(path: &Path) -> Result<TabnavConfig, ConfigError> {
    if path.is_dir() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("'{}' is a directory, expected a TOML file", path.display()),
        });
    }
    let content = fs::read_to_string(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)))?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations; set fields in `override_config` win.
pub fn merge_configs(base: TabnavConfig, override_config: TabnavConfig) -> TabnavConfig {
    TabnavConfig {
        router: RouterConfig::merge(&base.router, &override_config.router),
        tracking: TrackingConfig::merge(&base.tracking, &override_config.tracking),
    }
}
