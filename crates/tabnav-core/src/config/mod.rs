//! TOML configuration: types, hierarchical loading and validation.
//!
//! Sources, later ones winning field by field:
//! 1. Built-in defaults
//! 2. User config, `~/.tabnav/config.toml`
//! 3. Project config, `./.tabnav/config.toml`
//! 4. An explicit file passed on the command line

pub mod errors;
mod loading;
mod types;
mod validation;

pub use errors::ConfigError;
pub use loading::{load_config_file, load_hierarchy, load_hierarchy_at, merge_configs};
pub use types::{RouterConfig, TabnavConfig, TrackingConfig};
pub use validation::validate_config;

impl TabnavConfig {
    /// Load configuration from the user and project config files.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, or if the merged
    /// configuration is invalid. Missing files are not errors.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }
}
