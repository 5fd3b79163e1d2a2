use crate::config::errors::ConfigError;
use crate::config::types::TabnavConfig;
use crate::tracking::VALID_TRACKERS;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTracker` if the tracker name is not recognized.
pub fn validate_config(config: &TabnavConfig) -> Result<(), ConfigError> {
    let tracker = config.tracking.tracker();
    if !VALID_TRACKERS.contains(&tracker) {
        return Err(ConfigError::InvalidTracker {
            tracker: tracker.to_string(),
            valid_trackers: VALID_TRACKERS.join(", "),
        });
    }

    Ok(())
}
