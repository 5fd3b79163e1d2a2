use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info, warn};

use tabnav_core::config::{self, ConfigError, TabnavConfig};
use tabnav_core::tracking::tracker_from_name;
use tabnav_core::{
    FanOutTracker, HandleError, NavigationEvent, RecordingTracker, Router, RouterHandle,
    RouterSnapshot, Script, TabnavError,
};

/// Load user and project config, then the `--config` file if one was given.
pub fn load_config(matches: &ArgMatches) -> Result<TabnavConfig, ConfigError> {
    let mut config = TabnavConfig::load_hierarchy()?;

    if let Some(path) = matches.get_one::<String>("config") {
        let extra = config::load_config_file(Path::new(path))?;
        config = config::merge_configs(config, extra);
        config::validate_config(&config)?;
        info!(event = "cli.config.override_applied", path = %path);
    }

    Ok(config)
}

/// Print a failure for the user, log it, and box it for `main`.
pub fn fail<E: TabnavError>(command: &str, e: E) -> Box<dyn std::error::Error> {
    eprintln!("Error: {}", e);
    if e.is_user_error() {
        warn!(
            event = "cli.command_failed",
            command = command,
            code = e.error_code(),
            error = %e,
        );
    } else {
        error!(
            event = "cli.command_failed",
            command = command,
            code = e.error_code(),
            error = %e,
        );
    }
    Box::new(e)
}

/// Outcome of applying scripts to a fresh router.
pub struct RunOutcome {
    pub steps: usize,
    pub snapshot: RouterSnapshot,
    pub events: Vec<NavigationEvent>,
}

/// Apply `scripts` in order to one fresh router built from `config`.
///
/// Events are recorded for the report and also forwarded to the configured tracker.
pub fn run_scripts(config: &TabnavConfig, scripts: &[Script]) -> Result<RunOutcome, HandleError> {
    let recording = RecordingTracker::new();
    let tracker = FanOutTracker::new()
        .with(recording.clone())
        .with_boxed(tracker_from_name(config.tracking.tracker()));
    let router = Router::with_options(config.router_options()).with_tracker(tracker);
    let handle = RouterHandle::new(router);

    let mut steps = 0;
    for script in scripts {
        steps += handle.update(|router| script.apply(router))?;
    }

    Ok(RunOutcome {
        steps,
        snapshot: handle.snapshot()?,
        events: recording.take(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabnav_core::script::find_recipe;
    use tabnav_core::{Flow, Tab};

    #[test]
    fn test_run_scripts_records_events_across_scripts() {
        let scripts = vec![
            find_recipe("go-to-profile-root").unwrap().script(),
            find_recipe("open-profile-notifications").unwrap().script(),
        ];
        let outcome = run_scripts(&TabnavConfig::default(), &scripts).unwrap();

        assert_eq!(outcome.steps, 3);
        assert_eq!(outcome.snapshot.flow, Flow::Authorized);
        assert_eq!(outcome.snapshot.selected_tab, Tab::Profile);
        assert_eq!(outcome.snapshot.profile.depth, 2);
        assert_eq!(outcome.events.len(), 3);
    }

    #[test]
    fn test_run_scripts_with_no_scripts() {
        let outcome = run_scripts(&TabnavConfig::default(), &[]).unwrap();
        assert_eq!(outcome.steps, 0);
        assert!(outcome.events.is_empty());
        assert!(outcome.snapshot.is_at_rest());
    }
}
