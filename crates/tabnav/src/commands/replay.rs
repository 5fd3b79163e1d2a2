use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::{debug, info};

use tabnav_core::Script;
use tabnav_paths::TabnavPaths;

use super::helpers::{fail, load_config, run_scripts};
use super::report::print_outcome;

/// A path that exists wins; otherwise look for a saved script of that name.
fn resolve_script_path(arg: &str) -> PathBuf {
    let direct = Path::new(arg);
    if direct.is_file() {
        return direct.to_path_buf();
    }

    if let Ok(paths) = TabnavPaths::resolve() {
        let saved = paths.script_file(arg);
        if saved.is_file() {
            debug!(event = "cli.replay.saved_script_found", path = %saved.display());
            return saved;
        }
    }

    direct.to_path_buf()
}

pub(crate) fn handle_replay_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let script_arg = matches
        .get_one::<String>("script")
        .ok_or("Script argument is required")?;
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.replay.started",
        script = %script_arg,
        json_output = json_output,
    );

    let path = resolve_script_path(script_arg);
    let script = Script::load(&path).map_err(|e| fail("replay", e))?;
    let config = load_config(matches).map_err(|e| fail("replay", e))?;
    let outcome =
        run_scripts(&config, std::slice::from_ref(&script)).map_err(|e| fail("replay", e))?;

    let label = script
        .description
        .clone()
        .unwrap_or_else(|| path.display().to_string());
    print_outcome(&label, &outcome, json_output)?;

    info!(
        event = "cli.replay.completed",
        steps = outcome.steps,
        events = outcome.events.len(),
    );
    Ok(())
}
