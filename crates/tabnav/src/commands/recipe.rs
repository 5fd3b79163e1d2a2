use clap::ArgMatches;
use tracing::info;

use tabnav_core::Script;
use tabnav_core::script::find_recipe;

use super::helpers::{fail, load_config, run_scripts};
use super::report::print_outcome;

pub(crate) fn handle_recipe_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<&str> = matches
        .get_many::<String>("name")
        .ok_or("At least one recipe name is required")?
        .map(String::as_str)
        .collect();
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.recipe_started",
        recipes = ?names,
        json_output = json_output,
    );

    let scripts = names
        .iter()
        .map(|name| find_recipe(name).map(|recipe| recipe.script()))
        .collect::<Result<Vec<Script>, _>>()
        .map_err(|e| fail("recipe", e))?;

    let config = load_config(matches).map_err(|e| fail("recipe", e))?;
    let outcome = run_scripts(&config, &scripts).map_err(|e| fail("recipe", e))?;

    print_outcome(&names.join(", "), &outcome, json_output)?;

    info!(
        event = "cli.recipe_completed",
        steps = outcome.steps,
        events = outcome.events.len(),
    );
    Ok(())
}
