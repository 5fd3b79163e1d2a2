use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use tabnav_core::script::recipes;
use tabnav_core::Step;

use crate::color;

#[derive(Serialize)]
struct RecipeEntry {
    name: &'static str,
    summary: &'static str,
    steps: Vec<Step>,
}

pub(crate) fn handle_recipes_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.recipes_started", json_output = json_output);

    if json_output {
        let entries: Vec<RecipeEntry> = recipes()
            .iter()
            .map(|recipe| RecipeEntry {
                name: recipe.name,
                summary: recipe.summary,
                steps: recipe.script().steps,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let width = recipes()
            .iter()
            .map(|recipe| recipe.name.len())
            .max()
            .unwrap_or(0);
        for recipe in recipes() {
            let padded = format!("{:<width$}", recipe.name);
            println!("{}  {}", color::route(&padded), recipe.summary);
        }
    }

    info!(event = "cli.recipes_completed", count = recipes().len());
    Ok(())
}
