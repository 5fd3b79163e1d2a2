use clap::ArgMatches;
use tracing::{error, info};

mod helpers;
mod recipe;
mod recipes;
mod replay;
mod report;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        event = "cli.app_started",
        version = env!("CARGO_PKG_VERSION"),
    );

    match matches.subcommand() {
        Some(("recipes", sub_matches)) => recipes::handle_recipes_command(sub_matches),
        Some(("recipe", sub_matches)) => recipe::handle_recipe_command(sub_matches),
        Some(("replay", sub_matches)) => replay::handle_replay_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
